//! HTTP client for an OpenAI-style chat-completion endpoint.

use super::{AgentError, AgentReply, AgentRequest, AgentResult, AgentService};
use crate::config::AgentConfig;
use crate::graph::TopicNode;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

/// The shape the respond prompt asks the model to emit.
#[derive(Deserialize)]
struct StructuredReply {
    response: String,
    #[serde(default)]
    keywords: Vec<String>,
}

const RESPOND_SYSTEM_PROMPT: &str = "You are Omni, an AI teammate observing a project \
discussion. Reply briefly and helpfully. Answer ONLY with JSON of the form \
{\"response\": \"...\", \"keywords\": [\"...\"]}, where keywords are the topic terms \
worth tracking (omit or leave empty when there are none).";

const TASKS_SYSTEM_PROMPT: &str = "You extract action items from chat messages. Answer \
ONLY with a JSON array of short task descriptions, [] when there are none.";

const INSIGHT_SYSTEM_PROMPT: &str = "You summarize a discussion topic graph. Given topics \
and their importance weights, reply with one or two plain sentences about where the \
conversation is concentrating.";

/// `AgentService` backed by a remote chat-completion server.
pub struct HttpAgentClient {
    client: Client,
    config: AgentConfig,
}

impl HttpAgentClient {
    pub fn new(config: AgentConfig) -> AgentResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AgentError::Config(e.to_string()))?;
        Ok(HttpAgentClient { client, config })
    }

    /// Probe the endpoint's model listing. False on any failure.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/v1/models", self.config.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn completion(&self, system: &str, user: String) -> AgentResult<String> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&CompletionRequest {
                model: &self.config.model,
                messages: vec![
                    ChatMessage {
                        role: "system".to_string(),
                        content: system.to_string(),
                    },
                    ChatMessage {
                        role: "user".to_string(),
                        content: user,
                    },
                ],
            })
            .send()
            .await
            .map_err(|e| AgentError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AgentError::Api(format!("status {}", resp.status())));
        }

        let result: CompletionResponse = resp
            .json()
            .await
            .map_err(|e| AgentError::Serialization(e.to_string()))?;
        result
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AgentError::Serialization("empty choices".to_string()))
    }
}

#[async_trait]
impl AgentService for HttpAgentClient {
    async fn respond(&self, request: AgentRequest) -> AgentResult<AgentReply> {
        let mut prompt = String::new();
        for message in &request.context {
            prompt.push_str(&format!("{}: {}\n", message.sender.name, message.text));
        }
        prompt.push_str(&format!("{}: {}", request.sender, request.text));

        let content = self.completion(RESPOND_SYSTEM_PROMPT, prompt).await?;

        // Models occasionally ignore the JSON instruction; a plain-text reply
        // is still a usable reply, just without keywords.
        match serde_json::from_str::<StructuredReply>(content.trim()) {
            Ok(reply) => Ok(AgentReply {
                text: reply.response,
                keywords: reply.keywords,
            }),
            Err(_) => Ok(AgentReply {
                text: content.trim().to_string(),
                keywords: Vec::new(),
            }),
        }
    }

    async fn extract_tasks(&self, message: &str, sender: &str) -> AgentResult<Vec<String>> {
        let prompt = format!("{} wrote: {}", sender, message);
        let content = self.completion(TASKS_SYSTEM_PROMPT, prompt).await?;
        serde_json::from_str::<Vec<String>>(content.trim())
            .map_err(|e| AgentError::Serialization(e.to_string()))
    }

    async fn analyze_graph(&self, nodes: &[TopicNode]) -> AgentResult<String> {
        let listing = nodes
            .iter()
            .map(|node| format!("{} (weight {:.0})", node.id, node.size))
            .collect::<Vec<_>>()
            .join(", ");
        self.completion(INSIGHT_SYSTEM_PROMPT, format!("Topics: {listing}"))
            .await
    }
}
