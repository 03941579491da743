//! External AI collaborator boundary.
//!
//! The engine talks to the agent through the [`AgentService`] trait; the
//! production implementation is the HTTP chat-completion client in
//! [`client`]. All service failures are recovered locally: the conversation
//! falls back to the rule-based [`responder`] and task extraction falls back
//! to pattern matching. No agent failure is ever surfaced as a user-visible
//! error.

pub mod client;
pub mod responder;

pub use client::HttpAgentClient;

use crate::chat::Message;
use crate::graph::TopicNode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("network error: {0}")]
    Network(String),
    #[error("agent API error: {0}")]
    Api(String),
    #[error("malformed agent response: {0}")]
    Serialization(String),
    #[error("configuration error: {0}")]
    Config(String),
}

pub type AgentResult<T> = Result<T, AgentError>;

/// One agent round-trip request.
#[derive(Debug, Clone, Serialize)]
pub struct AgentRequest {
    /// Recent transcript, oldest first.
    pub context: Vec<Message>,
    /// The message that triggered this round trip.
    pub text: String,
    /// Display name of the sender.
    pub sender: String,
}

/// A successful agent reply.
///
/// An absent `keywords` field deserializes to an empty list; the two are
/// treated identically downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentReply {
    pub text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Asynchronous text-completion collaborator.
///
/// Implementations must be cheap to share; the engine calls them from
/// spawned tasks so a slow round trip never stalls the simulation tick.
#[async_trait]
pub trait AgentService: Send + Sync + 'static {
    /// Produce a conversational reply, possibly with suggested topic keywords.
    async fn respond(&self, request: AgentRequest) -> AgentResult<AgentReply>;

    /// Extract action items from one message. May legitimately return an
    /// empty list.
    async fn extract_tasks(&self, message: &str, sender: &str) -> AgentResult<Vec<String>>;

    /// Summarize the current topic graph in a sentence or two.
    async fn analyze_graph(&self, nodes: &[TopicNode]) -> AgentResult<String>;
}
