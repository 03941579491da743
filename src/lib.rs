//! Community Pulse
//!
//! A live discussion-visualization engine: a chat stream feeds a
//! continuously updating knowledge graph of topics and a task-extraction
//! board.
//!
//! # Architecture
//!
//! - [`keywords`]: fixed-vocabulary keyword extraction from message text.
//! - [`graph`]: the topic graph: nodes keyed by id, append-only undirected
//!   links, idempotent grow-or-create and link-if-absent mutations.
//! - [`physics`]: pure per-tick layout stepper (jitter, centering,
//!   short-range repulsion) with a zero-distance guard.
//! - [`synth`]: the three link producers: co-mention paths, agent-keyword
//!   connectivity, periodic Bernoulli enrichment.
//! - [`agent`]: the external AI collaborator boundary: an async service
//!   trait, an HTTP chat-completion client, and a rule-based degraded-mode
//!   responder.
//! - [`tasks`]: the task board plus the local action-item pattern fallback.
//! - [`engine`]: the actor that owns all mutable state, serializes every
//!   producer (message sends, agent completions, physics and enrichment
//!   timers) and publishes consistent snapshots over a watch channel.
//!
//! # Example
//!
//! ```no_run
//! use community_pulse::agent::HttpAgentClient;
//! use community_pulse::chat::default_participants;
//! use community_pulse::config::{AgentConfig, EngineConfig};
//! use community_pulse::engine::Engine;
//! use std::sync::Arc;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = HttpAgentClient::new(AgentConfig::default())?;
//! let handle = Engine::spawn(EngineConfig::default(), Arc::new(client));
//!
//! let dev_lead = default_participants().remove(0);
//! handle.send_message(dev_lead, "We need to fix the API latency").await?;
//!
//! let snapshot = handle.snapshot();
//! println!("{} topics, {} links", snapshot.nodes.len(), snapshot.links.len());
//! handle.shutdown().await;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod agent;
pub mod chat;
pub mod config;
pub mod engine;
pub mod graph;
pub mod keywords;
pub mod physics;
pub mod synth;
pub mod tasks;

// Re-export main types for convenience
pub use agent::{AgentError, AgentReply, AgentRequest, AgentResult, AgentService, HttpAgentClient};
pub use chat::{agent_identity, default_participants, Message, Participant};
pub use config::{AgentConfig, EngineConfig};
pub use engine::{Engine, EngineError, EngineHandle, EngineResult, Snapshot};
pub use graph::{GrowOutcome, TopicGraph, TopicLink, TopicNode};
pub use keywords::{extract_keywords, VOCABULARY};
pub use tasks::{detect_action_item, Task, TaskBoard};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
