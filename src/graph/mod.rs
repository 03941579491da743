//! Knowledge graph data model and storage.
//!
//! A `TopicGraph` owns the topic nodes and their undirected links. Growth
//! comes from keyword mentions, the agent's suggested keywords, and the
//! periodic enrichment pass; layout motion comes from the physics stepper.

pub mod link;
pub mod node;
pub mod store;

pub use link::TopicLink;
pub use node::{TopicNode, BASE_SIZE, GROWTH_INCREMENT};
pub use store::{GrowOutcome, TopicGraph, LAYOUT_CENTER};
