//! Topic link: an undirected edge between two topic nodes.

use serde::{Deserialize, Serialize};

/// An undirected edge referencing two topic ids.
///
/// Links are append-only: never updated, never deleted. A link may reference
/// an id that has not resolved to a node yet; consumers drop such links from
/// rendering rather than treating them as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicLink {
    pub source: String,
    pub target: String,
}

impl TopicLink {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        TopicLink {
            source: source.into(),
            target: target.into(),
        }
    }

    /// True if this link joins `a` and `b` in either orientation.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}
