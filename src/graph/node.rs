//! Topic node: one vertex of the knowledge graph.

use serde::{Deserialize, Serialize};

/// Size assigned to a node on first creation.
pub const BASE_SIZE: f64 = 30.0;

/// Size added on every re-mention of an existing topic.
pub const GROWTH_INCREMENT: f64 = 15.0;

/// A topic vertex with a visual weight and a 2D layout position.
///
/// The id is the matched vocabulary term (or the raw agent-supplied keyword)
/// under its original casing. Positions live in an unbounded plane and are
/// mutated only by the physics stepper; they must stay finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicNode {
    /// Canonical topic id, unique within the graph.
    pub id: String,

    /// Importance weight; monotonically non-decreasing.
    pub size: f64,

    /// Layout x coordinate.
    pub x: f64,

    /// Layout y coordinate.
    pub y: f64,
}

impl TopicNode {
    /// Create a node at an explicit position with the base size.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        TopicNode {
            id: id.into(),
            size: BASE_SIZE,
            x,
            y,
        }
    }

    /// Create a node with an explicit size (used for the seeded primary topic).
    pub fn with_size(id: impl Into<String>, size: f64, x: f64, y: f64) -> Self {
        TopicNode {
            id: id.into(),
            size,
            x,
            y,
        }
    }

    /// Increase the importance weight by one re-mention increment.
    pub fn grow(&mut self) {
        self.size += GROWTH_INCREMENT;
    }
}
