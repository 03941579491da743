//! In-memory topic graph storage.
//!
//! The store is the only owner of the node and link collections. All
//! producers (message handler, agent callback, enrichment timer, physics
//! tick) run on the single engine task, so mutation is serialized by
//! construction; readers only ever see published clones.

use super::link::TopicLink;
use super::node::TopicNode;
use indexmap::IndexMap;
use rand::Rng;

/// Fixed layout center the physics pulls toward and new nodes spawn near.
pub const LAYOUT_CENTER: (f64, f64) = (200.0, 200.0);

/// New nodes spawn within this offset of the layout center on each axis.
const SPAWN_SPREAD: f64 = 50.0;

/// Result of [`TopicGraph::grow_or_create`], carrying the canonical node id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrowOutcome {
    /// A new node was appended under the given id.
    Created(String),
    /// An existing node (matched case-insensitively) grew by one increment.
    Grown(String),
}

impl GrowOutcome {
    /// Canonical id of the affected node, under its stored casing.
    pub fn id(&self) -> &str {
        match self {
            GrowOutcome::Created(id) | GrowOutcome::Grown(id) => id,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, GrowOutcome::Created(_))
    }
}

/// The mutable knowledge graph: topic nodes keyed by id, plus undirected links.
///
/// Uniqueness of node ids is structurally enforced by the keyed map; insertion
/// order is preserved so snapshots are stable for renderers. Nodes are never
/// deleted and links are append-only.
#[derive(Debug, Clone, Default)]
pub struct TopicGraph {
    nodes: IndexMap<String, TopicNode>,
    links: Vec<TopicLink>,
}

impl TopicGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        TopicGraph::default()
    }

    /// Create a graph seeded with one primary topic at the layout center.
    pub fn with_seed(topic: &str, size: f64) -> Self {
        let mut graph = TopicGraph::new();
        let (cx, cy) = LAYOUT_CENTER;
        graph
            .nodes
            .insert(topic.to_string(), TopicNode::with_size(topic, size, cx, cy));
        graph
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Look up a node by exact id.
    pub fn get(&self, id: &str) -> Option<&TopicNode> {
        self.nodes.get(id)
    }

    /// Resolve a keyword to the canonical id of an existing node, ignoring
    /// ASCII case. Linear scan; the graph holds tens of nodes at most.
    pub fn resolve_id(&self, keyword: &str) -> Option<&str> {
        self.nodes
            .keys()
            .find(|id| id.eq_ignore_ascii_case(keyword))
            .map(|id| id.as_str())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TopicNode> {
        self.nodes.values()
    }

    /// Clone the full node set, in insertion order.
    pub fn node_snapshot(&self) -> Vec<TopicNode> {
        self.nodes.values().cloned().collect()
    }

    pub fn links(&self) -> &[TopicLink] {
        &self.links
    }

    /// Grow an existing topic or create a new one.
    ///
    /// Matching is case-insensitive; the node keeps the casing it was first
    /// stored under. An existing node grows by the fixed increment; a new
    /// node spawns at base size near the layout center, offset by `rng` so it
    /// does not stack on the seed. Empty or whitespace-only keywords are
    /// rejected as a no-op.
    pub fn grow_or_create<R: Rng>(&mut self, keyword: &str, rng: &mut R) -> Option<GrowOutcome> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return None;
        }

        if let Some(id) = self.resolve_id(keyword).map(str::to_string) {
            if let Some(node) = self.nodes.get_mut(&id) {
                node.grow();
            }
            return Some(GrowOutcome::Grown(id));
        }

        let (cx, cy) = LAYOUT_CENTER;
        let x = cx + rng.gen::<f64>() * SPAWN_SPREAD;
        let y = cy + rng.gen::<f64>() * SPAWN_SPREAD;
        self.nodes
            .insert(keyword.to_string(), TopicNode::new(keyword, x, y));
        Some(GrowOutcome::Created(keyword.to_string()))
    }

    /// True if a link joins `a` and `b` in either orientation.
    pub fn has_link(&self, a: &str, b: &str) -> bool {
        self.links.iter().any(|link| link.connects(a, b))
    }

    /// Insert the link `(source, target)` unless it already exists in either
    /// orientation or would form a self-loop. Returns whether a link was added.
    pub fn link_if_absent(&mut self, source: &str, target: &str) -> bool {
        if source.is_empty() || target.is_empty() || source.eq_ignore_ascii_case(target) {
            return false;
        }
        if self.has_link(source, target) {
            return false;
        }
        self.links.push(TopicLink::new(source, target));
        true
    }

    /// Replace the entire node set with the output of one physics tick.
    ///
    /// The simulation computes every new position from the same previous
    /// snapshot, then commits the whole set at once.
    pub fn replace_nodes(&mut self, moved: Vec<TopicNode>) {
        self.nodes = moved
            .into_iter()
            .map(|node| (node.id.clone(), node))
            .collect();
    }
}
