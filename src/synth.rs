//! Link synthesis: the three producers of new graph links.
//!
//! Each function is pure over a node snapshot and returns candidate id pairs.
//! Candidates are only committed through `TopicGraph::link_if_absent`, which
//! drops duplicates (either orientation) and self-loops.

use crate::graph::TopicNode;
use rand::seq::SliceRandom;
use rand::Rng;

/// Agent-suggested topics connect to at most this many existing nodes.
const MAX_KEYWORD_CONNECTIONS: usize = 3;

/// Enrichment only runs once the graph has more than this many nodes, so
/// unrelated seed topics are not connected prematurely.
const ENRICHMENT_MIN_NODES: usize = 2;

/// Link keywords that were mentioned together in one message.
///
/// Produces the consecutive-pair path `(k[0],k[1]), (k[1],k[2]), ...` through
/// the matches in vocabulary order, not the full clique. Fewer than two
/// keywords yield nothing.
pub fn co_mention_pairs(keywords: &[String]) -> Vec<(String, String)> {
    keywords
        .windows(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}

/// Connect one agent-suggested keyword to a random subset of the other nodes.
///
/// Picks 1 to 3 targets (bounded by how many other nodes exist) via an
/// unbiased shuffle-then-take-prefix, giving externally sourced topics
/// organic connectivity without saturating the graph.
pub fn keyword_pairs<R: Rng>(
    keyword: &str,
    all_nodes: &[TopicNode],
    rng: &mut R,
) -> Vec<(String, String)> {
    let mut others: Vec<&TopicNode> = all_nodes
        .iter()
        .filter(|node| !node.id.eq_ignore_ascii_case(keyword))
        .collect();
    if others.is_empty() {
        return Vec::new();
    }

    let count = rng
        .gen_range(1..=MAX_KEYWORD_CONNECTIONS)
        .min(others.len());
    others.shuffle(rng);

    others[..count]
        .iter()
        .map(|target| (keyword.to_string(), target.id.clone()))
        .collect()
}

/// Periodic enrichment: Bernoulli-sample every unordered node pair.
///
/// Each pair is proposed with probability `density`. Sparse graphs (two nodes
/// or fewer) are left alone.
pub fn enrichment_pairs<R: Rng>(
    nodes: &[TopicNode],
    density: f64,
    rng: &mut R,
) -> Vec<(String, String)> {
    if nodes.len() <= ENRICHMENT_MIN_NODES {
        return Vec::new();
    }

    let mut pairs = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if rng.gen::<f64>() < density {
                pairs.push((nodes[i].id.clone(), nodes[j].id.clone()));
            }
        }
    }
    pairs
}
