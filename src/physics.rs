//! Per-tick layout physics for the topic graph.
//!
//! One forward-Euler step per node: random jitter, a proportional pull
//! toward the layout center, and short-range pairwise repulsion. There is no
//! momentum term, so the layout never blows up; it also never fully settles,
//! which keeps the visualization looking alive.

use crate::graph::{TopicNode, LAYOUT_CENTER};
use rand::Rng;

/// Jitter is uniform in [-0.4, 0.4] on each axis.
const JITTER_SPAN: f64 = 0.8;

/// Proportional coefficient of the center-seeking force.
const CENTER_PULL: f64 = 0.005;

/// Repulsion applies between nodes closer than this.
const REPULSION_RADIUS: f64 = 80.0;

/// Magnitude of the repulsion push along the separating vector.
const REPULSION_STRENGTH: f64 = 2.0;

/// Below this separation two nodes count as coincident; the push falls back
/// to a fixed axis instead of dividing by a vanishing distance.
const MIN_DISTANCE: f64 = 1e-4;

/// Advance one node by a single tick against the full previous snapshot.
///
/// Pure: reads `all_nodes` as the snapshot every node moves against, returns
/// the moved node. Guaranteed to return finite coordinates; if the sum ever
/// degenerates the node simply keeps its previous position.
pub fn step_node<R: Rng>(node: &TopicNode, all_nodes: &[TopicNode], rng: &mut R) -> TopicNode {
    let (cx, cy) = LAYOUT_CENTER;

    // Organic motion so the layout never freezes.
    let mut dx = (rng.gen::<f64>() - 0.5) * JITTER_SPAN;
    let mut dy = (rng.gen::<f64>() - 0.5) * JITTER_SPAN;

    // Center gravity.
    dx += (cx - node.x) * CENTER_PULL;
    dy += (cy - node.y) * CENTER_PULL;

    // Short-range repulsion from every other node.
    for other in all_nodes {
        if other.id == node.id {
            continue;
        }
        let dist = (node.x - other.x).hypot(node.y - other.y);
        if dist >= REPULSION_RADIUS {
            continue;
        }
        if dist > MIN_DISTANCE {
            dx += (node.x - other.x) / dist * REPULSION_STRENGTH;
            dy += (node.y - other.y) / dist * REPULSION_STRENGTH;
        } else {
            // Coincident nodes: push along a fixed axis so they separate
            // next tick instead of producing NaN.
            dx += REPULSION_STRENGTH;
        }
    }

    let (x, y) = (node.x + dx, node.y + dy);
    if !x.is_finite() || !y.is_finite() {
        return node.clone();
    }

    let mut moved = node.clone();
    moved.x = x;
    moved.y = y;
    moved
}

/// Advance every node by one tick.
///
/// All nodes move simultaneously against the same previous snapshot; stepping
/// sequentially would bias the layout by iteration order.
pub fn step_all<R: Rng>(nodes: &[TopicNode], rng: &mut R) -> Vec<TopicNode> {
    nodes
        .iter()
        .map(|node| step_node(node, nodes, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_lone_node_drifts_toward_center() {
        let node = TopicNode::new("API", 400.0, 400.0);
        let mut rng = StdRng::seed_from_u64(1);
        let moved = step_node(&node, &[node.clone()], &mut rng);
        // Center pull of (200-400)*0.005 = -1.0 dominates the 0.4 jitter cap.
        assert!(moved.x < node.x);
        assert!(moved.y < node.y);
    }

    #[test]
    fn test_close_nodes_repel() {
        let a = TopicNode::new("API", 200.0, 200.0);
        let b = TopicNode::new("Latency", 210.0, 200.0);
        let all = vec![a.clone(), b.clone()];
        let mut rng = StdRng::seed_from_u64(2);
        let moved_a = step_node(&a, &all, &mut rng);
        let moved_b = step_node(&b, &all, &mut rng);
        // Repulsion magnitude 2 exceeds jitter and centering at this range.
        assert!(moved_a.x < a.x);
        assert!(moved_b.x > b.x);
    }

    #[test]
    fn test_distant_nodes_do_not_repel() {
        let a = TopicNode::new("API", 200.0, 200.0);
        let b = TopicNode::new("Latency", 200.0, 400.0);
        let all = vec![a.clone(), b.clone()];
        let mut rng = StdRng::seed_from_u64(3);
        let moved = step_node(&a, &all, &mut rng);
        // Only jitter (<= 0.4) and the zero center pull at x=200 apply.
        assert!((moved.x - a.x).abs() <= 0.4 + f64::EPSILON);
    }

    #[test]
    fn test_coincident_nodes_stay_finite_and_separate() {
        // Regression test for the zero-distance guard: two nodes at the
        // exact same point must not divide by zero.
        let a = TopicNode::new("API", 200.0, 200.0);
        let b = TopicNode::new("Latency", 200.0, 200.0);
        let all = vec![a.clone(), b.clone()];
        let mut rng = StdRng::seed_from_u64(4);

        let moved = step_all(&all, &mut rng);
        for node in &moved {
            assert!(node.x.is_finite());
            assert!(node.y.is_finite());
            assert!(node.x.abs() < 1e6 && node.y.abs() < 1e6);
        }
        assert!(
            moved[0].x != moved[1].x || moved[0].y != moved[1].y,
            "coincident nodes should drift apart within one tick"
        );
    }

    #[test]
    fn test_step_all_uses_previous_snapshot() {
        // All nodes move against the same snapshot, so two symmetric nodes
        // receive symmetric repulsion regardless of iteration order.
        let a = TopicNode::new("API", 190.0, 200.0);
        let b = TopicNode::new("Latency", 210.0, 200.0);
        let all = vec![a.clone(), b.clone()];
        let mut rng = StdRng::seed_from_u64(5);
        let moved = step_all(&all, &mut rng);
        // Both pushed outward from each other on x.
        assert!(moved[0].x < 190.0 + 0.5);
        assert!(moved[1].x > 210.0 - 0.5);
    }

    #[test]
    fn test_many_ticks_remain_bounded() {
        let mut nodes = vec![
            TopicNode::new("API", 200.0, 200.0),
            TopicNode::new("Latency", 201.0, 199.0),
            TopicNode::new("GPU", 199.0, 202.0),
            TopicNode::new("Budget", 202.0, 201.0),
        ];
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..500 {
            nodes = step_all(&nodes, &mut rng);
        }
        for node in &nodes {
            assert!(node.x.is_finite() && node.y.is_finite());
            // Centering bounds the layout to the neighborhood of (200, 200).
            assert!((node.x - 200.0).abs() < 500.0);
            assert!((node.y - 200.0).abs() < 500.0);
        }
    }
}
