//! Heuristic estimates for A*.

use courier_kernel::graph::{Graph, NodeId};

/// Estimate of the remaining cost from `node` to `goal`.
///
/// Implementations should be admissible (never overestimate) for A* to
/// return optimal paths. This is assumed, not checked; an inadmissible
/// estimate can cost optimality but never termination.
pub trait Heuristic: Send + Sync {
    fn estimate(&self, graph: &Graph, node: &NodeId, goal: &NodeId) -> f64;
}

/// The per-node value stored in the graph. Ignores `goal`: the stored table
/// is computed for one fixed goal context.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredHeuristic;

impl Heuristic for StoredHeuristic {
    fn estimate(&self, graph: &Graph, node: &NodeId, _goal: &NodeId) -> f64 {
        graph.heuristic(node.as_str())
    }
}

/// Straight-line distance between node coordinates.
///
/// Admissible whenever every edge cost is at least the distance between its
/// endpoints. Falls back to `0.0` if either node is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanHeuristic;

impl Heuristic for EuclideanHeuristic {
    fn estimate(&self, graph: &Graph, node: &NodeId, goal: &NodeId) -> f64 {
        match (graph.coordinate(node.as_str()), graph.coordinate(goal.as_str())) {
            (Some(from), Some(to)) => from.distance_to(&to),
            _ => 0.0,
        }
    }
}

/// Zero everywhere. Turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _graph: &Graph, _node: &NodeId, _goal: &NodeId) -> f64 {
        0.0
    }
}
