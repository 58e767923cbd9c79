//! Per-step execution trace.

use courier_kernel::graph::NodeId;
use courier_kernel::proof::canon::real_bits_hex;

/// Cost figures recorded for a step; the shape depends on the strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepCosts {
    /// A*: cost so far, heuristic estimate, and their sum.
    Heuristic { g: f64, h: f64, f: f64 },
    /// BFS and DFS: real edge weights accumulated along the discovered path.
    Accumulated { cost: f64 },
}

impl StepCosts {
    /// Cost from the start to the step's node.
    #[must_use]
    pub fn cost_so_far(&self) -> f64 {
        match *self {
            Self::Heuristic { g, .. } => g,
            Self::Accumulated { cost } => cost,
        }
    }
}

/// One node dequeued (A*, BFS) or entered (DFS).
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    /// 0-based position in the trace.
    pub step: u64,
    pub node: NodeId,
    pub costs: StepCosts,
    /// Pending frontier entries after the pop. `None` for DFS, which has no
    /// queue of discovered-but-unvisited nodes.
    pub frontier_size: Option<usize>,
    /// Closed-set size before this node is closed (A*) or visited-set size
    /// (BFS, DFS).
    pub visited_size: usize,
}

impl TraceStep {
    /// Canonical (bit-exact) JSON form used for result fingerprints.
    #[must_use]
    pub fn to_canonical_value(&self) -> serde_json::Value {
        let costs = match self.costs {
            StepCosts::Heuristic { g, h, f } => serde_json::json!({
                "f": real_bits_hex(f),
                "g": real_bits_hex(g),
                "h": real_bits_hex(h),
                "type": "heuristic",
            }),
            StepCosts::Accumulated { cost } => serde_json::json!({
                "cost": real_bits_hex(cost),
                "type": "accumulated",
            }),
        };
        serde_json::json!({
            "costs": costs,
            "frontier_size": self.frontier_size,
            "node": self.node.as_str(),
            "step": self.step,
            "visited_size": self.visited_size,
        })
    }
}
