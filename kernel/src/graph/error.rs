//! Construction-time graph errors.
//!
//! A `Graph` that exists is well formed: every check happens while nodes and
//! edges are added, never during a search.

use thiserror::Error;

use super::node::NodeId;

/// Malformed graph input.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {node} is defined more than once")]
    DuplicateNode { node: NodeId },
    #[error("edge references unknown node {node}")]
    UnknownNode { node: NodeId },
    #[error("edge {from}-{to} is defined more than once")]
    DuplicateEdge { from: NodeId, to: NodeId },
    #[error("edge {node}-{node} is a self loop")]
    SelfLoop { node: NodeId },
    #[error("edge {from}-{to} has invalid cost {cost} (must be finite and non-negative)")]
    InvalidEdgeCost { from: NodeId, to: NodeId, cost: f64 },
    #[error("node {node} has invalid heuristic {value} (must be finite and non-negative)")]
    InvalidHeuristic { node: NodeId, value: f64 },
    #[error("node {node} has a non-finite coordinate")]
    InvalidCoordinate { node: NodeId },
    #[error("failed to read graph config: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse graph config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
