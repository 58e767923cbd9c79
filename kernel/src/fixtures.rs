//! The 9-node reference city used by tests, the fixture binary, and
//! benchmarks.
//!
//! Heuristic values approximate straight-line distance to `G`.

use crate::graph::{EdgeRecord, Graph, GraphConfig, GraphError, NodeId, NodeRecord};

const NODES: [(&str, f64, f64, f64); 9] = [
    ("A", 0.0, 0.0, 6.1),
    ("B", 2.0, 1.0, 4.0),
    ("C", 1.0, 3.0, 5.4),
    ("D", 4.0, 0.0, 2.2),
    ("E", 3.0, 2.0, 3.2),
    ("F", 5.0, 3.0, 2.2),
    ("G", 6.0, 1.0, 0.0),
    ("H", 2.0, -1.0, 4.5),
    ("I", 4.0, 2.0, 2.2),
];

const EDGES: [(&str, &str, f64); 17] = [
    ("A", "B", 2.2),
    ("A", "H", 2.2),
    ("A", "C", 3.2),
    ("B", "C", 2.2),
    ("B", "E", 1.4),
    ("B", "H", 2.2),
    ("B", "D", 2.2),
    ("C", "E", 2.2),
    ("D", "E", 2.2),
    ("D", "I", 2.2),
    ("D", "G", 2.2),
    ("D", "H", 2.2),
    ("E", "F", 2.2),
    ("E", "I", 1.4),
    ("F", "I", 1.4),
    ("F", "G", 2.2),
    ("I", "G", 2.2),
];

/// Node and edge records of the reference city, edges in canonical order.
#[must_use]
pub fn reference_city_config() -> GraphConfig {
    GraphConfig {
        nodes: NODES
            .iter()
            .map(|&(id, x, y, heuristic)| NodeRecord {
                id: NodeId::from(id),
                x,
                y,
                heuristic,
            })
            .collect(),
        edges: EDGES
            .iter()
            .map(|&(from, to, cost)| EdgeRecord {
                from: NodeId::from(from),
                to: NodeId::from(to),
                cost,
            })
            .collect(),
    }
}

/// The reference city as a graph.
///
/// # Errors
///
/// Only if the static records above are edited into an invalid graph.
pub fn reference_city() -> Result<Graph, GraphError> {
    reference_city_config().build()
}

/// The reference city plus node `Z` at `(9, 9)` with no edges.
///
/// # Errors
///
/// As [`reference_city`].
pub fn reference_city_with_isolated() -> Result<Graph, GraphError> {
    let mut config = reference_city_config();
    config.nodes.push(NodeRecord {
        id: NodeId::from("Z"),
        x: 9.0,
        y: 9.0,
        heuristic: 1.0,
    });
    config.build()
}
