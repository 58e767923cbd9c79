//! Immutable weighted undirected graph.
//!
//! A [`Graph`] is built once (through [`GraphBuilder`] or [`GraphConfig`])
//! and never mutated afterward. It holds no interior mutability, so it is
//! `Send + Sync` and any number of searches may read it concurrently through
//! `&Graph` or `Arc<Graph>`.

mod builder;
mod config;
mod error;
mod node;

use std::collections::BTreeMap;

pub use builder::GraphBuilder;
pub use config::{EdgeRecord, GraphConfig, NodeRecord};
pub use error::GraphError;
pub use node::{Coordinate, Edge, Neighbor, NodeData, NodeId};

use crate::proof::canon::{canonical_json_bytes, real_bits_hex, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_GRAPH};

/// Read-only adjacency structure with per-node coordinates and heuristics.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: BTreeMap<NodeId, NodeData>,
    pub(crate) adjacency: BTreeMap<NodeId, Vec<Neighbor>>,
    pub(crate) edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph from a configuration document.
    ///
    /// # Errors
    ///
    /// Any [`GraphError`] raised while validating the records.
    pub fn from_config(config: &GraphConfig) -> Result<Self, GraphError> {
        config.build()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    /// Node identifiers in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    #[must_use]
    pub fn node(&self, node: &str) -> Option<&NodeData> {
        self.nodes.get(node)
    }

    /// Neighbors of `node` in edge insertion order.
    ///
    /// An unknown node has no neighbors.
    #[must_use]
    pub fn neighbors(&self, node: &str) -> &[Neighbor] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Heuristic value of `node`; `0.0` for an unknown node.
    #[must_use]
    pub fn heuristic(&self, node: &str) -> f64 {
        self.nodes.get(node).map_or(0.0, |data| data.heuristic)
    }

    #[must_use]
    pub fn coordinate(&self, node: &str) -> Option<Coordinate> {
        self.nodes.get(node).map(|data| data.coordinate)
    }

    /// Cost of the edge between `a` and `b`, if they are adjacent.
    #[must_use]
    pub fn edge_cost(&self, a: &str, b: &str) -> Option<f64> {
        self.neighbors(a)
            .iter()
            .find(|n| n.node.as_str() == b)
            .map(|n| n.cost)
    }

    /// Undirected edges in insertion order, each listed once.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Export the graph back into configuration records.
    #[must_use]
    pub fn to_config(&self) -> GraphConfig {
        GraphConfig {
            nodes: self
                .nodes
                .iter()
                .map(|(id, data)| NodeRecord {
                    id: id.clone(),
                    x: data.coordinate.x,
                    y: data.coordinate.y,
                    heuristic: data.heuristic,
                })
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|e| EdgeRecord {
                    from: e.from.clone(),
                    to: e.to.clone(),
                    cost: e.cost,
                })
                .collect(),
        }
    }

    /// Content digest of the graph: nodes in id order, edges in insertion
    /// order, every real encoded by its bit pattern.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let nodes: Vec<serde_json::Value> = self
            .nodes
            .iter()
            .map(|(id, data)| {
                serde_json::json!({
                    "h": real_bits_hex(data.heuristic),
                    "id": id.as_str(),
                    "x": real_bits_hex(data.coordinate.x),
                    "y": real_bits_hex(data.coordinate.y),
                })
            })
            .collect();
        let edges: Vec<serde_json::Value> = self
            .edges
            .iter()
            .map(|e| {
                serde_json::json!({
                    "cost": real_bits_hex(e.cost),
                    "from": e.from.as_str(),
                    "to": e.to.as_str(),
                })
            })
            .collect();
        let bytes = canonical_json_bytes(&serde_json::json!({"edges": edges, "nodes": nodes}))?;
        Ok(canonical_hash(DOMAIN_GRAPH, &bytes))
    }
}
