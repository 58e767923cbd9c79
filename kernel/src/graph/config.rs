//! Serializable node and edge records for loading a graph from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::builder::GraphBuilder;
use super::error::GraphError;
use super::node::NodeId;
use super::Graph;

/// A node record: `(id, x, y, heuristic)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "h", alias = "heuristic")]
    pub heuristic: f64,
}

/// An undirected edge record: `(from, to, cost)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: f64,
}

/// Static graph configuration.
///
/// ```json
/// {
///   "nodes": [{"id": "A", "x": 0.0, "y": 0.0, "h": 6.1}],
///   "edges": [{"from": "A", "to": "B", "cost": 2.2}]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// [`GraphError::ConfigParse`] if the document is not valid JSON of the
    /// expected shape.
    pub fn from_json_str(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// [`GraphError::ConfigIo`] if the file cannot be read, otherwise as
    /// [`GraphConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Validate the records and build the graph.
    ///
    /// All nodes are added before any edge, so edge records may appear in any
    /// position relative to the nodes they reference.
    ///
    /// # Errors
    ///
    /// Any [`GraphError`] raised by [`GraphBuilder`].
    pub fn build(&self) -> Result<Graph, GraphError> {
        let mut builder = GraphBuilder::new();
        for node in &self.nodes {
            builder.add_node(node.id.clone(), node.x, node.y, node.heuristic)?;
        }
        for edge in &self.edges {
            builder.add_edge(edge.from.clone(), edge.to.clone(), edge.cost)?;
        }
        Ok(builder.build())
    }
}
