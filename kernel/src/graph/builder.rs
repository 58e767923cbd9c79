//! Incremental, validating graph construction.

use std::collections::BTreeMap;

use log::debug;

use super::error::GraphError;
use super::node::{Coordinate, Edge, Neighbor, NodeData, NodeId};
use super::Graph;

/// Builds a [`Graph`] from node and edge records.
///
/// Edges are undirected: `add_edge(a, b, c)` appends `(b, c)` to `a`'s
/// neighbor list and `(a, c)` to `b`'s. Neighbor lists keep insertion order,
/// which is the enumeration order breadth-first and depth-first search see.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: BTreeMap<NodeId, NodeData>,
    adjacency: BTreeMap<NodeId, Vec<Neighbor>>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with its position and heuristic value.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateNode`] if `id` was already added,
    /// [`GraphError::InvalidCoordinate`] for non-finite coordinates, and
    /// [`GraphError::InvalidHeuristic`] for a negative or non-finite heuristic.
    pub fn add_node(
        &mut self,
        id: impl Into<NodeId>,
        x: f64,
        y: f64,
        heuristic: f64,
    ) -> Result<&mut Self, GraphError> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode { node: id });
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(GraphError::InvalidCoordinate { node: id });
        }
        if !heuristic.is_finite() || heuristic < 0.0 {
            return Err(GraphError::InvalidHeuristic {
                node: id,
                value: heuristic,
            });
        }
        self.adjacency.insert(id.clone(), Vec::new());
        self.nodes.insert(
            id,
            NodeData {
                coordinate: Coordinate::new(x, y),
                heuristic,
            },
        );
        Ok(self)
    }

    /// Add an undirected edge between two existing nodes.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if either endpoint was not added,
    /// [`GraphError::SelfLoop`], [`GraphError::DuplicateEdge`] if the pair
    /// is already connected (in either direction), and
    /// [`GraphError::InvalidEdgeCost`] for a negative or non-finite cost.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        cost: f64,
    ) -> Result<&mut Self, GraphError> {
        let from = from.into();
        let to = to.into();
        for endpoint in [&from, &to] {
            if !self.nodes.contains_key(endpoint) {
                return Err(GraphError::UnknownNode {
                    node: endpoint.clone(),
                });
            }
        }
        if from == to {
            return Err(GraphError::SelfLoop { node: from });
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidEdgeCost { from, to, cost });
        }
        let already_connected = self
            .adjacency
            .get(&from)
            .is_some_and(|neighbors| neighbors.iter().any(|n| n.node == to));
        if already_connected {
            return Err(GraphError::DuplicateEdge { from, to });
        }

        if let Some(neighbors) = self.adjacency.get_mut(&from) {
            neighbors.push(Neighbor {
                node: to.clone(),
                cost,
            });
        }
        if let Some(neighbors) = self.adjacency.get_mut(&to) {
            neighbors.push(Neighbor {
                node: from.clone(),
                cost,
            });
        }
        self.edges.push(Edge { from, to, cost });
        Ok(self)
    }

    /// Freeze the builder into an immutable graph.
    #[must_use]
    pub fn build(self) -> Graph {
        debug!(
            "graph built: {} nodes, {} undirected edges",
            self.nodes.len(),
            self.edges.len()
        );
        Graph {
            nodes: self.nodes,
            adjacency: self.adjacency,
            edges: self.edges,
        }
    }
}
