//! The shared output model of every strategy.

use courier_kernel::graph::{Graph, NodeId};
use courier_kernel::proof::canon::{canonical_json_bytes, real_bits_hex, CanonError};
use courier_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_RESULT};

use crate::contract::Algorithm;
use crate::error::SearchFailure;
use crate::trace::TraceStep;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The goal was popped (A*, BFS) or entered (DFS).
    GoalReached,
    /// Nothing left to explore.
    FrontierExhausted,
}

/// Result of one search run.
///
/// A search either fully succeeds with a complete path or fully fails with
/// none; `path` is `Some` exactly when `termination` is `GoalReached`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// Start→goal node sequence.
    pub path: Option<Vec<NodeId>>,
    /// Full-precision path cost; `f64::INFINITY` if no path was found.
    pub cost: f64,
    /// Nodes whose neighbors were examined.
    pub nodes_expanded: u64,
    pub trace: Vec<TraceStep>,
    pub termination: TerminationReason,
}

impl SearchResult {
    pub(crate) fn goal_reached(
        algorithm: Algorithm,
        path: Vec<NodeId>,
        cost: f64,
        nodes_expanded: u64,
        trace: Vec<TraceStep>,
    ) -> Self {
        Self {
            algorithm,
            path: Some(path),
            cost,
            nodes_expanded,
            trace,
            termination: TerminationReason::GoalReached,
        }
    }

    pub(crate) fn exhausted(
        algorithm: Algorithm,
        nodes_expanded: u64,
        trace: Vec<TraceStep>,
    ) -> Self {
        Self {
            algorithm,
            path: None,
            cost: f64::INFINITY,
            nodes_expanded,
            trace,
            termination: TerminationReason::FrontierExhausted,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.termination == TerminationReason::GoalReached
    }

    /// Present exactly when the search did not succeed.
    #[must_use]
    pub fn error(&self) -> Option<SearchFailure> {
        match self.termination {
            TerminationReason::GoalReached => None,
            TerminationReason::FrontierExhausted => Some(SearchFailure::NoPathFound),
        }
    }

    /// Number of edges on the path (0 for `start == goal`).
    #[must_use]
    pub fn hop_count(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// Check that the path starts at `start`, ends at `goal`, and that every
    /// consecutive pair is an edge of `graph`.
    #[must_use]
    pub fn path_is_valid(&self, graph: &Graph, start: &NodeId, goal: &NodeId) -> bool {
        let Some(path) = &self.path else {
            return false;
        };
        path.first() == Some(start)
            && path.last() == Some(goal)
            && path.windows(2).all(|pair| {
                let (a, b) = (pair[0].as_str(), pair[1].as_str());
                graph.edge_cost(a, b).is_some()
            })
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// Reals are encoded by bit pattern, so equal bytes mean bit-identical
    /// results.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_canonical_value())
    }

    /// Domain-separated SHA-256 of [`SearchResult::to_canonical_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_RESULT, &bytes))
    }

    fn to_canonical_value(&self) -> serde_json::Value {
        serde_json::json!({
            "algorithm": self.algorithm.as_str(),
            "cost": real_bits_hex(self.cost),
            "nodes_expanded": self.nodes_expanded,
            "path": self
                .path
                .as_ref()
                .map(|p| p.iter().map(NodeId::as_str).collect::<Vec<_>>()),
            "termination": termination_str(self.termination),
            "trace": self.trace.iter().map(TraceStep::to_canonical_value).collect::<Vec<_>>(),
        })
    }
}

fn termination_str(reason: TerminationReason) -> &'static str {
    match reason {
        TerminationReason::GoalReached => "goal_reached",
        TerminationReason::FrontierExhausted => "frontier_exhausted",
    }
}
