//! Typed search outcomes and selector errors.
//!
//! `SearchFailure` is carried inside a [`crate::result::SearchResult`]; it is
//! an expected terminal outcome, never returned as `Err`.

use thiserror::Error;

/// Why a search finished without reaching the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchFailure {
    /// The frontier (or the reachable component, for DFS) was exhausted.
    #[error("no path found")]
    NoPathFound,
}

/// An algorithm token that does not name one of the strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {token:?} (expected one of: astar, bfs, dfs)")]
pub struct UnknownAlgorithm {
    pub token: String,
}
