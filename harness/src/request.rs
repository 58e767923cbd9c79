//! Search requests: the parameters of one harness run.
//!
//! A request names a start node, a goal node, and an algorithm token. All
//! three fields are optional on the wire and fall back to the defaults below,
//! so `{}` is a valid request for an A* run from `A` to `G`.

use courier_search::contract::Algorithm;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Start node used when a request omits `start`.
pub const DEFAULT_START: &str = "A";

/// Goal node used when a request omits `goal`.
pub const DEFAULT_GOAL: &str = "G";

/// Parameters of a single search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default = "default_goal")]
    pub goal: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: Algorithm,
}

impl SearchRequest {
    #[must_use]
    pub fn new(start: impl Into<String>, goal: impl Into<String>, algorithm: Algorithm) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm,
        }
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_GOAL, Algorithm::AStar)
    }
}

fn default_start() -> String {
    DEFAULT_START.to_string()
}

fn default_goal() -> String {
    DEFAULT_GOAL.to_string()
}

fn default_algorithm() -> Algorithm {
    Algorithm::AStar
}

/// A request the harness refuses to run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// `start` or `goal` is not a node of the graph.
    #[error("invalid start or goal node: {node:?}")]
    InvalidNodeReference { node: String },
    /// The request could not be parsed, or named an unknown algorithm.
    #[error("malformed request: {detail}")]
    MalformedRequest { detail: String },
}

/// Parse a request from JSON text.
///
/// # Errors
///
/// Returns [`RequestError::MalformedRequest`] for invalid JSON,
/// a field of the wrong type, or an algorithm token other than `astar`,
/// `bfs`, or `dfs`.
pub fn parse_request(json: &str) -> Result<SearchRequest, RequestError> {
    serde_json::from_str(json).map_err(|e| RequestError::MalformedRequest {
        detail: e.to_string(),
    })
}
