//! Strategy contract and algorithm selector.

use std::fmt;
use std::str::FromStr;

use courier_kernel::graph::{Graph, NodeId};
use serde::{Deserialize, Serialize};

use crate::astar::AStarSearch;
use crate::bfs::BfsSearch;
use crate::dfs::DfsSearch;
use crate::error::UnknownAlgorithm;
use crate::result::SearchResult;

/// A traversal strategy over a read-only [`Graph`].
///
/// # Contract
///
/// - `start` and `goal` must exist in `graph`. This is the caller's
///   responsibility and is not re-checked.
/// - `run` never mutates the graph and owns all of its search state, so
///   concurrent calls on one shared graph are independent.
/// - Same `(graph, start, goal)` → bit-identical [`SearchResult`].
pub trait SearchStrategy {
    fn algorithm(&self) -> Algorithm;

    fn run(&self, graph: &Graph, start: &NodeId, goal: &NodeId) -> SearchResult;
}

/// Algorithm selector. Wire tokens: `astar`, `bfs`, `dfs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "astar")]
    AStar,
    #[serde(rename = "bfs")]
    Bfs,
    #[serde(rename = "dfs")]
    Dfs,
}

impl Algorithm {
    /// Every algorithm, in comparison order.
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::Bfs, Algorithm::Dfs];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    /// Run the default strategy for this algorithm. A* uses the graph's
    /// stored heuristic.
    #[must_use]
    pub fn run(self, graph: &Graph, start: &NodeId, goal: &NodeId) -> SearchResult {
        match self {
            Self::AStar => AStarSearch::new().run(graph, start, goal),
            Self::Bfs => BfsSearch.run(graph, start, goal),
            Self::Dfs => DfsSearch.run(graph, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownAlgorithm {
                token: s.to_string(),
            })
    }
}
