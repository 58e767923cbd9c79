//! Depth-first search.
//!
//! Returns the first path found in neighbor order, with no optimality
//! guarantee. The walk uses an explicit frame stack instead of recursion so
//! long chains cannot overflow the thread stack; the visiting order is the
//! same as the recursive formulation.

use std::collections::HashSet;
use std::slice;

use courier_kernel::graph::{Graph, Neighbor, NodeId};
use log::trace;

use crate::contract::{Algorithm, SearchStrategy};
use crate::path::{reconstruct_path, ParentMap};
use crate::result::SearchResult;
use crate::trace::{StepCosts, TraceStep};

/// Depth-first search. A node is marked visited when it is entered, and
/// visited nodes are never re-entered, even through a cheaper route.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsSearch;

/// One entered node on the current path, with the neighbors not yet tried.
struct Frame<'g> {
    node: NodeId,
    cost: f64,
    neighbors: slice::Iter<'g, Neighbor>,
}

impl SearchStrategy for DfsSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn run(&self, graph: &Graph, start: &NodeId, goal: &NodeId) -> SearchResult {
        depth_first(graph, start, goal).0
    }
}

/// The depth-first walk, also returning the predecessor map it recorded.
fn depth_first(graph: &Graph, start: &NodeId, goal: &NodeId) -> (SearchResult, ParentMap) {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut parents = ParentMap::from([(start.clone(), None)]);
    let mut stack: Vec<Frame<'_>> = Vec::new();
    let mut steps: Vec<TraceStep> = Vec::new();
    let mut nodes_expanded: u64 = 0;
    let mut pending = Some((start.clone(), 0.0));

    loop {
        if let Some((node, cost)) = pending.take() {
            visited.insert(node.clone());
            steps.push(TraceStep {
                step: steps.len() as u64,
                node: node.clone(),
                costs: StepCosts::Accumulated { cost },
                frontier_size: None,
                visited_size: visited.len(),
            });

            if node == *goal {
                trace!(
                    "dfs {start}->{goal}: goal reached at depth {}, cost={cost}",
                    stack.len()
                );
                let path = reconstruct_path(&parents, goal);
                let result =
                    SearchResult::goal_reached(Algorithm::Dfs, path, cost, nodes_expanded, steps);
                return (result, parents);
            }

            nodes_expanded += 1;
            let neighbors = graph.neighbors(node.as_str()).iter();
            stack.push(Frame {
                node,
                cost,
                neighbors,
            });
        }

        let Some(frame) = stack.last_mut() else {
            break;
        };
        match frame.neighbors.find(|n| !visited.contains(&n.node)) {
            Some(next) => {
                parents.insert(next.node.clone(), Some(frame.node.clone()));
                pending = Some((next.node.clone(), frame.cost + next.cost));
            }
            None => {
                stack.pop();
            }
        }
    }

    trace!("dfs {start}->{goal}: exhausted after {nodes_expanded} expansions");
    let result = SearchResult::exhausted(Algorithm::Dfs, nodes_expanded, steps);
    (result, parents)
}
