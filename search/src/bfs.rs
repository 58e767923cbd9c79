//! Breadth-first search.
//!
//! Explores in hop order. The reported cost accumulates the real edge
//! weights along the hop-order path, so the result is the minimum-hop path,
//! which is the minimum-weight path only when weights are uniform.

use std::collections::{HashSet, VecDeque};

use courier_kernel::graph::{Graph, NodeId};
use log::trace;

use crate::contract::{Algorithm, SearchStrategy};
use crate::path::{reconstruct_path, ParentMap};
use crate::result::SearchResult;
use crate::trace::{StepCosts, TraceStep};

/// FIFO search. Nodes are marked visited when enqueued, so each node enters
/// the queue at most once.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsSearch;

impl SearchStrategy for BfsSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn run(&self, graph: &Graph, start: &NodeId, goal: &NodeId) -> SearchResult {
        // Queue entries carry the accumulated cost recorded at enqueue time.
        let mut queue: VecDeque<(NodeId, f64)> = VecDeque::from([(start.clone(), 0.0)]);
        let mut visited: HashSet<NodeId> = HashSet::from([start.clone()]);
        let mut parents = ParentMap::from([(start.clone(), None)]);
        let mut steps: Vec<TraceStep> = Vec::new();
        let mut nodes_expanded: u64 = 0;

        while let Some((current, cost)) = queue.pop_front() {
            steps.push(TraceStep {
                step: steps.len() as u64,
                node: current.clone(),
                costs: StepCosts::Accumulated { cost },
                frontier_size: Some(queue.len()),
                visited_size: visited.len(),
            });

            if current == *goal {
                trace!("bfs {start}->{goal}: goal reached, cost={cost}, {nodes_expanded} expanded");
                let path = reconstruct_path(&parents, goal);
                return SearchResult::goal_reached(
                    Algorithm::Bfs,
                    path,
                    cost,
                    nodes_expanded,
                    steps,
                );
            }

            nodes_expanded += 1;

            for neighbor in graph.neighbors(current.as_str()) {
                if visited.insert(neighbor.node.clone()) {
                    parents.insert(neighbor.node.clone(), Some(current.clone()));
                    queue.push_back((neighbor.node.clone(), cost + neighbor.cost));
                }
            }
        }

        trace!("bfs {start}->{goal}: queue exhausted after {nodes_expanded} expansions");
        SearchResult::exhausted(Algorithm::Bfs, nodes_expanded, steps)
    }
}
