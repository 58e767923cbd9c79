//! A*: best-first search ordered by `f = g + h`.

use std::collections::{HashMap, HashSet};

use courier_kernel::graph::{Graph, NodeId};
use log::trace;

use crate::contract::{Algorithm, SearchStrategy};
use crate::frontier::PriorityFrontier;
use crate::heuristic::{Heuristic, StoredHeuristic};
use crate::path::{reconstruct_path, ParentMap};
use crate::result::SearchResult;
use crate::trace::{StepCosts, TraceStep};

/// A* over a [`PriorityFrontier`] with lazy deletion.
///
/// There is no decrease-key: an improved `g` for a node pushes a fresh
/// entry, and older entries for that node are discarded when popped after
/// the node is closed. Discarded pops leave no trace entry.
#[derive(Debug, Clone, Default)]
pub struct AStarSearch<H = StoredHeuristic> {
    heuristic: H,
}

impl AStarSearch<StoredHeuristic> {
    /// A* with the graph's stored per-node heuristic.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heuristic: StoredHeuristic,
        }
    }
}

impl<H: Heuristic> AStarSearch<H> {
    #[must_use]
    pub fn with_heuristic(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<H: Heuristic> SearchStrategy for AStarSearch<H> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn run(&self, graph: &Graph, start: &NodeId, goal: &NodeId) -> SearchResult {
        let mut frontier = PriorityFrontier::new();
        let mut closed: HashSet<NodeId> = HashSet::new();
        let mut best_g: HashMap<NodeId, f64> = HashMap::new();
        let mut parents = ParentMap::new();
        let mut steps: Vec<TraceStep> = Vec::new();
        let mut nodes_expanded: u64 = 0;

        best_g.insert(start.clone(), 0.0);
        parents.insert(start.clone(), None);
        frontier.push(
            start.clone(),
            0.0,
            self.heuristic.estimate(graph, start, goal),
        );

        while let Some(current) = frontier.pop() {
            if closed.contains(&current.node) {
                continue;
            }

            steps.push(TraceStep {
                step: steps.len() as u64,
                node: current.node.clone(),
                costs: StepCosts::Heuristic {
                    g: current.g,
                    h: current.h,
                    f: current.f(),
                },
                frontier_size: Some(frontier.len()),
                visited_size: closed.len(),
            });

            if current.node == *goal {
                trace!(
                    "astar {start}->{goal}: goal reached, g={}, {nodes_expanded} expanded, \
                     {} pushed, frontier peak {}",
                    current.g,
                    frontier.pushed(),
                    frontier.high_water()
                );
                let path = reconstruct_path(&parents, goal);
                return SearchResult::goal_reached(
                    Algorithm::AStar,
                    path,
                    current.g,
                    nodes_expanded,
                    steps,
                );
            }

            closed.insert(current.node.clone());
            nodes_expanded += 1;

            for neighbor in graph.neighbors(current.node.as_str()) {
                if closed.contains(&neighbor.node) {
                    continue;
                }
                let new_g = current.g + neighbor.cost;
                let improves = match best_g.get(&neighbor.node) {
                    Some(&known) => new_g < known,
                    None => true,
                };
                if improves {
                    best_g.insert(neighbor.node.clone(), new_g);
                    parents.insert(neighbor.node.clone(), Some(current.node.clone()));
                    let h = self.heuristic.estimate(graph, &neighbor.node, goal);
                    frontier.push(neighbor.node.clone(), new_g, h);
                }
            }
        }

        trace!(
            "astar {start}->{goal}: frontier exhausted after {nodes_expanded} expansions, \
             frontier peak {}",
            frontier.high_water()
        );
        SearchResult::exhausted(Algorithm::AStar, nodes_expanded, steps)
    }
}
