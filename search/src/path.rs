//! Predecessor bookkeeping and path reconstruction shared by every strategy.

use std::collections::HashMap;

use courier_kernel::graph::NodeId;

/// Predecessor on the best known path. The start node maps to `None`.
pub type ParentMap = HashMap<NodeId, Option<NodeId>>;

/// Unwind `parents` from `goal` back to the start and return the
/// start→goal sequence.
///
/// The walk stops at the first node whose predecessor is `None` or which is
/// missing from the map, so a goal absent from `parents` yields `[goal]`.
#[must_use]
pub fn reconstruct_path(parents: &ParentMap, goal: &NodeId) -> Vec<NodeId> {
    let mut path = vec![goal.clone()];
    let mut current = goal;

    while let Some(Some(parent)) = parents.get(current) {
        path.push(parent.clone());
        current = parent;
    }

    path.reverse();
    path
}
