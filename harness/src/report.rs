//! Presentation views: the JSON report of a run and the graph summary.
//!
//! Reports are for display. Every real is rounded to two decimals here and
//! nowhere else; use [`SearchResult::digest`] when exact comparison matters.
//!
//! [`SearchResult::digest`]: courier_search::result::SearchResult::digest

use std::collections::HashSet;

use courier_kernel::graph::{Graph, NodeId};
use courier_search::result::SearchResult;
use courier_search::trace::{StepCosts, TraceStep};
use serde_json::{json, Map, Value};

use crate::request::SearchRequest;

/// Placeholder rendered for the cost of an unreachable goal.
pub const INFINITE_COST: &str = "Infinity";

/// A completed run: the request it answered and the full-precision result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub request: SearchRequest,
    pub result: SearchResult,
}

impl SearchReport {
    /// Render the presentation view.
    ///
    /// Keys: `success`, `algorithm`, `start`, `goal`, `path` (null when no
    /// path), `cost`, `nodes_expanded`, `trace`, and `error` on failure only.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let result = &self.result;
        let mut view = json!({
            "success": result.is_success(),
            "algorithm": result.algorithm.as_str(),
            "start": self.request.start,
            "goal": self.request.goal,
            "path": result
                .path
                .as_ref()
                .map(|p| p.iter().map(NodeId::as_str).collect::<Vec<_>>()),
            "cost": cost_value(result.cost),
            "nodes_expanded": result.nodes_expanded,
            "trace": result.trace.iter().map(trace_value).collect::<Vec<_>>(),
        });
        if let (Some(error), Some(fields)) = (result.error(), view.as_object_mut()) {
            fields.insert("error".into(), Value::String(error.to_string()));
        }
        view
    }
}

/// Round to two decimal places for display.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn cost_value(cost: f64) -> Value {
    if cost.is_finite() {
        json!(round2(cost))
    } else {
        Value::String(INFINITE_COST.to_string())
    }
}

fn trace_value(step: &TraceStep) -> Value {
    match (step.costs, step.frontier_size) {
        (StepCosts::Heuristic { g, h, f }, open) => json!({
            "step": step.step,
            "node": step.node.as_str(),
            "g": round2(g),
            "h": round2(h),
            "f": round2(f),
            "open_size": open.unwrap_or(0),
            "closed_size": step.visited_size,
        }),
        (StepCosts::Accumulated { cost }, Some(queue)) => json!({
            "step": step.step,
            "node": step.node.as_str(),
            "cost": round2(cost),
            "queue_size": queue,
            "visited_size": step.visited_size,
        }),
        (StepCosts::Accumulated { cost }, None) => json!({
            "step": step.step,
            "node": step.node.as_str(),
            "cost": round2(cost),
            "visited_size": step.visited_size,
        }),
    }
}

/// Render `{success: true, nodes: {id: {x, y, h}}, edges: [{from, to, cost}]}`.
///
/// Each undirected edge is listed once, from the side seen first when
/// walking nodes in ascending order and each node's neighbors in insertion
/// order. So the reference city lists `G-I` as `G -> I` although it was
/// added as `I - G`.
#[must_use]
pub fn graph_summary(graph: &Graph) -> Value {
    let mut nodes = Map::new();
    let mut edges: Vec<Value> = Vec::new();
    let mut listed: HashSet<(&str, &str)> = HashSet::new();

    for id in graph.node_ids() {
        if let Some(data) = graph.node(id.as_str()) {
            nodes.insert(
                id.to_string(),
                json!({
                    "x": data.coordinate.x,
                    "y": data.coordinate.y,
                    "h": data.heuristic,
                }),
            );
        }
        for neighbor in graph.neighbors(id.as_str()) {
            let (from, to) = (id.as_str(), neighbor.node.as_str());
            let pair = if from < to { (from, to) } else { (to, from) };
            if listed.insert(pair) {
                edges.push(json!({"from": from, "to": to, "cost": neighbor.cost}));
            }
        }
    }

    json!({ "success": true, "nodes": nodes, "edges": edges })
}
