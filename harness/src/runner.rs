//! Harness runner: validates a request and dispatches it to the search core.
//!
//! The runner owns the checks the core leaves to its caller. Strategies
//! assume `start` and `goal` exist; the runner guarantees it before any
//! search state is built.
//!
//! # Pipeline
//!
//! ```text
//! parse_request() → validate nodes → Algorithm::run() → SearchReport
//! ```

use courier_kernel::graph::{Graph, NodeId};
use log::{info, warn};

use crate::report::SearchReport;
use crate::request::{parse_request, RequestError, SearchRequest};

/// Run one validated search.
///
/// # Errors
///
/// Returns [`RequestError::InvalidNodeReference`] if `start` or `goal` is not
/// a node of `graph`. An unreachable goal is not an error: it yields a
/// report whose result carries `no path found`.
pub fn run_request(graph: &Graph, request: &SearchRequest) -> Result<SearchReport, RequestError> {
    for node in [&request.start, &request.goal] {
        if !graph.contains(node) {
            warn!(
                "rejecting {} request {}->{}: unknown node {node:?}",
                request.algorithm, request.start, request.goal
            );
            return Err(RequestError::InvalidNodeReference { node: node.clone() });
        }
    }

    let start = NodeId::from(request.start.as_str());
    let goal = NodeId::from(request.goal.as_str());
    let result = request.algorithm.run(graph, &start, &goal);

    info!(
        "{} {start}->{goal}: success={} cost={} expanded={} trace_len={}",
        request.algorithm,
        result.is_success(),
        result.cost,
        result.nodes_expanded,
        result.trace.len()
    );

    Ok(SearchReport {
        request: request.clone(),
        result,
    })
}

/// Parse `json` as a [`SearchRequest`] and run it.
///
/// # Errors
///
/// Returns [`RequestError::MalformedRequest`] if the request does not parse,
/// or [`RequestError::InvalidNodeReference`] as in [`run_request`].
pub fn run_request_json(graph: &Graph, json: &str) -> Result<SearchReport, RequestError> {
    let request = parse_request(json).inspect_err(|e| warn!("{e}"))?;
    run_request(graph, &request)
}
