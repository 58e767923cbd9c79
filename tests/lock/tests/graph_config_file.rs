//! Graph configuration file lock.
//!
//! Proves that the reference city written to disk as JSON and loaded back
//! through `GraphConfig::load` is the same graph: equal graph digest, and
//! equal search digests through the harness boundary.

use std::io::Write;

use courier_harness::request::SearchRequest;
use courier_harness::runner::{run_request, run_request_json};
use courier_kernel::fixtures::{reference_city, reference_city_config};
use courier_kernel::graph::{Graph, GraphConfig, GraphError};
use courier_search::contract::Algorithm;

fn load_from_temp_file(json: &str) -> Result<Graph, GraphError> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    GraphConfig::load(file.path())?.build()
}

#[test]
fn loaded_graph_matches_fixture() {
    let json = serde_json::to_string_pretty(&reference_city_config()).unwrap();
    let loaded = load_from_temp_file(&json).unwrap();
    let fixture = reference_city().unwrap();

    assert_eq!(loaded.digest().unwrap(), fixture.digest().unwrap());
    assert_eq!(loaded.node_count(), 9);
    assert_eq!(loaded.edge_count(), 17);

    for algorithm in Algorithm::ALL {
        let request = SearchRequest::new("A", "G", algorithm);
        let from_file = run_request(&loaded, &request).unwrap();
        let from_fixture = run_request(&fixture, &request).unwrap();
        assert_eq!(
            from_file.result.digest().unwrap(),
            from_fixture.result.digest().unwrap(),
            "{algorithm}"
        );
        assert_eq!(from_file.to_json_value(), from_fixture.to_json_value());
    }
}

#[test]
fn hand_written_config_runs_through_json_request() {
    let json = r#"{
        "nodes": [
            {"id": "depot", "x": 0.0, "y": 0.0, "h": 3.0},
            {"id": "mid", "x": 1.0, "y": 0.0, "h": 2.0},
            {"id": "dock", "x": 3.0, "y": 0.0, "h": 0.0}
        ],
        "edges": [
            {"from": "depot", "to": "mid", "cost": 1.0},
            {"from": "mid", "to": "dock", "cost": 2.0}
        ]
    }"#;
    let graph = load_from_temp_file(json).unwrap();

    let report = run_request_json(
        &graph,
        r#"{"start": "depot", "goal": "dock", "algorithm": "astar"}"#,
    )
    .unwrap();
    let view = report.to_json_value();
    assert_eq!(view["path"], serde_json::json!(["depot", "mid", "dock"]));
    assert_eq!(view["cost"], serde_json::json!(3.0));
}

#[test]
fn invalid_edge_cost_in_file_is_rejected() {
    let json = r#"{
        "nodes": [
            {"id": "a", "x": 0.0, "y": 0.0, "h": 0.0},
            {"id": "b", "x": 1.0, "y": 0.0, "h": 0.0}
        ],
        "edges": [{"from": "a", "to": "b", "cost": -1.0}]
    }"#;
    let err = load_from_temp_file(json).unwrap_err();
    assert!(matches!(err, GraphError::InvalidEdgeCost { .. }), "{err}");
}
