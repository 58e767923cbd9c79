//! Property locks over the reference city.
//!
//! Proves, for every strategy and every (start, goal) pair:
//! 1. Repeated runs are bit-identical (equal digests)
//! 2. `start == goal` yields a one-node path at zero cost with no expansions
//! 3. Returned paths are real walks whose edge costs sum to the reported cost
//! 4. `nodes_expanded` and trace length agree on success and on failure
//!
//! and toward the fixed goal `G` (the goal the stored heuristic targets):
//! 5. A* cost equals the brute-force shortest distance
//! 6. A* expands no more nodes than BFS
//! 7. DFS never beats the optimum

use approx::assert_relative_eq;
use courier_kernel::fixtures::{reference_city, reference_city_with_isolated};
use courier_kernel::graph::{Graph, NodeId};
use courier_search::contract::Algorithm;
use courier_search::result::SearchResult;

fn ids(graph: &Graph) -> Vec<NodeId> {
    graph.node_ids().cloned().collect()
}

fn names(result: &SearchResult) -> Vec<&str> {
    result
        .path
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(NodeId::as_str)
        .collect()
}

/// Single-source shortest distances by repeated relaxation over every edge.
fn brute_force_distance(graph: &Graph, start: &NodeId, goal: &NodeId) -> f64 {
    let mut dist: std::collections::HashMap<&str, f64> = graph
        .node_ids()
        .map(|n| (n.as_str(), f64::INFINITY))
        .collect();
    dist.insert(start.as_str(), 0.0);
    for _ in 0..graph.node_count() {
        for edge in graph.edges() {
            let (a, b) = (edge.from.as_str(), edge.to.as_str());
            let via_a = dist[a] + edge.cost;
            let via_b = dist[b] + edge.cost;
            if via_a < dist[b] {
                dist.insert(b, via_a);
            }
            if via_b < dist[a] {
                dist.insert(a, via_b);
            }
        }
    }
    dist[goal.as_str()]
}

fn path_cost(graph: &Graph, path: &[NodeId]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .edge_cost(pair[0].as_str(), pair[1].as_str())
                .unwrap_or(f64::NAN)
        })
        .sum()
}

// ---------------------------------------------------------------------------
// 1. Idempotence
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_have_identical_digests() {
    let graph = reference_city().unwrap();
    for algorithm in Algorithm::ALL {
        for start in ids(&graph) {
            for goal in ids(&graph) {
                let first = algorithm.run(&graph, &start, &goal);
                let second = algorithm.run(&graph, &start, &goal);
                assert_eq!(first, second, "{algorithm} {start}->{goal}");
                assert_eq!(
                    first.digest().unwrap(),
                    second.digest().unwrap(),
                    "{algorithm} {start}->{goal}"
                );
            }
        }
    }
}

#[test]
fn rebuilt_graph_gives_identical_digests() {
    let first = reference_city().unwrap();
    let second = reference_city().unwrap();
    assert_eq!(first.digest().unwrap(), second.digest().unwrap());
    for algorithm in Algorithm::ALL {
        let a = algorithm.run(&first, &"A".into(), &"G".into());
        let b = algorithm.run(&second, &"A".into(), &"G".into());
        assert_eq!(
            a.to_canonical_json_bytes().unwrap(),
            b.to_canonical_json_bytes().unwrap()
        );
    }
}

// ---------------------------------------------------------------------------
// 2. Trivial case
// ---------------------------------------------------------------------------

#[test]
fn start_equals_goal_for_every_node() {
    let graph = reference_city().unwrap();
    for algorithm in Algorithm::ALL {
        for node in ids(&graph) {
            let result = algorithm.run(&graph, &node, &node);
            assert!(result.is_success());
            assert_eq!(result.path.as_deref(), Some(std::slice::from_ref(&node)));
            assert!(result.cost.abs() < f64::EPSILON);
            assert_eq!(result.nodes_expanded, 0);
            assert_eq!(result.trace.len(), 1);
        }
    }
}

// ---------------------------------------------------------------------------
// 3-4. Path validity and bookkeeping
// ---------------------------------------------------------------------------

#[test]
fn paths_are_valid_walks_with_matching_cost() {
    let graph = reference_city().unwrap();
    for algorithm in Algorithm::ALL {
        for start in ids(&graph) {
            for goal in ids(&graph) {
                let result = algorithm.run(&graph, &start, &goal);
                assert!(result.is_success(), "{algorithm} {start}->{goal}");
                assert!(result.path_is_valid(&graph, &start, &goal));
                let path = result.path.as_deref().unwrap();
                assert_relative_eq!(result.cost, path_cost(&graph, path), epsilon = 1e-12);

                let mut seen = std::collections::HashSet::new();
                assert!(
                    path.iter().all(|n| seen.insert(n)),
                    "{algorithm} {start}->{goal} revisits a node: {:?}",
                    names(&result)
                );
            }
        }
    }
}

#[test]
fn expansions_match_trace_length() {
    let graph = reference_city_with_isolated().unwrap();
    for algorithm in Algorithm::ALL {
        for start in ids(&graph) {
            for goal in ids(&graph) {
                let result = algorithm.run(&graph, &start, &goal);
                let len = result.trace.len() as u64;
                if result.is_success() {
                    assert_eq!(
                        result.nodes_expanded,
                        len - 1,
                        "{algorithm} {start}->{goal}"
                    );
                    assert_eq!(result.trace.last().map(|s| &s.node), Some(&goal));
                } else {
                    assert_eq!(
                        result.nodes_expanded, len,
                        "{algorithm} {start}->{goal}"
                    );
                }
                assert!(result.nodes_expanded <= graph.node_count() as u64);
                assert_eq!(result.trace.first().map(|s| &s.node), Some(&start));
                for (i, step) in result.trace.iter().enumerate() {
                    assert_eq!(step.step, i as u64);
                }
            }
        }
    }
}

#[test]
fn isolated_goal_fails_for_every_strategy() {
    let graph = reference_city_with_isolated().unwrap();
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph, &"A".into(), &"Z".into());
        assert!(!result.is_success());
        assert!(result.path.is_none());
        assert!(result.cost.is_infinite());
        assert_eq!(result.error().unwrap().to_string(), "no path found");
        assert_eq!(result.nodes_expanded, 9);
    }
}

// ---------------------------------------------------------------------------
// 5-7. Optimality toward G
// ---------------------------------------------------------------------------

#[test]
fn astar_is_optimal_toward_g() {
    let graph = reference_city().unwrap();
    let goal = NodeId::from("G");
    for start in ids(&graph) {
        let result = Algorithm::AStar.run(&graph, &start, &goal);
        let optimum = brute_force_distance(&graph, &start, &goal);
        assert_relative_eq!(result.cost, optimum, epsilon = 1e-9);
    }
}

#[test]
fn astar_expands_no_more_than_bfs_toward_g() {
    let graph = reference_city().unwrap();
    let goal = NodeId::from("G");
    for start in ids(&graph) {
        let astar = Algorithm::AStar.run(&graph, &start, &goal);
        let bfs = Algorithm::Bfs.run(&graph, &start, &goal);
        assert!(
            astar.nodes_expanded <= bfs.nodes_expanded,
            "{start}->G: astar {} > bfs {}",
            astar.nodes_expanded,
            bfs.nodes_expanded
        );
    }
}

#[test]
fn dfs_never_beats_the_optimum() {
    let graph = reference_city().unwrap();
    let goal = NodeId::from("G");
    for start in ids(&graph) {
        let dfs = Algorithm::Dfs.run(&graph, &start, &goal);
        let optimum = brute_force_distance(&graph, &start, &goal);
        assert!(
            dfs.cost >= optimum - 1e-9,
            "{start}->G: dfs {} < {optimum}",
            dfs.cost
        );
    }
}

#[test]
fn reference_a_to_g_outcomes() {
    let graph = reference_city().unwrap();
    let (start, goal) = (NodeId::from("A"), NodeId::from("G"));

    let astar = Algorithm::AStar.run(&graph, &start, &goal);
    let bfs = Algorithm::Bfs.run(&graph, &start, &goal);
    let dfs = Algorithm::Dfs.run(&graph, &start, &goal);

    assert_eq!(names(&astar), ["A", "B", "D", "G"]);
    assert_relative_eq!(astar.cost, 6.6, epsilon = 1e-9);
    assert_relative_eq!(bfs.cost, astar.cost, epsilon = 1e-9);
    assert_eq!(names(&dfs), ["A", "B", "C", "E", "D", "I", "F", "G"]);
    assert!(dfs.cost > astar.cost);

    assert_eq!(
        (astar.nodes_expanded, bfs.nodes_expanded, dfs.nodes_expanded),
        (3, 8, 7)
    );
}

#[test]
fn bfs_keeps_minimum_hops_on_c_to_g() {
    let graph = reference_city().unwrap();
    let (start, goal) = (NodeId::from("C"), NodeId::from("G"));

    let astar = Algorithm::AStar.run(&graph, &start, &goal);
    let bfs = Algorithm::Bfs.run(&graph, &start, &goal);

    assert_eq!(astar.hop_count(), bfs.hop_count());
    assert!(bfs.cost > astar.cost);
    assert_relative_eq!(bfs.cost - astar.cost, 0.8, epsilon = 1e-9);
}
