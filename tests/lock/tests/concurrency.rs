//! Shared-graph concurrency lock.
//!
//! Proves that searches running on many threads over one `Arc<Graph>`
//! produce exactly the digests of sequential runs. Each search owns its
//! state, so no locking is involved.

use std::sync::Arc;
use std::thread;

use courier_kernel::fixtures::reference_city;
use courier_kernel::graph::{Graph, NodeId};
use courier_kernel::proof::hash::ContentHash;
use courier_search::contract::Algorithm;

fn digests(graph: &Graph) -> Vec<ContentHash> {
    let goal = NodeId::from("G");
    let mut out = Vec::new();
    for algorithm in Algorithm::ALL {
        for start in graph.node_ids() {
            out.push(algorithm.run(graph, start, &goal).digest().unwrap());
        }
    }
    out
}

#[test]
fn concurrent_runs_match_sequential_digests() {
    let graph = Arc::new(reference_city().unwrap());
    let sequential = digests(&graph);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || digests(&graph))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), sequential);
    }
}

#[test]
fn scoped_threads_share_a_borrowed_graph() {
    let graph = reference_city().unwrap();
    let (start, goal) = (NodeId::from("A"), NodeId::from("G"));
    let expected: Vec<ContentHash> = Algorithm::ALL
        .into_iter()
        .map(|a| a.run(&graph, &start, &goal).digest().unwrap())
        .collect();

    let (graph, start, goal) = (&graph, &start, &goal);
    let parallel: Vec<ContentHash> = thread::scope(|scope| {
        let handles: Vec<_> = Algorithm::ALL
            .into_iter()
            .map(|a| scope.spawn(move || a.run(graph, start, goal).digest().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(parallel, expected);
}
