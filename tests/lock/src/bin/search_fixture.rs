//! Binary that runs every strategy over the reference city and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: key=value lines on stdout (see source for format). Logs go to
//! stderr and are controlled by `RUST_LOG`.

use courier_kernel::fixtures::{reference_city, reference_city_with_isolated};
use courier_kernel::graph::{Graph, NodeId};
use courier_kernel::proof::canon::real_bits_hex;
use courier_search::contract::Algorithm;

const QUERIES: [(&str, &str); 3] = [("A", "G"), ("C", "G"), ("H", "G")];

fn print_run(graph: &Graph, algorithm: Algorithm, start: &str, goal: &str) {
    let result = algorithm.run(graph, &NodeId::from(start), &NodeId::from(goal));
    let digest = result.digest().expect("result digest failed");
    let path = result.path.as_ref().map_or_else(
        || "none".to_string(),
        |p| p.iter().map(NodeId::as_str).collect::<Vec<_>>().join(","),
    );

    let key = format!("{algorithm}.{start}{goal}");
    println!("{key}.digest={digest}");
    println!("{key}.path={path}");
    println!("{key}.cost_bits={}", real_bits_hex(result.cost));
    println!("{key}.nodes_expanded={}", result.nodes_expanded);
    println!("{key}.trace_len={}", result.trace.len());
    println!("{key}.success={}", result.is_success());
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let city = reference_city().expect("reference city must build");
    let isolated = reference_city_with_isolated().expect("reference city must build");
    log::info!(
        "reference city: {} nodes, {} edges",
        city.node_count(),
        city.edge_count()
    );

    println!(
        "graph_digest={}",
        city.digest().expect("graph digest failed")
    );
    for algorithm in Algorithm::ALL {
        for (start, goal) in QUERIES {
            print_run(&city, algorithm, start, goal);
        }
        print_run(&isolated, algorithm, "A", "Z");
    }
}
