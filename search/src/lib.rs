//! Courier Search: deterministic A*, BFS, and DFS over a static graph.
//!
//! This crate provides the search layer for Courier. It depends only on
//! `courier_kernel`; it does NOT depend on `courier_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! courier_kernel  ←  courier_search  ←  courier_harness
//! (graph, proof)     (strategies)        (requests, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchStrategy`](contract::SearchStrategy) -- one traversal over a read-only graph
//! - [`Algorithm`](contract::Algorithm) -- `astar` / `bfs` / `dfs` selector
//! - [`SearchResult`](result::SearchResult) -- path, cost, expansions, trace
//! - [`TraceStep`](trace::TraceStep) -- one visited node in visiting order
//! - [`PriorityFrontier`](frontier::PriorityFrontier) -- `(f, sequence)` ordered open set
//! - [`Heuristic`](heuristic::Heuristic) -- remaining-cost estimate for A*
//!
//! Every strategy owns its search state, so any number of runs may share
//! one `&Graph` across threads.

#![forbid(unsafe_code)]

pub mod astar;
pub mod bfs;
pub mod contract;
pub mod dfs;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod path;
pub mod result;
pub mod trace;
