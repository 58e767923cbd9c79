//! Courier Kernel: the immutable road graph and the proof primitives that
//! fingerprint search output.
//!
//! # API Surface
//!
//! - [`graph::Graph`] -- read-only adjacency with per-node coordinates and
//!   heuristic values, built once via [`graph::GraphBuilder`] or
//!   [`graph::GraphConfig`]
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON
//!   serializer
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256
//! - [`fixtures::reference_city`] -- the 9-node reference graph
//!
//! # Module Dependency Direction
//!
//! `proof` ← `graph`
//!
//! `graph` uses `proof` only for [`graph::Graph::digest`]. `proof` depends on
//! nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fixtures;
pub mod graph;
pub mod proof;
