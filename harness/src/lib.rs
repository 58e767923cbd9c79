//! Courier Harness: the request boundary around the search core.
//!
//! The harness parses and validates a [`SearchRequest`](request::SearchRequest),
//! dispatches it to `courier_search`, and renders the presentation report.
//!
//! The harness does NOT implement search logic; it delegates to
//! `courier_search`. Rounding for display happens here and nowhere else.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod report;
pub mod request;
pub mod runner;
