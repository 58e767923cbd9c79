//! Canonical serialization and content hashing.

pub mod canon;
pub mod hash;
