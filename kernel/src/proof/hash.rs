//! Canonical hashing types and domain separation constants.
//!
//! Algorithm: SHA-256. Every hashed artifact is prefixed with a
//! null-terminated domain tag so that equal bytes from different artifact
//! kinds never share a digest.

use sha2::{Digest, Sha256};

/// A content-addressed hash, formatted `"sha256:<hex_digest>"`.
///
/// Only [`canonical_hash`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Domain prefix for search result fingerprints.
pub const DOMAIN_SEARCH_RESULT: &[u8] = b"COURIER::SEARCH_RESULT::V1\0";

/// Domain prefix for graph content fingerprints.
pub const DOMAIN_GRAPH: &[u8] = b"COURIER::GRAPH::V1\0";

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    ContentHash(format!("sha256:{digest}"))
}
