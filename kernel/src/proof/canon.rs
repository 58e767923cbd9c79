//! Canonical JSON bytes for graph and search-result fingerprints.
//!
//! Costs, coordinates and heuristic values are reals. Decimal formatting of
//! an `f64` is not bit-exact, so reals are hashed as the hex of their IEEE-754
//! bits ([`real_bits_hex`]) and a JSON float reaching the writer is an error.
//!
//! # Canonical form
//!
//! - Object keys in byte order, at every depth.
//! - Arrays in their given order (paths and traces are ordered data).
//! - Compact output with no whitespace.
//! - Strings, integers, booleans and `null` exactly as `serde_json` writes
//!   them in compact form.

use std::collections::BTreeMap;
use std::io::Write;

use serde_json::Value;
use thiserror::Error;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// Encode a real as the 16-digit big-endian hex of its IEEE-754 bit pattern.
///
/// `-0.0` and `0.0` encode differently, as do distinct NaN payloads.
#[must_use]
pub fn real_bits_hex(value: f64) -> String {
    hex::encode(value.to_bits().to_be_bytes())
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any JSON number is a float.
/// Encode reals with [`real_bits_hex`] before building the value.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut out = Vec::new();
    write_canonical(&mut out, value)?;
    Ok(out)
}

fn write_canonical(out: &mut Vec<u8>, value: &Value) -> Result<(), CanonError> {
    match value {
        Value::Number(n) if n.is_f64() => {
            return Err(CanonError::NonIntegerNumber {
                raw: n.to_string(),
            });
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_canonical(out, item)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            let sorted: BTreeMap<&str, &Value> =
                map.iter().map(|(key, item)| (key.as_str(), item)).collect();
            out.push(b'{');
            for (i, (key, item)) in sorted.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                // Writes into a Vec cannot fail.
                let _ = write!(out, "{}:", Value::from(key));
                write_canonical(out, item)?;
            }
            out.push(b'}');
        }
        scalar => {
            let _ = write!(out, "{scalar}");
        }
    }
    Ok(())
}
