//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form with no extraneous whitespace: `{"a":1,"b":2}`.
//! 3. Numbers must be integers (`i64` or `u64`). Floats are rejected so that
//!    digests never depend on float formatting.
//! 4. Output is always valid UTF-8.
//!
//! Rules 1 and 2 are produced by rebuilding every object from a `BTreeMap`
//! and handing the result to `serde_json`'s compact writer.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
    /// The compact writer failed.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Serialize { detail } => write!(f, "canonical JSON write failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number in the tree is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let normalized = normalize(value)?;
    serde_json::to_vec(&normalized).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

fn normalize(value: &Value) -> Result<Value, CanonError> {
    Ok(match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Value::Number(n.clone()),
        Value::Number(n) => {
            return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
        }
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect::<Result<_, _>>()?),
        Value::Object(map) => {
            let sorted: BTreeMap<&String, Value> = map
                .iter()
                .map(|(k, v)| normalize(v).map(|v| (k, v)))
                .collect::<Result<_, _>>()?;
            let mut out = Map::new();
            for (k, v) in sorted {
                out.insert(k.clone(), v);
            }
            Value::Object(out)
        }
        Value::Null | Value::Bool(_) | Value::String(_) => value.clone(),
    })
}
