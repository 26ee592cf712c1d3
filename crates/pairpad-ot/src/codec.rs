//! Wire codec for operations.
//!
//! Two JSON forms:
//! - the *verbose* form comes from the serde derives on [`Component`]
//!   (`{"retain":5}`, `{"insert":"x"}`, `{"delete":2}`);
//! - the *compact* form encoded here packs an operation into a flat array
//!   where a positive integer retains, a negative integer deletes, and a
//!   string inserts: `[6, "there ", -2, 5]`.
//!
//! Decoding is lenient the same way normalization is: zero spans and empty
//! insert strings are semantic no-ops and are dropped, and adjacent
//! same-variant entries are merged, so every decoded operation is
//! normalized. Anything else malformed is a hard [`CodecError`].

use serde_json::Value;
use thiserror::Error;

use crate::component::{Component, TextOp};
use crate::normalize::normalize;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("compact operation must be a JSON array")]
    NotAnArray,
    #[error("component {index} must be an integer span or insert text")]
    InvalidComponent { index: usize },
}

/// Encode `op` into the compact array form.
pub fn encode(op: &[Component]) -> Value {
    Value::Array(
        op.iter()
            .map(|comp| match comp {
                Component::Retain(n) => Value::from(*n as i64),
                Component::Insert(s) => Value::from(s.as_str()),
                Component::Delete(n) => Value::from(-(*n as i64)),
            })
            .collect(),
    )
}

/// Decode the compact array form into a normalized operation.
pub fn decode(value: &Value) -> Result<TextOp, CodecError> {
    let items = value.as_array().ok_or(CodecError::NotAnArray)?;
    let mut op = TextOp::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::Number(n) => {
                let span = n.as_i64().ok_or(CodecError::InvalidComponent { index })?;
                if span >= 0 {
                    op.push(Component::Retain(span as usize));
                } else {
                    op.push(Component::Delete(span.unsigned_abs() as usize));
                }
            }
            Value::String(s) => op.push(Component::Insert(s.clone())),
            _ => return Err(CodecError::InvalidComponent { index }),
        }
    }
    Ok(normalize(op))
}

/// Encode `op` to a compact JSON string.
pub fn encode_to_string(op: &[Component]) -> String {
    encode(op).to_string()
}

/// Decode an operation from a compact JSON string.
pub fn decode_str(json: &str) -> Result<TextOp, CodecError> {
    decode(&serde_json::from_str(json)?)
}
