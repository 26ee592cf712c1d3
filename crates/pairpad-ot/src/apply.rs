//! Projection of an operation onto a document string.

use thiserror::Error;

use crate::component::{src_len, Component};

/// Error returned by [`apply_strict`] when an operation does not span the
/// document it is applied to.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    #[error("operation spans {expected} chars but document has {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Apply `op` to `doc`, returning the edited document.
///
/// Lenient mode: after the last component, the unconsumed suffix of `doc` is
/// copied to the output, so operations may omit their trailing retain.
/// Normalization does not matter here — zero-length components project
/// nothing and merging does not change the projection.
///
/// The caller guarantees that `op` was authored against `doc`
/// (`src_len(op) <= len(doc)` in chars). An operation that consumes more
/// chars than the document holds is a protocol violation, not a recoverable
/// condition, and panics. Use [`apply_strict`] to check the pairing instead.
pub fn apply(doc: &str, op: &[Component]) -> String {
    let chars: Vec<char> = doc.chars().collect();
    let mut result = String::with_capacity(doc.len());
    let mut idx = 0usize;

    for comp in op {
        match comp {
            Component::Retain(n) => {
                result.extend(chars[idx..idx + n].iter());
                idx += n;
            }
            Component::Insert(s) => {
                result.push_str(s);
            }
            Component::Delete(n) => {
                idx += n;
            }
        }
    }
    result.extend(chars[idx..].iter());
    result
}

/// Apply `op` to `doc`, rejecting operations that do not consume the whole
/// document.
///
/// Strict mode has no implicit retain-to-end: the operation's retain and
/// delete spans must sum to exactly the document length in chars.
pub fn apply_strict(doc: &str, op: &[Component]) -> Result<String, ApplyError> {
    let expected = src_len(op);
    let actual = doc.chars().count();
    if expected != actual {
        return Err(ApplyError::LengthMismatch { expected, actual });
    }
    Ok(apply(doc, op))
}
