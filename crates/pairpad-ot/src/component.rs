//! Component model for text operations.
//!
//! An operation is an ordered sequence of components, applied first to last.
//! Each component either consumes a span of the source document (`Retain`,
//! `Delete`) or emits new text into the destination (`Insert`). All spans are
//! measured in Unicode scalar values (`char`s), never bytes; apply,
//! transform, compose, and diff all count in the same unit.

use serde::{Deserialize, Serialize};

/// A single edit component.
///
/// The serde derives give the verbose wire form (`{"retain":5}`,
/// `{"insert":"x"}`, `{"delete":2}`); see [`crate::codec`] for the compact
/// array form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    /// Copy the next `n` chars of the source document to the output.
    Retain(usize),
    /// Emit text into the output without consuming the source.
    Insert(String),
    /// Consume the next `n` chars of the source without emitting them.
    Delete(usize),
}

/// An operation: components applied in order, first to last.
pub type TextOp = Vec<Component>;

impl Component {
    /// Length of this component (in chars) on the *source* document.
    pub fn src_len(&self) -> usize {
        match self {
            Component::Retain(n) => *n,
            Component::Insert(_) => 0,
            Component::Delete(n) => *n,
        }
    }

    /// Length of this component (in chars) on the *destination* document.
    pub fn dst_len(&self) -> usize {
        match self {
            Component::Retain(n) => *n,
            Component::Insert(s) => s.chars().count(),
            Component::Delete(_) => 0,
        }
    }
}

/// Total source span consumed by `op`.
///
/// An operation is well formed against a document exactly when this equals
/// the document length in chars.
pub fn src_len(op: &[Component]) -> usize {
    op.iter().map(Component::src_len).sum()
}

/// Total destination length produced by `op`.
pub fn dst_len(op: &[Component]) -> usize {
    op.iter().map(Component::dst_len).sum()
}

/// True if `op` only retains, i.e. applying it changes nothing.
pub fn is_identity(op: &[Component]) -> bool {
    op.iter().all(|comp| matches!(comp, Component::Retain(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn src_len_counts_retain_and_delete() {
        assert_eq!(Component::Retain(5).src_len(), 5);
        assert_eq!(Component::Delete(3).src_len(), 3);
        assert_eq!(Component::Insert("xyz".to_string()).src_len(), 0);
    }

    #[test]
    fn dst_len_counts_retain_and_insert() {
        assert_eq!(Component::Retain(5).dst_len(), 5);
        assert_eq!(Component::Delete(3).dst_len(), 0);
        assert_eq!(Component::Insert("xyz".to_string()).dst_len(), 3);
    }

    #[test]
    fn insert_length_is_chars_not_bytes() {
        assert_eq!(Component::Insert("日本語".to_string()).dst_len(), 3);
    }

    #[test]
    fn op_lengths_sum_components() {
        let op = vec![
            Component::Retain(2),
            Component::Delete(3),
            Component::Insert("ab".to_string()),
        ];
        assert_eq!(src_len(&op), 5);
        assert_eq!(dst_len(&op), 4);
    }

    #[test]
    fn identity_is_all_retains() {
        assert!(is_identity(&[]));
        assert!(is_identity(&[Component::Retain(4), Component::Retain(1)]));
        assert!(!is_identity(&[
            Component::Retain(4),
            Component::Insert("x".to_string())
        ]));
        assert!(!is_identity(&[Component::Delete(1)]));
    }
}
