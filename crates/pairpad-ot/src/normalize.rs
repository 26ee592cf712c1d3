//! Canonical form for operations.
//!
//! A normalized operation contains no zero-length components and no two
//! adjacent components of the same variant. This is a canonical form, not an
//! optimization: transform and compose walk components in lock step and
//! assume each head component has at least one char to give and that
//! same-variant runs are already merged.

use crate::component::{Component, TextOp};

/// Append a component, merging with the last component if same variant.
pub(crate) fn append(op: &mut TextOp, comp: Component) {
    match (op.last_mut(), &comp) {
        (Some(Component::Retain(n)), Component::Retain(m)) => {
            *n += m;
            return;
        }
        (Some(Component::Insert(s)), Component::Insert(t)) => {
            s.push_str(t);
            return;
        }
        (Some(Component::Delete(n)), Component::Delete(m)) => {
            *n += m;
            return;
        }
        _ => {}
    }
    op.push(comp);
}

/// Normalize: drop empty components, coalesce adjacent same-variant runs.
///
/// A single left-to-right pass, O(n) in component count, and exactly
/// idempotent. Zero-length retains/deletes and empty inserts are semantic
/// no-ops, so they are discarded rather than rejected. Trailing retains are
/// kept: an explicit `Retain(n)` tail and the applier's implicit
/// retain-to-end project the same way, but they are distinct operation
/// values.
pub fn normalize(op: TextOp) -> TextOp {
    let mut result: TextOp = Vec::with_capacity(op.len());
    for comp in op {
        match &comp {
            Component::Retain(0) | Component::Delete(0) => {}
            Component::Insert(s) if s.is_empty() => {}
            _ => append(&mut result, comp),
        }
    }
    result
}
