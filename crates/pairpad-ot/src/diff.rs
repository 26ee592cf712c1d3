//! Snapshot differencing.
//!
//! Derives an operation from a before/after pair of document snapshots, for
//! change sources that do not emit operations themselves — a paste, a
//! programmatic edit, an editor integration that only reports full text.
//!
//! The scan finds one contiguous changed region between a common prefix and
//! a common suffix. It is deliberately not a minimal-edit-distance diff:
//! keystroke-driven edits change a single contiguous span, and for that case
//! the scan is exact in O(n) with no backtracking. Two disjoint edits
//! submitted as one snapshot pair come back as a single region covering
//! both; the operation still applies correctly, it just deletes and
//! re-inserts the unchanged text between them.

use crate::component::{Component, TextOp};

/// Bytes shared at the start of `a` and `b`, accumulated char by char so the
/// result is a valid slice boundary in both strings.
fn common_prefix(a: &str, b: &str) -> usize {
    let mut bytes = 0usize;
    let mut ia = a.chars();
    let mut ib = b.chars();
    loop {
        match (ia.next(), ib.next()) {
            (Some(ca), Some(cb)) if ca == cb => bytes += ca.len_utf8(),
            _ => break,
        }
    }
    bytes
}

/// Bytes shared at the end of `a` and `b`.
fn common_suffix(a: &str, b: &str) -> usize {
    let mut bytes = 0usize;
    let mut ia = a.chars().rev();
    let mut ib = b.chars().rev();
    loop {
        match (ia.next(), ib.next()) {
            (Some(ca), Some(cb)) if ca == cb => bytes += ca.len_utf8(),
            _ => break,
        }
    }
    bytes
}

/// Derive an operation that rewrites `before` into `after`:
/// `apply(before, &diff(before, after)) == after` for every pair of strings.
///
/// The output is normalized by construction: at most
/// `[Retain, Delete, Insert, Retain]`, each present only when non-empty.
pub fn diff(before: &str, after: &str) -> TextOp {
    if before == after {
        return if before.is_empty() {
            Vec::new()
        } else {
            vec![Component::Retain(before.chars().count())]
        };
    }

    let prefix = common_prefix(before, after);
    let before_rest = &before[prefix..];
    let after_rest = &after[prefix..];
    // Scanning the remainders keeps the suffix from overlapping the prefix.
    let suffix = common_suffix(before_rest, after_rest);
    let deleted = &before_rest[..before_rest.len() - suffix];
    let inserted = &after_rest[..after_rest.len() - suffix];

    let mut out = TextOp::new();
    if prefix > 0 {
        out.push(Component::Retain(before[..prefix].chars().count()));
    }
    if !deleted.is_empty() {
        out.push(Component::Delete(deleted.chars().count()));
    }
    if !inserted.is_empty() {
        out.push(Component::Insert(inserted.to_string()));
    }
    if suffix > 0 {
        out.push(Component::Retain(
            before[before.len() - suffix..].chars().count(),
        ));
    }
    out
}
