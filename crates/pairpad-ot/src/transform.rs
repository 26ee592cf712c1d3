//! Concurrent-operation transformation, the convergence core.
//!
//! Given operations authored against the same base document, neither having
//! seen the other, [`transform`] rewrites one so it applies cleanly after
//! the other. The guarantee is convergence: with
//! `(a2, b2) = transform_pair(a, b)`,
//! `apply(apply(d, b), &a2) == apply(apply(d, a), &b2)`.

use crate::component::{Component, TextOp};
use crate::cursor::OpCursor;
use crate::normalize::{append, normalize};

/// Which side's insert lands first when both operations insert at the same
/// position.
///
/// This is a protocol-wide convention, not a local choice. For a concurrent
/// pair exactly one operation must be transformed with [`OursFirst`] and the
/// other with [`TheirsFirst`]; if both sides claim priority, each peer orders
/// its own insert first and the documents diverge. [`transform_pair`]
/// applies the convention in one call.
///
/// [`OursFirst`]: InsertOrder::OursFirst
/// [`TheirsFirst`]: InsertOrder::TheirsFirst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOrder {
    /// The transformed operation flushes its own insert first.
    OursFirst,
    /// The transformed operation retains over the other side's insert first.
    TheirsFirst,
}

/// Transform `op` against a concurrent `against`, with `op` keeping insert
/// priority. Shorthand for `transform_with(op, against, InsertOrder::OursFirst)`.
pub fn transform(op: &[Component], against: &[Component]) -> TextOp {
    transform_with(op, against, InsertOrder::OursFirst)
}

/// Transform both sides of a concurrent pair consistently: `a` keeps insert
/// priority and `b` yields. Returns `(a2, b2)` such that applying `b` then
/// `a2` and applying `a` then `b2` produce the same document.
pub fn transform_pair(a: &[Component], b: &[Component]) -> (TextOp, TextOp) {
    (
        transform_with(a, b, InsertOrder::OursFirst),
        transform_with(b, a, InsertOrder::TheirsFirst),
    )
}

/// Transform `op` so it applies to a document that `against` has already
/// edited.
///
/// Both inputs are normalized, then walked in lock step. Inserts on our side
/// pass through verbatim; inserts on the other side turn into retains over
/// the text they will have added. Retain/delete spans are consumed in
/// `min`-sized pieces: a retain over text the other side deleted vanishes,
/// a delete of already-deleted text is dropped rather than applied twice,
/// and a delete of surviving text is kept.
///
/// When `op` is exhausted, remaining `against`-only components produce no
/// output; the result may therefore end short of the new document and relies
/// on the applier's retain-to-end leniency (see [`apply`](crate::apply())).
///
/// Both operations must have been authored against the same base document.
/// A mismatched pairing is a protocol violation: the result's spans match
/// neither input, and divergence surfaces at the embedding layer.
pub fn transform_with(op: &[Component], against: &[Component], order: InsertOrder) -> TextOp {
    let op = normalize(op.to_vec());
    let against = normalize(against.to_vec());
    let mut ours = OpCursor::new(&op);
    let mut theirs = OpCursor::new(&against);
    let mut result = TextOp::new();

    loop {
        match (ours.peek(), theirs.peek()) {
            // Done. Trailing components of `against` need no output on our
            // side: the applier retains to the end of the document.
            (None, _) => break,
            // `against` is exhausted; the rest of our operation stands.
            (Some(_), None) => {
                if let Some(piece) = ours.take_rest() {
                    append(&mut result, piece);
                }
            }
            (Some(ours_head), Some(theirs_head)) => match (ours_head, theirs_head) {
                // Insert-vs-insert tie: the configured order decides.
                (Component::Insert(_), Component::Insert(_))
                    if order == InsertOrder::TheirsFirst =>
                {
                    let n = theirs.remaining();
                    theirs.skip(n);
                    append(&mut result, Component::Retain(n));
                }
                // Our insert survives transformation verbatim.
                (Component::Insert(_), _) => {
                    if let Some(piece) = ours.take_rest() {
                        append(&mut result, piece);
                    }
                }
                // Retain over text the other side is about to insert.
                (_, Component::Insert(_)) => {
                    let n = theirs.remaining();
                    theirs.skip(n);
                    append(&mut result, Component::Retain(n));
                }
                (Component::Retain(_), Component::Retain(_)) => {
                    let n = ours.remaining().min(theirs.remaining());
                    ours.skip(n);
                    theirs.skip(n);
                    append(&mut result, Component::Retain(n));
                }
                // The span we wanted to keep is gone; nothing to emit.
                (Component::Retain(_), Component::Delete(_)) => {
                    let n = ours.remaining().min(theirs.remaining());
                    ours.skip(n);
                    theirs.skip(n);
                }
                // Our delete still applies to the surviving span.
                (Component::Delete(_), Component::Retain(_)) => {
                    let n = ours.remaining().min(theirs.remaining());
                    ours.skip(n);
                    theirs.skip(n);
                    append(&mut result, Component::Delete(n));
                }
                // Both sides deleted the span; deleting it twice would eat
                // neighboring text.
                (Component::Delete(_), Component::Delete(_)) => {
                    let n = ours.remaining().min(theirs.remaining());
                    ours.skip(n);
                    theirs.skip(n);
                }
            },
        }
    }
    normalize(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::apply;

    #[test]
    fn transform_against_empty_is_normalize() {
        let op = vec![
            Component::Retain(2),
            Component::Retain(3),
            Component::Insert("x".to_string()),
        ];
        assert_eq!(
            transform(&op, &[]),
            vec![Component::Retain(5), Component::Insert("x".to_string())]
        );
    }

    #[test]
    fn retain_over_deleted_text_vanishes() {
        // Base "hello": we keep it all and append, they delete it all.
        let op = vec![Component::Retain(5), Component::Insert("X".to_string())];
        let against = vec![Component::Delete(5)];
        let transformed = transform(&op, &against);
        assert_eq!(transformed, vec![Component::Insert("X".to_string())]);
        assert_eq!(apply(&apply("hello", &against), &transformed), "X");
    }

    #[test]
    fn delete_of_surviving_text_is_kept() {
        let op = vec![Component::Delete(3)];
        let against = vec![Component::Retain(5)];
        assert_eq!(transform(&op, &against), vec![Component::Delete(3)]);
    }

    #[test]
    fn overlapping_deletes_are_not_doubled() {
        // Both delete "bye" from "goodbye"; the text must go once, not twice.
        let op = vec![Component::Retain(4), Component::Delete(3)];
        let against = vec![Component::Retain(4), Component::Delete(3)];
        assert_eq!(transform(&op, &against), vec![Component::Retain(4)]);
    }

    #[test]
    fn partially_overlapping_deletes_keep_the_difference() {
        let op = vec![Component::Delete(5)];
        let against = vec![Component::Delete(3)];
        assert_eq!(transform(&op, &against), vec![Component::Delete(2)]);
    }

    #[test]
    fn retain_spans_split_at_their_boundaries() {
        let op = vec![Component::Retain(5), Component::Delete(1)];
        let against = vec![
            Component::Retain(2),
            Component::Insert("..".to_string()),
            Component::Retain(4),
        ];
        assert_eq!(
            transform(&op, &against),
            vec![Component::Retain(7), Component::Delete(1)]
        );
    }

    #[test]
    fn insert_order_decides_same_position_inserts() {
        let a = vec![Component::Retain(3), Component::Insert("X".to_string())];
        let b = vec![Component::Retain(3), Component::Insert("Y".to_string())];

        let a2 = transform_with(&a, &b, InsertOrder::OursFirst);
        let b2 = transform_with(&b, &a, InsertOrder::TheirsFirst);
        assert_eq!(
            a2,
            vec![Component::Retain(3), Component::Insert("X".to_string())]
        );
        assert_eq!(
            b2,
            vec![Component::Retain(4), Component::Insert("Y".to_string())]
        );

        assert_eq!(apply(&apply("abc", &b), &a2), "abcXY");
        assert_eq!(apply(&apply("abc", &a), &b2), "abcXY");
    }

    #[test]
    fn transform_pair_converges() {
        let doc = "hello";
        let a = vec![
            Component::Retain(5),
            Component::Insert(" world".to_string()),
        ];
        let b = vec![Component::Delete(1), Component::Insert("H".to_string())];
        let (a2, b2) = transform_pair(&a, &b);
        assert_eq!(apply(&apply(doc, &b), &a2), apply(&apply(doc, &a), &b2));
    }

    #[test]
    fn insert_survives_surrounding_delete() {
        // They delete the region our insert lands in; the insert stays.
        let op = vec![Component::Retain(2), Component::Insert("X".to_string())];
        let against = vec![Component::Delete(4)];
        let transformed = transform(&op, &against);
        assert_eq!(transformed, vec![Component::Insert("X".to_string())]);
        assert_eq!(apply(&apply("abcd", &against), &transformed), "X");
    }

    #[test]
    fn inputs_are_normalized_before_the_walk() {
        let op = vec![
            Component::Retain(0),
            Component::Retain(3),
            Component::Insert("X".to_string()),
        ];
        let against = vec![Component::Delete(2), Component::Delete(1)];
        assert_eq!(
            transform(&op, &against),
            vec![Component::Insert("X".to_string())]
        );
    }
}
