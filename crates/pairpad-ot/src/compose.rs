//! Sequential composition of operations.

use crate::component::{Component, TextOp};
use crate::cursor::OpCursor;
use crate::normalize::{append, normalize};

/// Compose two sequential operations into one: applying the result equals
/// applying `op1` and then `op2`.
///
/// `op2` must have been authored against the output of `op1` — `dst_len(op1)`
/// and `src_len(op2)` agree up to implicit trailing retains. As with apply
/// and transform, the pairing is the caller's contract and is not checked.
///
/// The walk mirrors transform's. `op1`'s deletes pass through untouched
/// (chars `op2` never saw) and `op2`'s inserts pass through untouched (text
/// `op1` never saw); the remaining pairs consume `min`-sized spans, where a
/// retain that `op2` deletes becomes a delete and an insert that `op2`
/// deletes drops out entirely.
pub fn compose(op1: &[Component], op2: &[Component]) -> TextOp {
    let op1 = normalize(op1.to_vec());
    let op2 = normalize(op2.to_vec());
    let mut first = OpCursor::new(&op1);
    let mut second = OpCursor::new(&op2);
    let mut result = TextOp::new();

    loop {
        match (first.peek(), second.peek()) {
            (None, None) => break,
            // One side exhausted: the other implicitly retains to the end,
            // so its remaining components carry over as-is.
            (Some(_), None) => {
                if let Some(piece) = first.take_rest() {
                    append(&mut result, piece);
                }
            }
            (None, Some(_)) => {
                if let Some(piece) = second.take_rest() {
                    append(&mut result, piece);
                }
            }
            (Some(first_head), Some(second_head)) => match (first_head, second_head) {
                // Chars already deleted by op1 don't interact with op2.
                (Component::Delete(_), _) => {
                    if let Some(piece) = first.take_rest() {
                        append(&mut result, piece);
                    }
                }
                // Text inserted by op2 was never seen by op1.
                (_, Component::Insert(_)) => {
                    if let Some(piece) = second.take_rest() {
                        append(&mut result, piece);
                    }
                }
                (Component::Retain(_), Component::Retain(_)) => {
                    let n = first.remaining().min(second.remaining());
                    first.skip(n);
                    second.skip(n);
                    append(&mut result, Component::Retain(n));
                }
                (Component::Retain(_), Component::Delete(_)) => {
                    let n = first.remaining().min(second.remaining());
                    first.skip(n);
                    second.skip(n);
                    append(&mut result, Component::Delete(n));
                }
                (Component::Insert(_), Component::Retain(_)) => {
                    let n = first.remaining().min(second.remaining());
                    let piece = first.take(n);
                    second.skip(n);
                    if let Some(piece) = piece {
                        append(&mut result, piece);
                    }
                }
                // Inserted by op1, deleted by op2: nothing survives.
                (Component::Insert(_), Component::Delete(_)) => {
                    let n = first.remaining().min(second.remaining());
                    first.skip(n);
                    second.skip(n);
                }
            },
        }
    }
    normalize(result)
}
