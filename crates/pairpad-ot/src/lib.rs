//! Operational transformation engine for collaborative text editing.
//!
//! The engine lets multiple editors mutate the same document concurrently
//! and converge on an identical result without a central lock. An edit is an
//! ordered sequence of retain/insert/delete [`Component`]s authored against
//! a specific document state; the engine normalizes, applies, transforms,
//! composes, and derives such operations.
//!
//! - [`component`] — the operation model and its length semantics
//! - `normalize` — canonical form: no empty components, no adjacent
//!   same-variant runs
//! - `apply` — project an operation onto a document string
//! - `transform` — rewrite an operation to apply after a concurrent one
//! - `compose` — fuse two sequential operations into one
//! - `diff` — derive an operation from before/after snapshots
//! - [`codec`] — compact JSON wire form
//!
//! Every entry point is a pure function over value inputs: no shared state,
//! no I/O, no locking, bounded time in the size of its inputs. Any number of
//! sessions may call in concurrently on shared immutable operations.
//!
//! What the engine does *not* do is sequencing. The embedding layer owns the
//! protocol that pairs each operation with the document version it was
//! authored against and guarantees each peer transforms an incoming
//! operation against exactly the local operations its sender had not seen;
//! passing mispaired operations here is a contract violation that surfaces
//! as divergence, not as an error return (see the per-function docs).

pub mod apply;
pub mod codec;
pub mod component;
pub mod compose;
mod cursor;
pub mod diff;
pub mod normalize;
pub mod transform;

pub use apply::{apply, apply_strict, ApplyError};
pub use codec::CodecError;
pub use component::{dst_len, is_identity, src_len, Component, TextOp};
pub use compose::compose;
pub use diff::diff;
pub use normalize::normalize;
pub use transform::{transform, transform_pair, transform_with, InsertOrder};
