//! A pure-Rust library providing lockstep ("zip") iteration over several
//! independently-owned sequences at once.
//!
//! [`zip()`] binds a tuple of borrowed sequences (slices, `Vec`s or arrays,
//! each slot independently shared or mutable) into a [`Zip`] adaptor. The
//! adaptor is a view: it owns nothing, and its validity is bounded by the
//! sequences it borrows. Iterating it yields one tuple per step, holding the
//! i-th element of every sequence:
//!
//! ```
//! use lockstep::zip;
//!
//! let xs = [1, 2, 3];
//! let ys = [10, 20, 30];
//! let mut out = [0; 3];
//! for (x, y, o) in zip((&xs, &ys, &mut out)) {
//!     *o = x + y;
//! }
//! assert_eq!(out, [11, 22, 33]);
//! ```
//!
//! Beyond `for` loops, the adaptor exposes [`Cursor`]s: plain `Copy` values
//! recording a position across all sequences simultaneously, with stepping,
//! signed-offset arithmetic, distance and ordering: everything needed to
//! run positional algorithms over several sequences as if they were one
//! sequence of tuples. [`Zip::sort_by()`] does exactly that:
//!
//! ```
//! use lockstep::zip;
//!
//! let mut keys = [2, 3, 1];
//! let mut vals = ["b", "c", "a"];
//! zip((&mut keys, &mut vals)).sort_by(|x, y| x.0.cmp(y.0));
//! assert_eq!(keys, [1, 2, 3]);
//! assert_eq!(vals, ["a", "b", "c"]);
//! ```
//!
//! Cursor operations are gated by a capability tag chosen at construction
//! ([`Forward`], [`Bidirectional`] or [`RandomAccess`], the default), so
//! code that promises single-pass iteration cannot accidentally rely on
//! positional arithmetic; see the [`tag`] module.
//!
//! Everything fans out element-wise through the [`apply`] module: applying
//! an operation to every slot of a fixed-arity heterogeneous tuple is the
//! single mechanism behind cursor movement, begin/end construction and
//! iterator conversion. The machinery is generated per arity (1 to 8) at
//! compile time and should optimize away entirely.
//!
//! The bound sequences must have equal lengths. This is debug-asserted at
//! construction and otherwise the caller's responsibility: over misaligned
//! sequences, distance and comparison reflect the first slot only, and
//! dereferencing past a shorter slot panics.

pub mod apply;
pub use apply::{Apply, ApplyMut, ApplyRef, Unary, UnaryMut, UnaryRef};

pub mod tag;
pub use tag::{Bidirectional, Forward, RandomAccess, Reversible, Seekable, Tag};

mod cursor;
pub use cursor::{Cursor, Position};

mod slot;
pub use slot::{Slot, SlotMut, Slots, SlotsMut};

mod iter;
pub use iter::{IntoIters, Iter};

mod zip;
pub use zip::{zip, Zip};
