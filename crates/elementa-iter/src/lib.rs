//! Pull-based external iteration
//!
//! This crate defines the protocol every sequence in elementa is traversed
//! through:
//!
//! 1. **Cursors** - [`IteratorProtocol`] yields one element per `next` call
//!    until it returns `None`, and keeps returning `None` after that
//! 2. **Iterables** - [`Iterable`] manufactures cursors in O(1) and carries
//!    default algorithms (`contains`, `copy_contents`, `to_vec`, ...)
//! 3. **Refinements** - [`SinglePass`] for sequences whose cursors share
//!    consumption, [`Repeatable`] for sequences that can be walked again
//!
//! # Contract
//!
//! Only one cursor of an iterable should be advanced at a time. The base
//! protocol promises neither an order nor that a second traversal sees the
//! same elements; [`Repeatable`] adds both promises. Misusing aliased cursors
//! of a single-pass sequence is memory-safe but its results are unspecified.
//!
//! # Example
//!
//! ```rust
//! use elementa_iter::{Iterable, IteratorProtocol, Stream};
//!
//! let data = vec![1, 2, 3];
//! let mut cursor = data.make_iterator();
//! assert_eq!(cursor.next(), Some(1));
//! assert_eq!(cursor.count_remaining(), 2);
//!
//! // single-pass: the second cursor continues where the first stopped
//! let stream = Stream::new(data);
//! stream.make_iterator().next();
//! assert_eq!(stream.to_vec(), vec![2, 3]);
//! ```

pub mod adapters;
pub mod algorithms;
pub mod iterable;
pub mod protocol;
pub mod sources;

pub use adapters::{from_std, Checked, FromStd, Fuse, Std};
pub use iterable::{Iterable, Repeatable, SinglePass};
pub use protocol::IteratorProtocol;
pub use sources::{ConsList, Empty, Once, Stream};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{from_std, IteratorProtocol};
    pub use crate::{ConsList, Empty, Once, Stream};
    pub use crate::{Iterable, Repeatable, SinglePass};
}
