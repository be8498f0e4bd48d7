//! Built-in iterables
//!
//! | Source | Element | Kind |
//! |---|---|---|
//! | `&[T]` | `&T` | repeatable |
//! | `Vec<T>`, `[T; N]` | `T` (cloned) | repeatable |
//! | `Range<usize>`, `Range<i64>` | the integer | repeatable, exact count |
//! | [`ConsList<T>`] | `T` (cloned) | repeatable, persistent |
//! | [`Stream<I>`] | `I::Item` | single-pass |
//! | [`Empty<T>`], [`Once<T>`] | `T` | repeatable |

mod cloned;
mod cons_list;
mod empty;
mod range;
mod slice;
mod stream;

pub use cloned::ClonedCursor;
pub use cons_list::{ConsCursor, ConsList};
pub use empty::{Empty, EmptyCursor, Once, OnceCursor};
pub use range::RangeCursor;
pub use slice::SliceCursor;
pub use stream::{Stream, StreamCursor};
