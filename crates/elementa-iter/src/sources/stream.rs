//! Single-pass sequences over a shared source

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::adapters::{from_std, FromStd, Fuse};
use crate::iterable::{Iterable, SinglePass};
use crate::protocol::IteratorProtocol;

struct Shared<I> {
    source: Fuse<FromStd<I>>,
    consumed: usize,
}

/// A sequence that can be traversed only once
///
/// Every cursor made from a stream, and from any clone of it, pulls from
/// the same underlying source. Advancing one cursor therefore advances all
/// of them: an element is seen by exactly one cursor, whichever asks first.
/// The shared state is reference counted and not thread-safe, so aliased
/// cursors cannot be advanced from two threads.
pub struct Stream<I: Iterator> {
    shared: Rc<RefCell<Shared<I>>>,
}

impl<I: Iterator> Stream<I> {
    pub fn new<S: IntoIterator<IntoIter = I>>(source: S) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                source: Fuse::new(from_std(source)),
                consumed: 0,
            })),
        }
    }

    /// Elements pulled from the source so far, by any cursor
    pub fn consumed(&self) -> usize {
        self.shared.borrow().consumed
    }

    pub fn is_exhausted(&self) -> bool {
        self.shared.borrow().source.is_exhausted()
    }
}

impl<I: Iterator> Clone for Stream<I> {
    /// Aliases the same source; the clone does not restart the sequence
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<I: Iterator> fmt::Debug for Stream<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("Stream")
            .field("consumed", &shared.consumed)
            .field("exhausted", &shared.source.is_exhausted())
            .finish()
    }
}

/// Cursor pulling from a stream's shared source
pub struct StreamCursor<I: Iterator> {
    shared: Rc<RefCell<Shared<I>>>,
}

impl<I: Iterator> IteratorProtocol for StreamCursor<I> {
    type Element = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let mut shared = self.shared.borrow_mut();
        let element = shared.source.next();
        if element.is_some() {
            shared.consumed += 1;
        }
        element
    }
}

impl<I: Iterator> Iterable for Stream<I> {
    type Element = I::Item;
    type Iter<'a> = StreamCursor<I> where Self: 'a;

    fn make_iterator(&self) -> StreamCursor<I> {
        let consumed = self.consumed();
        if consumed > 0 {
            log::trace!("stream cursor created after {consumed} elements were consumed");
        }
        StreamCursor {
            shared: Rc::clone(&self.shared),
        }
    }

    /// Lower bound reported by the source for what is left
    fn underestimated_count(&self) -> usize {
        self.shared
            .borrow()
            .source
            .get_ref()
            .map_or(0, |s| s.get_ref().size_hint().0)
    }
}

impl<I: Iterator> SinglePass for Stream<I> {}
