use crate::iterable::{Iterable, Repeatable};
use crate::protocol::IteratorProtocol;

/// Cursor over a borrowed slice, yielding references
#[derive(Debug)]
pub struct SliceCursor<'s, T> {
    remaining: &'s [T],
}

impl<'s, T> Clone for SliceCursor<'s, T> {
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining,
        }
    }
}

impl<'s, T> SliceCursor<'s, T> {
    pub fn new(slice: &'s [T]) -> Self {
        Self { remaining: slice }
    }

    pub fn as_slice(&self) -> &'s [T] {
        self.remaining
    }
}

impl<'s, T> IteratorProtocol for SliceCursor<'s, T> {
    type Element = &'s T;

    #[inline]
    fn next(&mut self) -> Option<&'s T> {
        let (first, rest) = self.remaining.split_first()?;
        self.remaining = rest;
        Some(first)
    }

    fn count_remaining(self) -> usize {
        self.remaining.len()
    }
}

impl<'s, T> Iterable for &'s [T] {
    type Element = &'s T;
    type Iter<'a> = SliceCursor<'s, T> where Self: 'a;

    const MULTI_PASS: bool = true;

    #[inline]
    fn make_iterator(&self) -> SliceCursor<'s, T> {
        SliceCursor::new(*self)
    }

    fn underestimated_count(&self) -> usize {
        self.len()
    }
}

impl<'s, T> Repeatable for &'s [T] {}
