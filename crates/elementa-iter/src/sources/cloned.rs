use crate::iterable::{Iterable, Repeatable};
use crate::protocol::IteratorProtocol;

/// Cursor over owned storage, yielding clones
#[derive(Debug, Clone)]
pub struct ClonedCursor<'a, T> {
    remaining: &'a [T],
}

impl<'a, T: Clone> IteratorProtocol for ClonedCursor<'a, T> {
    type Element = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let (first, rest) = self.remaining.split_first()?;
        self.remaining = rest;
        Some(first.clone())
    }

    fn count_remaining(self) -> usize {
        self.remaining.len()
    }
}

impl<T: Clone> Iterable for Vec<T> {
    type Element = T;
    type Iter<'a> = ClonedCursor<'a, T> where Self: 'a;

    const MULTI_PASS: bool = true;

    #[inline]
    fn make_iterator(&self) -> ClonedCursor<'_, T> {
        ClonedCursor { remaining: self }
    }

    fn underestimated_count(&self) -> usize {
        self.len()
    }
}

impl<T: Clone> Repeatable for Vec<T> {}

impl<T: Clone, const N: usize> Iterable for [T; N] {
    type Element = T;
    type Iter<'a> = ClonedCursor<'a, T> where Self: 'a;

    const MULTI_PASS: bool = true;

    #[inline]
    fn make_iterator(&self) -> ClonedCursor<'_, T> {
        ClonedCursor { remaining: self }
    }

    fn underestimated_count(&self) -> usize {
        N
    }
}

impl<T: Clone, const N: usize> Repeatable for [T; N] {}
