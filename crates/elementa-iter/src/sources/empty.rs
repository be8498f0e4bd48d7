use std::fmt;
use std::marker::PhantomData;

use crate::iterable::{Iterable, Repeatable};
use crate::protocol::IteratorProtocol;

/// The sequence with no elements
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

pub struct EmptyCursor<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for EmptyCursor<T> {
    fn clone(&self) -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> IteratorProtocol for EmptyCursor<T> {
    type Element = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }
}

impl<T> Iterable for Empty<T> {
    type Element = T;
    type Iter<'a> = EmptyCursor<T> where Self: 'a;

    const MULTI_PASS: bool = true;

    fn make_iterator(&self) -> EmptyCursor<T> {
        EmptyCursor {
            _marker: PhantomData,
        }
    }

    fn custom_contains(&self, _element: &T) -> Option<bool> {
        Some(false)
    }
}

impl<T> Repeatable for Empty<T> {}

/// The sequence with exactly one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Once<T> {
    value: T,
}

impl<T> Once<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

pub struct OnceCursor<'a, T> {
    value: Option<&'a T>,
}

impl<'a, T> Clone for OnceCursor<'a, T> {
    fn clone(&self) -> Self {
        Self { value: self.value }
    }
}

impl<'a, T: Clone> IteratorProtocol for OnceCursor<'a, T> {
    type Element = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.value.take().cloned()
    }
}

impl<T: Clone> Iterable for Once<T> {
    type Element = T;
    type Iter<'a> = OnceCursor<'a, T> where Self: 'a;

    const MULTI_PASS: bool = true;

    fn make_iterator(&self) -> OnceCursor<'_, T> {
        OnceCursor {
            value: Some(&self.value),
        }
    }

    fn underestimated_count(&self) -> usize {
        1
    }
}

impl<T: Clone> Repeatable for Once<T> {}
