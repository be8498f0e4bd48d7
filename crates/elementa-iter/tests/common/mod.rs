//! Shared utilities for integration tests

#![allow(dead_code)]

use std::mem::MaybeUninit;

use elementa_iter::{Iterable, IteratorProtocol};

/// Drain `cursor` into a Vec, pulling at most `limit` elements
pub fn drain<I: IteratorProtocol>(mut cursor: I, limit: usize) -> Vec<I::Element> {
    let mut out = Vec::new();
    while out.len() < limit {
        match cursor.next() {
            Some(element) => out.push(element),
            None => break,
        }
    }
    out
}

/// Assert two fresh cursors of `iterable` yield the same sequence
pub fn assert_repeatable<S>(iterable: &S)
where
    S: Iterable,
    S::Element: PartialEq + std::fmt::Debug,
{
    let first = drain(iterable.make_iterator(), usize::MAX);
    let second = drain(iterable.make_iterator(), usize::MAX);
    assert_eq!(first, second);
}

/// Assert a cursor keeps returning `None` once it has
pub fn assert_sticky<I: IteratorProtocol>(mut cursor: I) {
    while cursor.next().is_some() {}
    for _ in 0..8 {
        assert!(cursor.next().is_none(), "cursor resumed after exhaustion");
    }
}

/// Move the first `written` slots of `buf` out into a Vec
pub fn take_initialized<T>(buf: &mut [MaybeUninit<T>], written: usize) -> Vec<T> {
    buf[..written]
        .iter_mut()
        // SAFETY: the caller passes the count reported by copy_contents,
        // and each slot is read exactly once
        .map(|slot| unsafe { slot.assume_init_read() })
        .collect()
}

/// A fresh uninitialized buffer of `len` slots
pub fn uninit_buffer<T>(len: usize) -> Vec<MaybeUninit<T>> {
    (0..len).map(|_| MaybeUninit::uninit()).collect()
}
