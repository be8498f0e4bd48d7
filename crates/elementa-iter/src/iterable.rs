//! Iterables and their multi-pass refinement

use std::mem::MaybeUninit;

use elementa_core::{Error, Result};

use crate::algorithms;
use crate::protocol::IteratorProtocol;

/// A sequence that can manufacture cursors over itself
///
/// # Contract
///
/// - `make_iterator` is O(1).
/// - At most one cursor is advanced at a time unless the type is
///   [`Repeatable`]; for a [`SinglePass`] type, cursors may share
///   consumption state and interleaving them is unspecified.
/// - Nothing at this level promises an order, or that a second cursor
///   sees the same elements as the first. [`Repeatable`] promises both.
pub trait Iterable {
    type Element;

    type Iter<'a>: IteratorProtocol<Element = Self::Element>
    where
        Self: 'a;

    /// Whether independent cursors see the same elements in the same order
    ///
    /// `true` exactly when the type implements [`Repeatable`]; a type
    /// implements at most one of [`Repeatable`] and [`SinglePass`].
    const MULTI_PASS: bool = false;

    fn make_iterator(&self) -> Self::Iter<'_>;

    /// A lower bound on the number of elements, without consuming anything
    fn underestimated_count(&self) -> usize {
        0
    }

    /// Answer a membership query faster than a scan, if the type can
    ///
    /// `None` means undecided, and callers fall back to a linear search.
    fn custom_contains(&self, _element: &Self::Element) -> Option<bool> {
        None
    }

    /// Run `f` only if the sequence can be traversed more than once
    fn preprocess_multipass<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        if Self::MULTI_PASS {
            Some(f())
        } else {
            None
        }
    }

    /// Write up to `buf.len()` elements into `buf`, in order
    ///
    /// Returns the cursor positioned after the last written element and the
    /// number of slots initialized. Those slots are owned by the caller, who
    /// must read or drop them.
    fn copy_contents(&self, buf: &mut [MaybeUninit<Self::Element>]) -> (Self::Iter<'_>, usize) {
        algorithms::copy_into(self.make_iterator(), buf)
    }

    /// Visit every element in cursor order
    fn for_each<F>(&self, f: F)
    where
        F: FnMut(Self::Element),
    {
        self.make_iterator().for_each(f);
    }

    /// Membership, via [`custom_contains`] when it decides, else a scan
    ///
    /// [`custom_contains`]: Iterable::custom_contains
    fn contains(&self, element: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        match self.custom_contains(element) {
            Some(found) => found,
            None => algorithms::linear_contains(self.make_iterator(), element),
        }
    }

    fn to_vec(&self) -> Vec<Self::Element> {
        let mut out = Vec::with_capacity(self.underestimated_count());
        self.for_each(|element| out.push(element));
        out
    }

    /// Collect into an array of exactly `N` elements
    ///
    /// Fails with [`Error::LengthMismatch`] otherwise. Consumption stops one
    /// element past `N`, so for an overlong sequence the reported count is
    /// `N + 1`.
    fn collect_array<const N: usize>(&self) -> Result<[Self::Element; N]> {
        let mut cursor = self.make_iterator();
        let mut out = Vec::with_capacity(N);
        while out.len() <= N {
            match cursor.next() {
                Some(element) => out.push(element),
                None => break,
            }
        }
        let actual = out.len();
        <[Self::Element; N]>::try_from(out)
            .map_err(|_| Error::size_mismatch(N, actual, "collect_array"))
    }
}

/// Marker for iterables whose cursors may share consumption state
///
/// Making a second cursor and advancing it affects what the first one sees.
pub trait SinglePass: Iterable {}

/// Marker for iterables with a stable order and independent cursors
///
/// Every cursor made from an unmodified value yields the same elements in
/// the same order, and advancing one never affects another. Implementors
/// must also set [`Iterable::MULTI_PASS`] to `true`.
pub trait Repeatable: Iterable {
    /// Run a multi-pass algorithm; unlike [`Iterable::preprocess_multipass`]
    /// this is checked when compiling rather than answered at run time
    fn with_multipass<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Self) -> R,
    {
        debug_assert!(
            Self::MULTI_PASS,
            "{} is Repeatable but declares MULTI_PASS = false",
            std::any::type_name::<Self>()
        );
        f(self)
    }
}
