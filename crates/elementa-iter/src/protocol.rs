//! The cursor half of the iteration protocol

use crate::adapters::{Checked, Fuse, Std};

/// A pull-based cursor over a sequence
///
/// A cursor is either active or exhausted. Each call to [`next`] yields the
/// next element while active; the first `None` moves it to exhausted, and
/// every built-in cursor keeps returning `None` from then on. Cursors are
/// single-owner and advanced only through `next`.
///
/// [`next`]: IteratorProtocol::next
pub trait IteratorProtocol {
    type Element;

    fn next(&mut self) -> Option<Self::Element>;

    /// Feed every remaining element to `f`, in order
    fn for_each<F>(mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Element),
    {
        while let Some(element) = self.next() {
            f(element);
        }
    }

    /// Drain the cursor, returning how many elements it still had
    fn count_remaining(mut self) -> usize
    where
        Self: Sized,
    {
        let mut count = 0;
        while self.next().is_some() {
            count += 1;
        }
        count
    }

    /// Guarantee sticky exhaustion regardless of the underlying cursor
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Report elements yielded after exhaustion instead of passing them on
    fn checked(self) -> Checked<Self>
    where
        Self: Sized,
    {
        Checked::new(self)
    }

    /// Adapt into a `std::iter::Iterator`
    fn into_std(self) -> Std<Self>
    where
        Self: Sized,
    {
        Std::new(self)
    }
}

impl<I: IteratorProtocol + ?Sized> IteratorProtocol for &mut I {
    type Element = I::Element;

    #[inline]
    fn next(&mut self) -> Option<Self::Element> {
        (**self).next()
    }
}

impl<I: IteratorProtocol + ?Sized> IteratorProtocol for Box<I> {
    type Element = I::Element;

    #[inline]
    fn next(&mut self) -> Option<Self::Element> {
        (**self).next()
    }
}
