//! Bridges between this protocol and `std::iter::Iterator`

use crate::protocol::IteratorProtocol;

/// A protocol cursor usable wherever a std iterator is expected
#[derive(Debug, Clone)]
pub struct Std<I> {
    inner: I,
}

impl<I> Std<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: IteratorProtocol> Iterator for Std<I> {
    type Item = I::Element;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// A std iterator driven through the protocol
#[derive(Debug, Clone)]
pub struct FromStd<I> {
    inner: I,
}

impl<I> FromStd<I> {
    pub fn get_ref(&self) -> &I {
        &self.inner
    }
}

impl<I: Iterator> IteratorProtocol for FromStd<I> {
    type Element = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Element> {
        self.inner.next()
    }
}

/// Wrap anything iterable by std as a protocol cursor
pub fn from_std<I: IntoIterator>(iterable: I) -> FromStd<I::IntoIter> {
    FromStd {
        inner: iterable.into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_std() {
        let doubled: Vec<i32> = from_std(vec![1, 2, 3]).into_std().map(|x| x * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[test]
    fn test_std_adapter_works_with_for_loops() {
        let mut sum = 0;
        for x in from_std(1..=4).into_std() {
            sum += x;
        }
        assert_eq!(sum, 10);
    }
}
