use std::ops::Range;

use crate::iterable::{Iterable, Repeatable};
use crate::protocol::IteratorProtocol;

/// Cursor over a half-open integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeCursor<T> {
    next: T,
    end: T,
}

macro_rules! range_iterable {
    ($($t:ty),*) => {$(
        impl IteratorProtocol for RangeCursor<$t> {
            type Element = $t;

            #[inline]
            fn next(&mut self) -> Option<$t> {
                if self.next >= self.end {
                    return None;
                }
                let current = self.next;
                self.next += 1;
                Some(current)
            }

            fn count_remaining(self) -> usize {
                span(self.next as i128, self.end as i128)
            }
        }

        impl Iterable for Range<$t> {
            type Element = $t;
            type Iter<'a> = RangeCursor<$t> where Self: 'a;

            const MULTI_PASS: bool = true;

            #[inline]
            fn make_iterator(&self) -> RangeCursor<$t> {
                RangeCursor {
                    next: self.start,
                    end: self.end,
                }
            }

            fn underestimated_count(&self) -> usize {
                span(self.start as i128, self.end as i128)
            }

            fn custom_contains(&self, element: &$t) -> Option<bool> {
                Some(self.start <= *element && *element < self.end)
            }
        }

        impl Repeatable for Range<$t> {}
    )*};
}

range_iterable!(usize, i64);

/// Elements in `[start, end)`, clamped to `usize`
#[inline]
fn span(start: i128, end: i128) -> usize {
    usize::try_from((end - start).max(0)).unwrap_or(usize::MAX)
}
