//! Persistent singly linked list

use std::fmt;
use std::rc::Rc;

use crate::iterable::{Iterable, Repeatable};
use crate::protocol::IteratorProtocol;

struct Node<T> {
    value: T,
    next: Option<Rc<Node<T>>>,
}

/// Immutable cons list with structural sharing
///
/// Prepending is O(1) and leaves the original list intact; both lists share
/// the tail. Cloning is O(1).
pub struct ConsList<T> {
    head: Option<Rc<Node<T>>>,
    len: usize,
}

impl<T> ConsList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// A new list with `value` in front of this one
    pub fn cons(&self, value: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                value,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Everything after the head; empty stays empty
    pub fn tail(&self) -> Self {
        match &self.head {
            Some(node) => Self {
                head: node.next.clone(),
                len: self.len - 1,
            },
            None => Self::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T> Default for ConsList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ConsList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            list.entry(&n.value);
            node = n.next.as_deref();
        }
        list.finish()
    }
}

// Unlinks uniquely owned nodes one at a time so long lists do not
// overflow the stack through recursive drops.
impl<T> Drop for ConsList<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// Builds the list in iteration order
impl<T> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(ConsList::new(), |list, value| list.cons(value))
    }
}

/// Cursor holding the not-yet-visited remainder of a list
///
/// Cloning copies the position only; the copy and the original advance
/// independently.
pub struct ConsCursor<'a, T> {
    node: Option<&'a Node<T>>,
}

impl<'a, T> Clone for ConsCursor<'a, T> {
    fn clone(&self) -> Self {
        Self { node: self.node }
    }
}

impl<'a, T: Clone> IteratorProtocol for ConsCursor<'a, T> {
    type Element = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let node = self.node?;
        self.node = node.next.as_deref();
        Some(node.value.clone())
    }
}

impl<T: Clone> Iterable for ConsList<T> {
    type Element = T;
    type Iter<'a> = ConsCursor<'a, T> where Self: 'a;

    const MULTI_PASS: bool = true;

    fn make_iterator(&self) -> ConsCursor<'_, T> {
        ConsCursor {
            node: self.head.as_deref(),
        }
    }

    fn underestimated_count(&self) -> usize {
        self.len
    }
}

impl<T: Clone> Repeatable for ConsList<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cons_shares_the_tail() {
        let base: ConsList<i32> = [2, 3].into_iter().collect();
        let one = base.cons(1);
        let zero = base.cons(0);
        assert_eq!(one.to_vec(), vec![1, 2, 3]);
        assert_eq!(zero.to_vec(), vec![0, 2, 3]);
        assert_eq!(base.to_vec(), vec![2, 3]);
        assert_eq!(one.len(), 3);
    }

    #[test]
    fn test_head_and_tail() {
        let list: ConsList<char> = "abc".chars().collect();
        assert_eq!(list.head(), Some(&'a'));
        assert_eq!(list.tail().head(), Some(&'b'));
        assert_eq!(list.tail().tail().tail().len(), 0);
        assert!(ConsList::<char>::new().tail().is_empty());
    }

    #[test]
    fn test_cloned_cursor_is_independent() {
        let list: ConsList<String> = ["p", "q", "r"].iter().map(|s| s.to_string()).collect();
        let mut cursor = list.make_iterator();
        cursor.next();
        let mut copy = cursor.clone();
        assert_eq!(copy.next().as_deref(), Some("q"));
        assert_eq!(copy.next().as_deref(), Some("r"));
        assert_eq!(cursor.next().as_deref(), Some("q"));
    }

    #[test]
    fn test_long_list_drops_without_overflow() {
        let list: ConsList<u32> = (0..200_000).collect();
        assert_eq!(list.underestimated_count(), 200_000);
        drop(list);
    }

    #[test]
    fn test_debug_lists_elements() {
        let list: ConsList<u8> = vec![1, 2].into_iter().collect();
        assert_eq!(format!("{list:?}"), "[1, 2]");
    }
}
