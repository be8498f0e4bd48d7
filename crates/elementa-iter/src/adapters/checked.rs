use crate::protocol::IteratorProtocol;

/// Cursor that polices sticky exhaustion
///
/// Once the wrapped cursor has returned `None`, any element it produces
/// later is a contract violation. The element is dropped, a warning is
/// logged, and `None` is returned in its place.
#[derive(Debug, Clone)]
pub struct Checked<I> {
    inner: I,
    exhausted: bool,
    violations: usize,
}

impl<I> Checked<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            exhausted: false,
            violations: 0,
        }
    }

    /// Number of elements suppressed after exhaustion
    pub fn violations(&self) -> usize {
        self.violations
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: IteratorProtocol> IteratorProtocol for Checked<I> {
    type Element = I::Element;

    fn next(&mut self) -> Option<Self::Element> {
        let element = self.inner.next();
        if self.exhausted {
            if element.is_some() {
                self.violations += 1;
                log::warn!(
                    "cursor {} yielded an element after reporting exhaustion ({} so far); dropped",
                    std::any::type_name::<I>(),
                    self.violations
                );
            }
            return None;
        }
        if element.is_none() {
            self.exhausted = true;
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Restarts from the beginning after running out
    struct Resurrecting {
        pos: usize,
        len: usize,
    }

    impl IteratorProtocol for Resurrecting {
        type Element = usize;

        fn next(&mut self) -> Option<usize> {
            if self.pos == self.len {
                self.pos = 0;
                return None;
            }
            self.pos += 1;
            Some(self.pos)
        }
    }

    #[test]
    fn test_checked_suppresses_resurrection() {
        let mut checked = Resurrecting { pos: 0, len: 2 }.checked();
        assert_eq!(checked.next(), Some(1));
        assert_eq!(checked.next(), Some(2));
        assert_eq!(checked.next(), None);
        assert_eq!(checked.next(), None);
        assert_eq!(checked.next(), None);
        assert_eq!(checked.violations(), 2);
    }

    #[test]
    fn test_checked_well_behaved_cursor_has_no_violations() {
        let mut checked = Checked::new(crate::adapters::from_std(0..3));
        while checked.next().is_some() {}
        checked.next();
        assert_eq!(checked.violations(), 0);
    }
}
