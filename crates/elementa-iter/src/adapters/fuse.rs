use crate::protocol::IteratorProtocol;

/// Cursor that stays exhausted after its first `None`
///
/// The wrapped cursor is dropped on exhaustion, so it is never polled again.
#[derive(Debug, Clone)]
pub struct Fuse<I> {
    inner: Option<I>,
}

impl<I> Fuse<I> {
    pub fn new(inner: I) -> Self {
        Self { inner: Some(inner) }
    }

    /// The wrapped cursor, unless exhaustion has already been observed
    pub fn get_ref(&self) -> Option<&I> {
        self.inner.as_ref()
    }

    pub fn is_exhausted(&self) -> bool {
        self.inner.is_none()
    }
}

impl<I: IteratorProtocol> IteratorProtocol for Fuse<I> {
    type Element = I::Element;

    #[inline]
    fn next(&mut self) -> Option<Self::Element> {
        let element = self.inner.as_mut()?.next();
        if element.is_none() {
            self.inner = None;
        }
        element
    }
}
