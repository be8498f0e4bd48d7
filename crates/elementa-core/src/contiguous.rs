//! Read-only contiguous byte views
//!
//! [`ContiguousBytes`] is the one capability the numeric layer consumes from
//! the memory side: given a value, lend its bytes to a scoped closure. The
//! view is only valid inside the closure. Types whose storage is already one
//! run of plain-old-data lend it directly; others copy into a temporary and
//! say so through [`ContiguousBytes::provides_contiguous_bytes_without_copy`].

use bytemuck::Pod;
use std::collections::VecDeque;

/// Values that can lend a read-only contiguous byte view
pub trait ContiguousBytes {
    /// Run `body` with a contiguous byte view of `self`
    fn with_contiguous_bytes<R>(&self, body: impl FnOnce(&[u8]) -> R) -> R;

    /// Whether [`with_contiguous_bytes`](Self::with_contiguous_bytes) can lend
    /// the bytes without copying them first
    fn provides_contiguous_bytes_without_copy(&self) -> bool {
        true
    }
}

macro_rules! impl_contiguous_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl ContiguousBytes for $t {
                #[inline]
                fn with_contiguous_bytes<R>(&self, body: impl FnOnce(&[u8]) -> R) -> R {
                    body(bytemuck::bytes_of(self))
                }
            }
        )*
    };
}

impl_contiguous_scalar!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

#[cfg(feature = "f16")]
impl_contiguous_scalar!(half::f16);

impl<T: Pod> ContiguousBytes for [T] {
    #[inline]
    fn with_contiguous_bytes<R>(&self, body: impl FnOnce(&[u8]) -> R) -> R {
        body(bytemuck::cast_slice(self))
    }
}

impl<T: Pod, const N: usize> ContiguousBytes for [T; N] {
    #[inline]
    fn with_contiguous_bytes<R>(&self, body: impl FnOnce(&[u8]) -> R) -> R {
        body(bytemuck::cast_slice(self.as_slice()))
    }
}

impl<T: Pod> ContiguousBytes for Vec<T> {
    #[inline]
    fn with_contiguous_bytes<R>(&self, body: impl FnOnce(&[u8]) -> R) -> R {
        body(bytemuck::cast_slice(self.as_slice()))
    }
}

impl<T: Pod> ContiguousBytes for VecDeque<T> {
    fn with_contiguous_bytes<R>(&self, body: impl FnOnce(&[u8]) -> R) -> R {
        let (front, back) = self.as_slices();
        if back.is_empty() {
            return body(bytemuck::cast_slice(front));
        }
        // wrapped ring buffer: linearise into a temporary
        let joined: Vec<T> = front.iter().chain(back.iter()).copied().collect();
        body(bytemuck::cast_slice(&joined))
    }

    fn provides_contiguous_bytes_without_copy(&self) -> bool {
        self.as_slices().1.is_empty()
    }
}

impl<C: ContiguousBytes + ?Sized> ContiguousBytes for &C {
    #[inline]
    fn with_contiguous_bytes<R>(&self, body: impl FnOnce(&[u8]) -> R) -> R {
        (**self).with_contiguous_bytes(body)
    }

    fn provides_contiguous_bytes_without_copy(&self) -> bool {
        (**self).provides_contiguous_bytes_without_copy()
    }
}
