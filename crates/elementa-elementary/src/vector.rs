//! Element-wise lifting to fixed-size vectors
//!
//! A vector of width `N` is a plain `[T; N]`. A single blanket impl makes
//! every such array conform to [`ElementaryFunctions`] whenever its lane type
//! does: each operation runs the lane type's operation on every lane and
//! reassembles the results. The lifting holds no domain policy of its own, so
//! a vector lane always agrees bit-for-bit with the scalar call.
//!
//! The named widths are aliases only; any `N` works, including nested arrays.
//!
//! ```rust
//! use elementa_elementary::{ElementaryFunctions, Vector4};
//!
//! let v: Vector4<f64> = [0.0, 1.0, 4.0, -1.0];
//! let r = <Vector4<f64> as ElementaryFunctions>::sqrt(v);
//! assert_eq!(&r[..3], &[0.0, 1.0, 2.0]);
//! assert!(r[3].is_nan());
//! ```

use crate::traits::ElementaryFunctions;
use elementa_core::{Error, Result};

pub type Vector2<T> = [T; 2];
pub type Vector3<T> = [T; 3];
pub type Vector4<T> = [T; 4];
pub type Vector8<T> = [T; 8];
pub type Vector16<T> = [T; 16];
pub type Vector32<T> = [T; 32];
pub type Vector64<T> = [T; 64];

/// Widths that have a named alias
pub const NAMED_WIDTHS: [usize; 7] = [2, 3, 4, 8, 16, 32, 64];

#[inline(always)]
fn lanewise<T: Copy, U, const N: usize>(x: [T; N], op: impl Fn(T) -> U) -> [U; N] {
    x.map(op)
}

#[inline(always)]
fn lanewise2<T: Copy, const N: usize>(a: [T; N], b: [T; N], op: impl Fn(T, T) -> T) -> [T; N] {
    core::array::from_fn(|i| op(a[i], b[i]))
}

#[inline(always)]
fn lanewise3<T: Copy, const N: usize>(
    a: [T; N],
    b: [T; N],
    c: [T; N],
    op: impl Fn(T, T, T) -> T,
) -> [T; N] {
    core::array::from_fn(|i| op(a[i], b[i], c[i]))
}

macro_rules! lift_unary {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name(x: Self) -> Self {
                lanewise(x, T::$name)
            }
        )*
    };
}

macro_rules! lift_binary {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name(a: Self, b: Self) -> Self {
                lanewise2(a, b, T::$name)
            }
        )*
    };
}

impl<T: ElementaryFunctions, const N: usize> ElementaryFunctions for [T; N] {
    type Sign = [T::Sign; N];

    lift_unary!(
        sqrt, cbrt, sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh, exp,
        exp2, exp10, exp_m1, log, log2, log10, log_1p, erf, erfc, gamma, log_gamma,
    );

    lift_binary!(atan2, hypot, pow);

    #[inline]
    fn sign_gamma(x: Self) -> Self::Sign {
        lanewise(x, T::sign_gamma)
    }

    #[inline]
    fn powi(x: Self, n: i64) -> Self {
        lanewise(x, |lane| T::powi(lane, n))
    }

    #[inline]
    fn root(x: Self, n: i64) -> Self {
        lanewise(x, |lane| T::root(lane, n))
    }

    #[inline]
    fn mul_add(x: Self, y: Self, z: Self) -> Self {
        lanewise3(x, y, z, T::mul_add)
    }
}

/// Copy a slice into a vector of width `N`
///
/// Fails with [`Error::LengthMismatch`] unless the slice has exactly `N`
/// elements.
pub fn vector_from_slice<T: Copy, const N: usize>(lanes: &[T]) -> Result<[T; N]> {
    <[T; N]>::try_from(lanes).map_err(|_| Error::size_mismatch(N, lanes.len(), "vector_from_slice"))
}

/// Splat one scalar across every lane
#[inline]
pub fn splat<T: Copy, const N: usize>(value: T) -> [T; N] {
    [value; N]
}
