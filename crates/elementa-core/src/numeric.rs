//! Scalar width trait for fixed-width floating-point types
//!
//! This module provides the type foundation shared by the elementary
//! function capability and its tests: every floating-point width the
//! workspace supports implements [`Scalar`].
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: describes a width, computes nothing
//! - **No widening by accident**: conversions are explicit and named
//! - **Extensible**: a new width is one impl

use bytemuck::Pod;
use num_traits::Float;
use std::fmt::Debug;

/// A fixed-width IEEE-754 floating-point type
pub trait Scalar: Pod + Float + Debug + Send + Sync + 'static {
    /// Storage width in bits
    const BITS: u32;

    /// Short name of the width (`"f32"`, `"f64"`, ...)
    const NAME: &'static str;

    /// Number of significand bits, including the implicit bit
    const MANTISSA_DIGITS: u32;

    /// Convert from f64, rounding to nearest
    fn from_f64(val: f64) -> Self;

    /// Convert to f64 (exact for every width up to f64)
    fn to_f64(self) -> f64;

    /// Convert an integer, rounding to nearest when it is not representable
    ///
    /// Integers wider than the significand round here. `powi` and `root`
    /// inherit that rounding and it is deliberately left visible.
    fn from_i64(n: i64) -> Self;

    /// Distance from `|self|` to the next representable value away from zero
    ///
    /// NaN for NaN input, infinity for infinite input.
    fn ulp(self) -> Self;
}

macro_rules! impl_scalar {
    ($t:ty, $bits:literal, $name:literal) => {
        impl Scalar for $t {
            const BITS: u32 = $bits;
            const NAME: &'static str = $name;
            const MANTISSA_DIGITS: u32 = <$t>::MANTISSA_DIGITS;

            #[inline]
            fn from_f64(val: f64) -> Self {
                val as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_i64(n: i64) -> Self {
                n as $t
            }

            fn ulp(self) -> Self {
                let magnitude = self.abs();
                if !magnitude.is_finite() {
                    return magnitude;
                }
                if magnitude == <$t>::MAX {
                    return magnitude - <$t>::from_bits(magnitude.to_bits() - 1);
                }
                <$t>::from_bits(magnitude.to_bits() + 1) - magnitude
            }
        }
    };
}

impl_scalar!(f32, 32, "f32");
impl_scalar!(f64, 64, "f64");

#[cfg(feature = "f16")]
impl Scalar for half::f16 {
    const BITS: u32 = 16;
    const NAME: &'static str = "f16";
    const MANTISSA_DIGITS: u32 = half::f16::MANTISSA_DIGITS;

    #[inline]
    fn from_f64(val: f64) -> Self {
        half::f16::from_f64(val)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        half::f16::to_f64(self)
    }

    #[inline]
    fn from_i64(n: i64) -> Self {
        half::f16::from_f64(n as f64)
    }

    fn ulp(self) -> Self {
        let magnitude = Float::abs(self);
        if !Float::is_finite(magnitude) {
            return magnitude;
        }
        if magnitude == half::f16::MAX {
            return magnitude - half::f16::from_bits(magnitude.to_bits() - 1);
        }
        half::f16::from_bits(magnitude.to_bits() + 1) - magnitude
    }
}
