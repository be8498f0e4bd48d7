//! Sign of a floating-point quantity

use num_traits::Float;
use std::fmt;
use std::ops::Neg;

/// Sign of a floating-point value, or of a function evaluated at one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatingPointSign {
    Plus,
    Minus,
}

impl FloatingPointSign {
    /// Sign bit of `x` (`-0.0` and negative NaNs are `Minus`)
    #[inline]
    pub fn of<T: Float>(x: T) -> Self {
        if x.is_sign_negative() {
            Self::Minus
        } else {
            Self::Plus
        }
    }

    /// `1` for `Plus`, `-1` for `Minus`
    #[inline]
    pub fn as_factor<T: Float>(self) -> T {
        match self {
            Self::Plus => T::one(),
            Self::Minus => -T::one(),
        }
    }

    #[inline]
    pub fn is_minus(self) -> bool {
        self == Self::Minus
    }
}

impl Neg for FloatingPointSign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Plus => Self::Minus,
            Self::Minus => Self::Plus,
        }
    }
}

impl fmt::Display for FloatingPointSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
        }
    }
}

/// Sign of Γ(x)
///
/// Γ is negative exactly on (-2n-1, -2n) for nonnegative integers n and
/// positive elsewhere. The poles at nonpositive integers are assigned
/// `Plus`, as is NaN.
#[inline]
pub(crate) fn sign_of_gamma<T: Float>(x: T) -> FloatingPointSign {
    let trunc = x.trunc();
    if x >= T::zero() || trunc == x {
        return FloatingPointSign::Plus;
    }
    let half_trunc = trunc / (T::one() + T::one());
    if half_trunc == half_trunc.trunc() {
        return FloatingPointSign::Minus;
    }
    FloatingPointSign::Plus
}
