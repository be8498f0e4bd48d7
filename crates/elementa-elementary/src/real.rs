//! Scalar generic code against the capability
//!
//! [`Real`] bundles a float width ([`Scalar`]) with the elementary function
//! capability. Everything below is written once and monomorphised per width.
//!
//! Both `num_traits::Float` and [`ElementaryFunctions`] declare `exp`, `sqrt`
//! and friends, so inside generic code the capability is reached through
//! [`crate::functions`] rather than `T::exp`.

use elementa_core::Scalar;

use crate::functions as ef;
use crate::sign::FloatingPointSign;
use crate::traits::ElementaryFunctions;

/// A scalar float width with elementary functions
pub trait Real: Scalar + ElementaryFunctions<Sign = FloatingPointSign> {}

impl<T> Real for T where T: Scalar + ElementaryFunctions<Sign = FloatingPointSign> {}

/// Logistic function 1 / (1 + e<sup>−x</sup>)
///
/// Never overflows: negative inputs use the e<sup>x</sup> / (1 + e<sup>x</sup>) form.
pub fn sigmoid<T: Real>(x: T) -> T {
    if x >= T::zero() {
        T::one() / (T::one() + ef::exp(-x))
    } else {
        let e = ef::exp(x);
        e / (T::one() + e)
    }
}

/// ln(1 + e<sup>x</sup>), finite for every finite input
pub fn softplus<T: Real>(x: T) -> T {
    x.max(T::zero()) + ef::log_1p(ef::exp(-x.abs()))
}

/// ln Σ e<sup>x<sub>i</sub></sup> without overflow
///
/// `−∞` for an empty slice (the log of an empty sum).
pub fn log_sum_exp<T: Real>(values: &[T]) -> T {
    let max = values
        .iter()
        .copied()
        .fold(T::neg_infinity(), |acc, v| acc.max(v));
    if max.is_infinite() {
        return max;
    }
    let sum = values
        .iter()
        .fold(T::zero(), |acc, &v| acc + ef::exp(v - max));
    max + ef::log(sum)
}

/// Γ(x) rebuilt from its sign and ln |Γ(x)|
///
/// Agrees with `gamma` wherever both are finite, which makes it a direct
/// check of `sign_gamma` against the platform gamma routine.
pub fn gamma_from_log<T: Real>(x: T) -> T {
    let magnitude = ef::exp(ef::log_gamma(x));
    ef::sign_gamma(x).as_factor::<T>() * magnitude
}
