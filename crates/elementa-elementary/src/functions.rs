//! Free-function spelling of the capability
//!
//! `functions::exp(x)` is `T::exp(x)` with `T` inferred from the argument.
//! It works the same for scalars and vectors and sidesteps inherent float
//! methods of the same name (`f64::log` takes a base, `f64::powi` takes an
//! `i32`), which otherwise win path resolution on concrete types.
//!
//! ```rust
//! use elementa_elementary::functions::{pow, root, sqrt};
//!
//! assert_eq!(sqrt(4.0f64), 2.0);
//! assert_eq!(pow(4.0f64, 2.0), 16.0);
//! assert!(pow(-4.0f64, 2.0).is_nan());
//! assert!(root(-16.0f32, 2).is_nan());
//! ```

use crate::traits::ElementaryFunctions;

macro_rules! forward_unary {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name<T: ElementaryFunctions>(x: T) -> T {
                T::$name(x)
            }
        )*
    };
}

forward_unary!(
    sqrt, cbrt, sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh, exp, exp2,
    exp10, exp_m1, log, log2, log10, log_1p, erf, erfc, gamma, log_gamma,
);

#[inline]
pub fn atan2<T: ElementaryFunctions>(y: T, x: T) -> T {
    T::atan2(y, x)
}

#[inline]
pub fn hypot<T: ElementaryFunctions>(x: T, y: T) -> T {
    T::hypot(x, y)
}

#[inline]
pub fn sign_gamma<T: ElementaryFunctions>(x: T) -> T::Sign {
    T::sign_gamma(x)
}

#[inline]
pub fn pow<T: ElementaryFunctions>(x: T, y: T) -> T {
    T::pow(x, y)
}

#[inline]
pub fn powi<T: ElementaryFunctions>(x: T, n: i64) -> T {
    T::powi(x, n)
}

#[inline]
pub fn root<T: ElementaryFunctions>(x: T, n: i64) -> T {
    T::root(x, n)
}

#[inline]
pub fn mul_add<T: ElementaryFunctions>(x: T, y: T, z: T) -> T {
    T::mul_add(x, y, z)
}
