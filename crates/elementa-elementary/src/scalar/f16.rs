//! Half precision (`half::f16`)
//!
//! No platform provides half-precision transcendental routines, so each
//! operation widens to `f32`, runs the single-precision implementation and
//! rounds once on the way back. Every f16 value is exact in f32, so for the
//! single-argument functions the only rounding is the final one.

use half::f16;

use crate::sign::{sign_of_gamma, FloatingPointSign};
use crate::traits::ElementaryFunctions;

macro_rules! via_f32 {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name(x: f16) -> f16 {
                f16::from_f32(<f32 as ElementaryFunctions>::$name(x.to_f32()))
            }
        )*
    };
}

impl ElementaryFunctions for f16 {
    type Sign = FloatingPointSign;

    via_f32!(
        sqrt, cbrt, sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh, exp,
        exp2, exp10, exp_m1, log, log2, log10, log_1p, erf, erfc, gamma, log_gamma,
    );

    #[inline]
    fn atan2(y: f16, x: f16) -> f16 {
        f16::from_f32(<f32 as ElementaryFunctions>::atan2(y.to_f32(), x.to_f32()))
    }

    #[inline]
    fn hypot(x: f16, y: f16) -> f16 {
        f16::from_f32(<f32 as ElementaryFunctions>::hypot(x.to_f32(), y.to_f32()))
    }

    #[inline]
    fn sign_gamma(x: f16) -> FloatingPointSign {
        sign_of_gamma(x)
    }

    #[inline]
    fn pow(x: f16, y: f16) -> f16 {
        f16::from_f32(<f32 as ElementaryFunctions>::pow(x.to_f32(), y.to_f32()))
    }

    #[inline]
    fn powi(x: f16, n: i64) -> f16 {
        // round n through f16 first so the exponent caveat matches the width
        let n = f16::from_f64(n as f64).to_f32();
        f16::from_f32(libm::powf(x.to_f32(), n))
    }

    #[inline]
    fn root(x: f16, n: i64) -> f16 {
        f16::from_f32(<f32 as ElementaryFunctions>::root(x.to_f32(), n))
    }

    #[inline]
    fn mul_add(x: f16, y: f16, z: f16) -> f16 {
        // the product is exact in f32; the sum rounds in f32 and again to f16
        f16::from_f32(x.to_f32().mul_add(y.to_f32(), z.to_f32()))
    }
}
