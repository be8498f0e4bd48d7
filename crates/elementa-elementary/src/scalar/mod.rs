//! Per-width implementations of the elementary function capability
//!
//! One file per float width. Each width calls only routines of its own
//! precision: intrinsics through the inherent float methods, the rest through
//! the width-suffixed `libm` entry points named in its invocation of
//! `impl_elementary!`.

/// Implement the capability for a native float width
///
/// The intrinsic-backed operations are fixed; every other operation maps to
/// the named `libm` routine. `pow` also backs `powi` and `root`.
macro_rules! impl_elementary {
    (
        $t:ident,
        unary: { $($op:ident => $routine:ident),* $(,)? },
        binary: { $($op2:ident => $routine2:ident),* $(,)? },
        pow: $pow:ident $(,)?
    ) => {
        impl $crate::traits::ElementaryFunctions for $t {
            type Sign = $crate::sign::FloatingPointSign;

            #[inline]
            fn sqrt(x: $t) -> $t {
                x.sqrt()
            }

            #[inline]
            fn sin(x: $t) -> $t {
                x.sin()
            }

            #[inline]
            fn cos(x: $t) -> $t {
                x.cos()
            }

            #[inline]
            fn exp(x: $t) -> $t {
                x.exp()
            }

            #[inline]
            fn exp2(x: $t) -> $t {
                x.exp2()
            }

            #[inline]
            fn log(x: $t) -> $t {
                x.ln()
            }

            #[inline]
            fn log2(x: $t) -> $t {
                x.log2()
            }

            #[inline]
            fn log10(x: $t) -> $t {
                x.log10()
            }

            $(
                #[inline]
                fn $op(x: $t) -> $t {
                    libm::$routine(x)
                }
            )*

            $(
                #[inline]
                fn $op2(a: $t, b: $t) -> $t {
                    libm::$routine2(a, b)
                }
            )*

            #[inline]
            fn sign_gamma(x: $t) -> $crate::sign::FloatingPointSign {
                $crate::sign::sign_of_gamma(x)
            }

            #[inline]
            fn pow(x: $t, y: $t) -> $t {
                // NaN bases fall through here too, so pow(NaN, 0) is NaN rather than 1
                if !(x >= 0.0) {
                    return <$t>::NAN;
                }
                libm::$pow(x, y)
            }

            #[inline]
            fn powi(x: $t, n: i64) -> $t {
                libm::$pow(x, n as $t)
            }

            #[inline]
            fn root(x: $t, n: i64) -> $t {
                if !(x >= 0.0 || n % 2 != 0) {
                    return <$t>::NAN;
                }
                libm::$pow(x.abs(), 1.0 / n as $t).copysign(x)
            }

            #[inline]
            fn mul_add(x: $t, y: $t, z: $t) -> $t {
                x.mul_add(y, z)
            }
        }
    };
}

mod f32;
mod f64;

#[cfg(feature = "f16")]
mod f16;
