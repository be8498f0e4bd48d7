//! The elementary function capability
//!
//! [`ElementaryFunctions`] is implemented once per concrete float width and
//! once, generically, for fixed-size arrays of any conforming type. Generic
//! code bounds on the trait and calls `T::exp(x)`; every call site is
//! monomorphised, so no width is chosen at runtime.
//!
//! # Domain policy
//!
//! No operation panics or returns an error. Inputs outside an operation's
//! real domain produce NaN, and poles produce a signed infinity, exactly as
//! IEEE-754 hardware does.
//!
//! | Operation | Outside the domain |
//! |-----------|--------------------|
//! | `sqrt` | x < 0 → NaN |
//! | `asin`, `acos` | \|x\| > 1 → NaN |
//! | `acosh` | x < 1 → NaN |
//! | `atanh` | \|x\| > 1 → NaN, x = ±1 → ±∞ |
//! | `log`, `log2`, `log10` | x < 0 → NaN, x = 0 → −∞ |
//! | `log_1p` | x < −1 → NaN, x = −1 → −∞ |
//! | `gamma` | poles → ±∞ or NaN as the platform routine reports |
//! | `log_gamma` | poles → +∞ |
//! | `pow` | x < 0 → NaN, whatever y is |
//! | `root` | x < 0 with even n → NaN |

/// Elementary functions over a fixed-width floating-point type
///
/// All functions are associated functions rather than methods so that the
/// capability reads the same for scalars and vectors and so that calls are
/// never confused with inherent float methods of the same name.
pub trait ElementaryFunctions: Copy + Sized {
    /// Result type of [`sign_gamma`](Self::sign_gamma)
    ///
    /// [`FloatingPointSign`](crate::FloatingPointSign) for scalars, one sign
    /// per lane for vectors.
    type Sign: Copy;

    /// Square root. NaN for negative input.
    fn sqrt(x: Self) -> Self;

    /// Cube root. Defined for every real input.
    fn cbrt(x: Self) -> Self;

    /// Sine of `x` radians.
    fn sin(x: Self) -> Self;

    /// Cosine of `x` radians.
    fn cos(x: Self) -> Self;

    /// Tangent of `x` radians.
    fn tan(x: Self) -> Self;

    /// Arcsine. NaN when `|x| > 1`.
    fn asin(x: Self) -> Self;

    /// Arccosine. NaN when `|x| > 1`.
    fn acos(x: Self) -> Self;

    /// Arctangent, in `[-π/2, π/2]`.
    fn atan(x: Self) -> Self;

    /// Angle of the point `(x, y)` from the positive x axis, in `[-π, π]`.
    fn atan2(y: Self, x: Self) -> Self;

    fn sinh(x: Self) -> Self;
    fn cosh(x: Self) -> Self;
    fn tanh(x: Self) -> Self;
    fn asinh(x: Self) -> Self;

    /// Inverse hyperbolic cosine. NaN when `x < 1`.
    fn acosh(x: Self) -> Self;

    /// Inverse hyperbolic tangent. NaN when `|x| > 1`, `±∞` at `±1`.
    fn atanh(x: Self) -> Self;

    /// e<sup>x</sup>. Overflows to `+∞`.
    fn exp(x: Self) -> Self;

    /// 2<sup>x</sup>.
    fn exp2(x: Self) -> Self;

    /// 10<sup>x</sup>.
    fn exp10(x: Self) -> Self;

    /// e<sup>x</sup> − 1, accurate near zero.
    fn exp_m1(x: Self) -> Self;

    /// Natural logarithm. NaN for negative input, `−∞` at zero.
    fn log(x: Self) -> Self;

    fn log2(x: Self) -> Self;
    fn log10(x: Self) -> Self;

    /// ln(1 + x), accurate near zero. NaN when `x < −1`.
    fn log_1p(x: Self) -> Self;

    /// Error function.
    fn erf(x: Self) -> Self;

    /// Complementary error function, 1 − erf(x).
    fn erfc(x: Self) -> Self;

    /// √(x² + y²) without intermediate overflow or underflow.
    fn hypot(x: Self, y: Self) -> Self;

    /// Γ(x).
    fn gamma(x: Self) -> Self;

    /// ln |Γ(x)|. `+∞` at the poles.
    fn log_gamma(x: Self) -> Self;

    /// Sign of Γ(x). Poles are assigned the positive sign.
    fn sign_gamma(x: Self) -> Self::Sign;

    /// x<sup>y</sup> for nonnegative `x`. NaN for every negative `x`, even
    /// when `y` happens to be an integer; use [`powi`](Self::powi) for
    /// integer exponents of negative bases.
    fn pow(x: Self, y: Self) -> Self;

    /// x<sup>n</sup> for any `x`.
    ///
    /// Computed as `pow(x, n)` after converting `n` to the float width. When
    /// `|n|` exceeds the width's significand the conversion rounds and the
    /// result is that of the rounded exponent, including its parity. This is
    /// a known precision limit and is kept as is.
    fn powi(x: Self, n: i64) -> Self;

    /// n-th root of `x`.
    ///
    /// NaN when `x < 0` and `n` is even; otherwise `sign(x) · |x|^(1/n)`.
    /// Shares the rounding caveat of [`powi`](Self::powi) for huge `n`.
    fn root(x: Self, n: i64) -> Self;

    /// `x · y + z` with a single rounding.
    fn mul_add(x: Self, y: Self, z: Self) -> Self;
}
