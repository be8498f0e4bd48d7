//! Domain and edge-case policy of the scalar widths

mod common;

use common::{assert_relative_eq, assert_within_ulps};
use elementa_elementary::{functions as ef, ElementaryFunctions, FloatingPointSign};

#[test]
fn test_end_to_end_double_precision() {
    let x = 4.0f64;
    assert_eq!(ef::sqrt(x), 2.0);
    assert_eq!(ef::pow(x, 2.0), 16.0);
    assert!(ef::pow(-x, 2.0).is_nan());
    // the integer-exponent form accepts negative bases
    assert_eq!(ef::powi(-x, 2), 16.0);
}

#[test]
fn test_sqrt_policy() {
    for &x in &[-1.0f64, -f64::MIN_POSITIVE, f64::NEG_INFINITY] {
        assert!(ef::sqrt(x).is_nan(), "sqrt({x})");
    }
    assert_eq!(ef::sqrt(-0.0f64).to_bits(), (-0.0f64).to_bits());
    assert_eq!(ef::sqrt(f64::INFINITY), f64::INFINITY);
    assert!(ef::sqrt(-1.0f32).is_nan());
}

#[test]
fn test_inverse_trig_domain() {
    for &x in &[1.0000001f64, -1.5, 10.0] {
        assert!(ef::asin(x).is_nan(), "asin({x})");
        assert!(ef::acos(x).is_nan(), "acos({x})");
    }
    assert_relative_eq!(ef::asin(1.0f64), std::f64::consts::FRAC_PI_2);
    assert_relative_eq!(ef::acos(-1.0f64), std::f64::consts::PI);
    assert_relative_eq!(ef::atan(f64::INFINITY), std::f64::consts::FRAC_PI_2);
}

#[test]
fn test_atan2_quadrants() {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    assert_relative_eq!(ef::atan2(1.0f64, 1.0), FRAC_PI_4);
    assert_relative_eq!(ef::atan2(1.0f64, -1.0), 3.0 * FRAC_PI_4);
    assert_relative_eq!(ef::atan2(-1.0f64, -1.0), -3.0 * FRAC_PI_4);
    assert_relative_eq!(ef::atan2(1.0f64, 0.0), FRAC_PI_2);
    assert_eq!(ef::atan2(0.0f64, -1.0), PI);
    assert_eq!(ef::atan2(-0.0f64, -1.0), -PI);
}

#[test]
fn test_hyperbolic_domain() {
    assert!(ef::acosh(0.999f64).is_nan());
    assert_eq!(ef::acosh(1.0f64), 0.0);
    assert!(ef::atanh(1.5f64).is_nan());
    assert_eq!(ef::atanh(1.0f32), f32::INFINITY);
    assert_eq!(ef::atanh(-1.0f32), f32::NEG_INFINITY);
    assert_relative_eq!(ef::asinh(ef::sinh(0.75f64)), 0.75, epsilon = 1e-15);
}

#[test]
fn test_exponential_overflow() {
    assert_eq!(ef::exp(710.0f64), f64::INFINITY);
    assert_eq!(ef::exp2(1024.0f64), f64::INFINITY);
    assert_eq!(ef::exp10(309.0f64), f64::INFINITY);
    assert_eq!(ef::exp_m1(1000.0f64), f64::INFINITY);
    assert_eq!(ef::exp(89.0f32), f32::INFINITY);
    assert_eq!(ef::exp_m1(-1000.0f64), -1.0);
}

#[test]
fn test_log_family_domain() {
    assert_eq!(ef::log(0.0f64), f64::NEG_INFINITY);
    assert_eq!(ef::log2(0.0f64), f64::NEG_INFINITY);
    assert_eq!(ef::log10(-0.0f64), f64::NEG_INFINITY);
    assert!(ef::log(-2.0f64).is_nan());
    assert!(ef::log2(-2.0f32).is_nan());
    assert!(ef::log10(-2.0f64).is_nan());
    assert!(ef::log_1p(-1.5f64).is_nan());
    assert_eq!(ef::log_1p(-1.0f32), f32::NEG_INFINITY);
    // accurate near zero where ln(1 + x) would lose everything
    assert_relative_eq!(ef::log_1p(1e-18f64), 1e-18, max_relative = 1e-15);
    assert_relative_eq!(ef::exp_m1(1e-18f64), 1e-18, max_relative = 1e-15);
}

#[test]
fn test_error_functions() {
    assert_relative_eq!(ef::erf(1.0f64), 0.842_700_792_949_714_9, epsilon = 1e-15);
    assert_relative_eq!(ef::erf(-1.0f64), -0.842_700_792_949_714_9, epsilon = 1e-15);
    assert_relative_eq!(ef::erfc(3.0f64), 2.209_049_699_858_544e-5, max_relative = 1e-12);
    assert_eq!(ef::erf(f64::INFINITY), 1.0);
    assert_eq!(ef::erfc(f64::INFINITY), 0.0);
}

#[test]
fn test_hypot_avoids_overflow_and_underflow() {
    let big = 1e300f64;
    assert_relative_eq!(ef::hypot(big, big), big * std::f64::consts::SQRT_2, max_relative = 1e-15);
    let tiny = 1e-300f64;
    assert_relative_eq!(ef::hypot(tiny, tiny), tiny * std::f64::consts::SQRT_2, max_relative = 1e-15);
    // both inputs finite, the true result is past f32::MAX
    assert_eq!(ef::hypot(3e38f32, 3e38f32), f32::INFINITY);
    assert_eq!(ef::hypot(f32::MAX, f32::MAX), f32::INFINITY);
    assert_eq!(ef::hypot(f32::MAX, 1.0), f32::MAX);
    assert_relative_eq!(ef::hypot(3e37f32, 4e37f32), 5e37, max_relative = 1e-6);
}

#[test]
fn test_gamma_family() {
    assert_relative_eq!(ef::gamma(0.5f64), std::f64::consts::PI.sqrt(), max_relative = 1e-14);
    assert_relative_eq!(ef::gamma(-0.5f64), -2.0 * std::f64::consts::PI.sqrt(), max_relative = 1e-14);
    assert_eq!(ef::gamma(0.0f64), f64::INFINITY);
    assert_eq!(ef::gamma(-0.0f64), f64::NEG_INFINITY);
    assert!(!ef::gamma(-3.0f64).is_finite());
    assert_eq!(ef::gamma(200.0f64), f64::INFINITY);

    assert_relative_eq!(ef::log_gamma(200.0f64), 857.933_669_825_857_4, max_relative = 1e-14);
    assert_eq!(ef::log_gamma(0.0f64), f64::INFINITY);
    assert_eq!(ef::log_gamma(-1.0f32), f32::INFINITY);
    assert_relative_eq!(ef::log_gamma(-0.5f64), (2.0 * std::f64::consts::PI.sqrt()).ln(), max_relative = 1e-14);
}

#[test]
fn test_sign_gamma_agrees_with_gamma_off_the_poles() {
    for i in 1..200 {
        let x = -10.0 + i as f64 * 0.1 + 0.03;
        let sign = ef::sign_gamma(x);
        let gamma = ef::gamma(x);
        let expected = if gamma < 0.0 {
            FloatingPointSign::Minus
        } else {
            FloatingPointSign::Plus
        };
        assert_eq!(sign, expected, "sign_gamma({x}) with gamma = {gamma}");
    }
}

#[test]
fn test_pow_policy() {
    for &x in &[-0.5f64, -1.0, -4.0, f64::NEG_INFINITY] {
        for &y in &[0.0f64, 1.0, 2.0, 0.5, -3.0] {
            assert!(ef::pow(x, y).is_nan(), "pow({x}, {y})");
        }
    }
    assert_eq!(ef::pow(2.0f64, 10.0), 1024.0);
    assert_eq!(ef::pow(0.0f64, -1.0), f64::INFINITY);
    assert!(ef::pow(-8.0f32, 1.0 / 3.0).is_nan());
}

#[test]
fn test_powi_any_base() {
    assert_eq!(ef::powi(-3.0f64, 3), -27.0);
    assert_eq!(ef::powi(-3.0f64, 0), 1.0);
    assert_eq!(ef::powi(2.0f64, -2), 0.25);
    assert_eq!(ef::powi(-2.0f32, 5), -32.0);
    assert_eq!(ef::powi(0.0f64, -1), f64::INFINITY);
}

#[test]
fn test_powi_large_exponent_is_documented_imprecise() {
    // 2^53 + 1 rounds to 2^53 in f64, which flips the parity
    let n = (1i64 << 53) + 1;
    assert_eq!(ef::powi(-1.0f64, n), 1.0);
    assert_eq!(ef::powi(-1.0f64, n - 2), -1.0);
}

#[test]
fn test_root_policy() {
    for n in [2i64, 4, 6, 0, -2] {
        assert!(ef::root(-27.0f64, n).is_nan(), "root(-27, {n})");
    }
    for n in [1i64, 3, 5, -3] {
        let x = -27.0f64;
        assert_eq!(ef::root(x, n), -ef::pow(-x, 1.0 / n as f64), "root({x}, {n})");
    }
    assert_relative_eq!(ef::root(32.0f64, 5), 2.0, epsilon = 1e-15);
    assert_eq!(ef::root(-0.0f64, 3).to_bits(), (-0.0f64).to_bits());
    assert_eq!(ef::root(f64::NEG_INFINITY, 3), f64::NEG_INFINITY);
}

#[test]
fn test_cbrt_matches_odd_root() {
    for &x in &[-27.0f64, -2.0, 0.125, 1000.0] {
        assert_relative_eq!(ef::cbrt(x), ef::root(x, 3), max_relative = 1e-15);
    }
    assert_eq!(ef::cbrt(-8.0f64), -2.0);
}

#[test]
fn test_mul_add_is_fused() {
    // (1 + ε)(1 − ε) − 1 = −ε², lost entirely without fusion
    let e = f64::EPSILON;
    assert_eq!(ef::mul_add(1.0 + e, 1.0 - e, -1.0), -e * e);
}

#[test]
fn test_trig_identities() {
    for i in -20..=20 {
        let x = i as f64 * 0.31;
        let s = ef::sin(x);
        let c = ef::cos(x);
        assert_relative_eq!(s * s + c * c, 1.0, epsilon = 1e-15);
        if c.abs() > 1e-3 {
            assert_relative_eq!(ef::tan(x), s / c, max_relative = 1e-13);
        }
    }
}

#[test]
fn test_sqrt_squares_back_within_an_ulp() {
    for &x in &[2.0f64, 3.0, 0.1, 1e-300, 1e300, 12345.678, 1.999_999_999_999_999_8] {
        let r = ef::sqrt(x);
        assert_within_ulps(r * r, x, 1.0, "sqrt f64");
    }
}

#[test]
fn test_generic_algorithm_written_once() {
    fn relative_entropy<T: ElementaryFunctions + std::ops::Mul<Output = T> + std::ops::Div<Output = T>>(
        p: T,
        q: T,
    ) -> T {
        p * T::log(p / q)
    }

    assert_relative_eq!(relative_entropy(0.5f64, 0.25), 0.5 * 2.0f64.ln(), epsilon = 1e-15);
    assert_relative_eq!(relative_entropy(0.5f32, 0.25), 0.5 * 2.0f32.ln(), epsilon = 1e-6);
}
