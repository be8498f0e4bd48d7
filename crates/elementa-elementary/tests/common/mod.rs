//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

/// Vector widths that must lift exactly
pub const WIDTHS: [usize; 7] = [2, 3, 4, 8, 16, 32, 64];

/// Special floating-point values for edge case testing
pub fn special_values() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        0.5,
        -0.5,
        2.0,
        -2.0,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        f64::EPSILON,
        std::f64::consts::PI,
        std::f64::consts::E,
        1e-308, // Near underflow
        1e308,  // Near overflow
        f64::MAX,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
    ]
}

/// Lane values for a vector of width `n`, cycling through the special values
pub fn lanes(n: usize) -> Vec<f64> {
    let specials = special_values();
    (0..n)
        .map(|i| {
            if i < specials.len() {
                specials[i]
            } else {
                (i as f64 * 0.37).sin() * 3.0
            }
        })
        .collect()
}

/// Bitwise equality that treats every NaN as equal to every NaN
pub fn same_f64(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

pub fn same_f32(a: f32, b: f32) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

/// Assert `a` is within `ulps` units in the last place of `b` (f64)
pub fn assert_within_ulps(a: f64, b: f64, ulps: f64, context: &str) {
    use elementa_core::Scalar;
    let tolerance = ulps * b.ulp();
    assert!(
        (a - b).abs() <= tolerance,
        "{context}: {a} vs {b} differs by more than {ulps} ulp"
    );
}
