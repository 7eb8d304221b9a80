//! tests for ULP-based equality
use polyroots::roots::tolerances::{nearly_equal, nearly_equal_within, DEFAULT_IMAG_TOL_FACTOR};

/// `x` moved by `n` representable steps (positive `x` only).
fn steps(x: f64, n: i64) -> f64 {
    f64::from_bits((x.to_bits() as i64 + n) as u64)
}

#[test]
fn equal_values_are_nearly_equal() {
    for a in [0.0, -0.0, 1.0, -3.5, 1e-310, 1e300, f64::MAX, f64::INFINITY] {
        assert!(nearly_equal(a, a));
        assert!(nearly_equal_within(a, a, 0));
        assert!(nearly_equal_within(a, a, 1_000_000));
    }
}

#[test]
fn one_step_either_side() {
    let a = 1.5;
    assert!(nearly_equal(a, steps(a, 1)));
    assert!(nearly_equal(a, steps(a, -1)));
    assert!(!nearly_equal(a, steps(a, 2)));
    assert!(!nearly_equal(a, steps(a, -2)));
}

#[test]
fn factor_counts_steps() {
    let a = 1234.5678;
    assert!(nearly_equal_within(a, steps(a, 10), 10));
    assert!(nearly_equal_within(a, steps(a, -10), 10));
    assert!(!nearly_equal_within(a, steps(a, 11), 10));
    assert!(!nearly_equal_within(a, steps(a, -11), 10));
}

#[test]
fn factor_zero_is_exact_equality() {
    let a = 2.75;
    assert!(nearly_equal_within(a, a, 0));
    assert!(!nearly_equal_within(a, steps(a, 1), 0));
    assert!(!nearly_equal_within(a, steps(a, -1), 0));
}

#[test]
fn band_is_asymmetric_at_power_of_two() {
    // below 1.0 the spacing is eps/2, above it is eps
    let below = f64::EPSILON / 2.0;
    let above = f64::EPSILON;

    assert!(nearly_equal_within(1.0, 1.0 - 10.0 * below, 10));
    assert!(!nearly_equal_within(1.0, 1.0 - 11.0 * below, 10));
    assert!(nearly_equal_within(1.0, 1.0 + 10.0 * above, 10));
    assert!(!nearly_equal_within(1.0, 1.0 + 11.0 * above, 10));
}

#[test]
fn band_scales_with_magnitude() {
    let big = 1e300;
    assert!(nearly_equal_within(big, steps(big, 5), 5));
    assert!(!nearly_equal(big, big * (1.0 + 1e-12)));

    let tiny = 1e-300;
    assert!(nearly_equal_within(tiny, steps(tiny, 5), 5));
    assert!(!nearly_equal_within(tiny, 0.0, 1_000_000));
}

#[test]
fn zero_band_is_subnormal() {
    let factor = DEFAULT_IMAG_TOL_FACTOR;
    assert!(nearly_equal_within(0.0, f64::from_bits(10), factor));
    assert!(nearly_equal_within(0.0, -f64::from_bits(10), factor));
    assert!(!nearly_equal_within(0.0, f64::from_bits(11), factor));
    assert!(!nearly_equal_within(0.0, f64::MIN_POSITIVE, factor));
    assert!(nearly_equal_within(f64::from_bits(3), 0.0, factor));
}

#[test]
fn non_finite_reference() {
    assert!(!nearly_equal_within(f64::INFINITY, f64::MAX, 3));
    assert!(!nearly_equal_within(f64::NEG_INFINITY, f64::MIN, 3));
    assert!(!nearly_equal_within(f64::NAN, f64::NAN, 3));
    assert!(!nearly_equal(f64::NAN, 0.0));
    assert!(!nearly_equal_within(1.0, f64::NAN, 3));
}

#[test]
fn max_value_with_zero_factor() {
    assert!(nearly_equal_within(f64::MAX, f64::MAX, 0));
    assert!(!nearly_equal_within(f64::MAX, f64::INFINITY, 0));
    assert!(nearly_equal_within(f64::MAX, steps(f64::MAX, -1), 1));
}
