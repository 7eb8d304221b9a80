//! ULP-based floating-point equality.
//!
//! Two values are compared by counting representable steps rather than by a
//! fixed epsilon, so the acceptance band scales with the magnitude of the
//! reference value.
//!
//! `nearly_equal(a, b)`              : `b` within one step of `a`
//! `nearly_equal_within(a, b, k)`    : `b` within `k` steps of `a`
//!
//! The band is asymmetric: the lower edge uses the gap from `a` down to its
//! predecessor, the upper edge the gap up to its successor. At powers of two
//! these gaps differ by a factor of two.


/// Default tolerance factor for deciding that an imaginary part is zero.
pub const DEFAULT_IMAG_TOL_FACTOR: u32 = 10;


/// ULP helpers. Step toward `+inf` / `-inf` by one representable value.
#[inline]
pub(crate) fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY { return x; }
    // smallest positive subnormal
    if x == 0.0 { return f64::from_bits(1); }

    let bits   = x.to_bits();
    let bumped = if x > 0.0 { bits + 1 } else { bits - 1 };
    f64::from_bits(bumped)
}
#[inline]
pub(crate) fn next_down(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY { return x; }
    // largest negative subnormal
    if x == 0.0 { return -f64::from_bits(1); }

    let bits   = x.to_bits();
    let bumped = if x > 0.0 { bits - 1 } else { bits + 1 };
    f64::from_bits(bumped)
}


/// Returns `true` if `b` lies within one representable step of `a`.
///
/// Equivalent to [`nearly_equal_within`] with a factor of `1`.
#[inline]
pub fn nearly_equal(a: f64, b: f64) -> bool {
    next_down(a) <= b && next_up(a) >= b
}


/// Returns `true` if `b` lies within `factor` representable steps of `a`.
///
/// `a - (a - next_down(a)) * factor <= b <= a + (next_up(a) - a) * factor`
///
/// # Notes
/// - `a == b` is always accepted, for any `factor` (this covers infinities).
/// - A non-finite `a` accepts nothing but itself; NaN accepts nothing.
/// - The band is monotone in `factor`: every `b` accepted for `k` is
///   accepted for any larger `k`.
pub fn nearly_equal_within(a: f64, b: f64, factor: u32) -> bool {
    if a == b {
        return true;
    }

    let k     = f64::from(factor);
    let min_a = a - (a - next_down(a)) * k;
    let max_a = a + (next_up(a) - a) * k;

    min_a <= b && max_a >= b
}
