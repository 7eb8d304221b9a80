//! Extremal scans over raw `f64` slices.
//!
//! ┌ [`abs_min`]      : smallest magnitude
//! ├ [`min_positive`] : smallest value `> 0`
//! ├ [`max_positive`] : largest value  `> 0`
//! ├ [`min_negative`] : smallest value `< 0` (most negative)
//! └ [`max_negative`] : largest value  `< 0` (closest to zero)
//!
//! Signed scans only ever return a value of the requested sign. A slice
//! with no such value yields [`ScanError::NoSuchSign`] rather than a
//! seed of the wrong sign.

use super::errors::ScanError;
use super::signs::Sign;


/// Minimum of `|v|` over `values`.
///
/// # Errors
/// - [`ScanError::EmptyInput`] if `values` is empty.
pub fn abs_min(values: &[f64]) -> Result<f64, ScanError> {
    let (first, rest) = values.split_first().ok_or(ScanError::EmptyInput)?;
    Ok(rest.iter().fold(first.abs(), |minimum, v| minimum.min(v.abs())))
}


/// Folds `pick` over the values strictly of `sign`.
#[inline]
fn signed_extremum(
    values: &[f64],
    sign: Sign,
    pick: fn(f64, f64) -> f64,
) -> Result<f64, ScanError> {
    if values.is_empty() {
        return Err(ScanError::EmptyInput);
    }
    values
        .iter()
        .copied()
        .filter(|&v| sign.holds(v))
        .reduce(pick)
        .ok_or(ScanError::NoSuchSign { sign })
}

/// Smallest strictly positive value.
///
/// # Errors
/// - [`ScanError::EmptyInput`]  if `values` is empty.
/// - [`ScanError::NoSuchSign`]  if no value is `> 0`.
pub fn min_positive(values: &[f64]) -> Result<f64, ScanError> {
    signed_extremum(values, Sign::Positive, f64::min)
}

/// Largest strictly positive value. Errors as [`min_positive`].
pub fn max_positive(values: &[f64]) -> Result<f64, ScanError> {
    signed_extremum(values, Sign::Positive, f64::max)
}

/// Most negative value.
///
/// # Errors
/// - [`ScanError::EmptyInput`]  if `values` is empty.
/// - [`ScanError::NoSuchSign`]  if no value is `< 0`.
pub fn min_negative(values: &[f64]) -> Result<f64, ScanError> {
    signed_extremum(values, Sign::Negative, f64::min)
}

/// Negative value closest to zero. Errors as [`min_negative`].
pub fn max_negative(values: &[f64]) -> Result<f64, ScanError> {
    signed_extremum(values, Sign::Negative, f64::max)
}
