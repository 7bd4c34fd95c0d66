//! Epsilon-tolerant numeric predicates.
//!
//! Sass numbers are compared with a fixed tolerance rather than exact
//! floating-point equality, so that values which drift apart by
//! representation error (`0.1 + 0.2` vs `0.3`) still behave as equal in the
//! value model. The tolerance is derived from the language's decimal
//! precision of 10 digits and is not configurable.
//!
//! Everything here operates on raw `f64` scalars; unit handling lives in
//! [`crate::number`].

use crate::error::UnitError;

/// The number of decimal digits of precision Sass numbers carry.
pub const PRECISION: u32 = 10;

/// The comparison tolerance: 10^-(PRECISION + 1).
pub const EPSILON: f64 = 1e-11;

const INVERSE_EPSILON: f64 = 1e11;

/// Returns whether `a` and `b` are equal within [`EPSILON`].
pub fn equals(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns whether `a` is strictly less than `b`, treating values within
/// [`EPSILON`] as equal.
pub fn less_than(a: f64, b: f64) -> bool {
    a < b && !equals(a, b)
}

/// Returns whether `a` is less than or fuzzily equal to `b`.
pub fn less_than_or_equals(a: f64, b: f64) -> bool {
    a < b || equals(a, b)
}

/// Returns whether `number` is an integer within [`EPSILON`].
///
/// Non-finite values are never integers.
pub fn is_integer(number: f64) -> bool {
    number.is_finite() && equals(number, number.round())
}

/// Converts `number` to an integer if it fuzzily is one.
///
/// Returns `None` for non-integral values and for integral values outside
/// the `i64` range.
pub fn to_i(number: f64) -> Option<i64> {
    if !is_integer(number) {
        return None;
    }
    let rounded = number.round();
    if rounded >= i64::MAX as f64 || rounded <= i64::MIN as f64 {
        return None;
    }
    Some(rounded as i64)
}

/// Rounds `number` to the nearest integer, rounding values within
/// [`EPSILON`] of a half away from zero.
pub fn round(number: f64) -> f64 {
    let rem = number.rem_euclid(1.0);
    if number > 0.0 {
        if less_than(rem, 0.5) {
            number.floor()
        } else {
            number.ceil()
        }
    } else if less_than_or_equals(rem, 0.5) {
        number.floor()
    } else {
        number.ceil()
    }
}

/// Clamps `number` into `[min, max]` with fuzzy bounds.
///
/// Returns `min` or `max` when `number` is within [`EPSILON`] of that bound,
/// `number` itself when strictly inside the range, and `None` otherwise.
pub fn between(number: f64, min: f64, max: f64) -> Option<f64> {
    if equals(number, min) {
        return Some(min);
    }
    if equals(number, max) {
        return Some(max);
    }
    if number > min && number < max {
        return Some(number);
    }
    None
}

/// Like [`between`], but raises a [`UnitError`] attributed to `name` when
/// `number` falls outside the range.
pub fn assert_between(
    number: f64,
    min: f64,
    max: f64,
    name: Option<&str>,
) -> Result<f64, UnitError> {
    between(number, min, max)
        .ok_or_else(|| UnitError::new(format!("{number} must be between {min} and {max}"), name))
}

/// Hashes `number` into the cell of the epsilon grid it rounds to.
///
/// Values reported equal by [`equals`] hash identically as long as they
/// round to the same cell, which keeps hash-based containers consistent
/// with fuzzy equality.
pub fn hash(number: f64) -> i64 {
    (number * INVERSE_EPSILON).round() as i64
}

/// Formats a scalar the way Sass presents numbers: integral values without
/// a fractional part, everything else with at most [`PRECISION`] fractional
/// digits, trailing zeros trimmed.
pub(crate) fn format_scalar(value: f64) -> String {
    if let Some(int) = to_i(value) {
        return int.to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{value:.prec$}", prec = PRECISION as usize);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
