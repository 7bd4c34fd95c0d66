//! # Sass Number Value
//!
//! This module implements the Sass number type: an `f64` scalar tagged with
//! a ratio of unit symbols (numerator units over denominator units), so
//! `96px/s` is the value `96` with numerator `px` and denominator `s`.
//!
//! ## Unit Semantics
//!
//! - **Construction cancels units.** Building a number whose numerator and
//!   denominator carry convertible units multiplies the cancellation factor
//!   into the value and drops both symbols, so `1in/px` becomes the unitless
//!   `96`. Matching is positional and first-match: each denominator unit
//!   consumes the first convertible numerator unit, in input order. This is
//!   the behavior the language specifies; it is deliberately not a globally
//!   optimal pairing.
//! - **Conversion is strict.** `convert` and friends fail whenever the
//!   source has units the target doesn't account for, or vice versa. In
//!   particular a unitless number never converts to a united one.
//! - **Coercion is permissive.** `coerce` and friends treat unitless values
//!   as compatible with any unit signature and pass them through unchanged.
//!
//! ## Equality and Hashing
//!
//! Numbers compare by canonical magnitude: unit lists are canonicalized
//! (order-independent, conversion-aware), and the scalars are scaled by
//! their canonical multipliers before an epsilon-tolerant comparison, so
//! `1in == 96px` and `1s == 1000ms`. Hashing uses the same scaled magnitude,
//! keeping equal numbers in the same hash bucket. The hash is memoized on
//! first use.
//!
//! ## Examples
//!
//! ```rust
//! use sass_number::Number;
//!
//! let duration = Number::with_unit(1000.0, "ms");
//! let seconds = duration.convert(&["s"], &[], None).unwrap();
//! assert_eq!(seconds.value(), 1.0);
//! assert_eq!(seconds.to_string(), "1s");
//!
//! // Unitless values coerce freely...
//! let pixels = Number::new(5.0).coerce(&["px"], &[], None).unwrap();
//! assert_eq!(pixels.to_string(), "5px");
//!
//! // ...but never convert.
//! assert!(Number::new(5.0).convert(&["px"], &[], None).is_err());
//!
//! // Equality folds unit scaling into a single comparable magnitude.
//! assert_eq!(Number::with_unit(1.0, "in"), Number::with_unit(96.0, "px"));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use itertools::Itertools;
use log::warn;

use crate::error::UnitError;
use crate::fuzzy;
use crate::unit;

/// A Sass number: an immutable scalar with numerator and denominator units.
///
/// Unit-list order is not significant for equality, but it is significant
/// for display and for the positional first-match pairing used during
/// construction and conversion. All transforming operations return a new
/// `Number`; instances are never mutated.
#[derive(Debug, Clone)]
pub struct Number {
    value: f64,
    numerator_units: Vec<String>,
    denominator_units: Vec<String>,
    hash: OnceLock<i64>,
}

impl Number {
    /// Creates a unitless number.
    pub fn new(value: f64) -> Self {
        Self::with_units(value, Vec::<String>::new(), Vec::<String>::new())
    }

    /// Creates a number with a single numerator unit.
    pub fn with_unit(value: f64, unit: impl Into<String>) -> Self {
        Self::with_units(value, vec![unit.into()], Vec::<String>::new())
    }

    /// Creates a number with the given numerator and denominator units,
    /// cancelling convertible pairs.
    ///
    /// Each denominator unit consumes the first numerator unit convertible
    /// to it, multiplying the conversion factor into the value; denominator
    /// units with no convertible counterpart are retained. With duplicate
    /// same-category units the outcome depends on input order: first match
    /// wins, exactly as the language specifies.
    ///
    /// ```rust
    /// use sass_number::Number;
    ///
    /// let ratio = Number::with_units(1.0, ["in"], ["px"]);
    /// assert!(ratio.is_unitless());
    /// assert_eq!(ratio.value(), 96.0);
    /// ```
    pub fn with_units<N, D>(value: f64, numerator_units: N, denominator_units: D) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let mut value = value;
        let mut numerator_units: Vec<String> =
            numerator_units.into_iter().map(Into::into).collect();
        let denominator_units: Vec<String> =
            denominator_units.into_iter().map(Into::into).collect();

        if !value.is_finite() {
            warn!("constructing a Sass number from a non-finite value: {value}");
        }

        let denominator_units = if numerator_units.is_empty() || denominator_units.is_empty() {
            denominator_units
        } else {
            let mut retained = Vec::with_capacity(denominator_units.len());
            for denominator_unit in denominator_units {
                let matched = numerator_units.iter().enumerate().find_map(
                    |(index, numerator_unit)| {
                        unit::conversion_factor(&denominator_unit, numerator_unit)
                            .map(|factor| (index, factor))
                    },
                );
                match matched {
                    Some((index, factor)) => {
                        value *= factor;
                        numerator_units.remove(index);
                    }
                    None => retained.push(denominator_unit),
                }
            }
            retained
        };

        Self {
            value,
            numerator_units,
            denominator_units,
            hash: OnceLock::new(),
        }
    }

    /// The scalar value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The numerator unit symbols, in display order.
    pub fn numerator_units(&self) -> &[String] {
        &self.numerator_units
    }

    /// The denominator unit symbols, in display order.
    pub fn denominator_units(&self) -> &[String] {
        &self.denominator_units
    }

    /// Returns whether this number has no units at all.
    pub fn is_unitless(&self) -> bool {
        self.numerator_units.is_empty() && self.denominator_units.is_empty()
    }

    /// Returns whether this number has any units.
    pub fn has_units(&self) -> bool {
        !self.is_unitless()
    }

    fn is_single_unit(&self) -> bool {
        self.numerator_units.len() == 1 && self.denominator_units.is_empty()
    }

    /// Returns whether this number has `unit` as its only unit.
    ///
    /// This is an exact string match, not a convertibility check:
    /// `96px` has unit `"px"` but not unit `"in"`.
    pub fn has_unit(&self, unit: &str) -> bool {
        self.is_single_unit() && self.numerator_units[0] == unit
    }

    /// Returns whether this number has a single unit convertible to `unit`.
    pub fn compatible_with_unit(&self, unit: &str) -> bool {
        self.is_single_unit()
            && unit::conversion_factor(&self.numerator_units[0], unit).is_some()
    }

    /// Returns whether the value is an integer within the fuzzy tolerance.
    pub fn is_integer(&self) -> bool {
        fuzzy::is_integer(self.value)
    }

    /// The value as an integer, if it fuzzily is one.
    pub fn to_i(&self) -> Option<i64> {
        fuzzy::to_i(self.value)
    }

    /// Asserts that this number has no units.
    pub fn assert_unitless(&self, name: Option<&str>) -> Result<(), UnitError> {
        if self.is_unitless() {
            Ok(())
        } else {
            Err(UnitError::new(
                format!("Expected {self} to have no units"),
                name,
            ))
        }
    }

    /// Asserts that this number has `unit` as its only unit.
    pub fn assert_unit(&self, unit: &str, name: Option<&str>) -> Result<(), UnitError> {
        if self.has_unit(unit) {
            Ok(())
        } else {
            Err(UnitError::new(
                format!("Expected {self} to have unit \"{unit}\""),
                name,
            ))
        }
    }

    /// Asserts that the value is an integer and returns it.
    pub fn assert_integer(&self, name: Option<&str>) -> Result<i64, UnitError> {
        self.to_i()
            .ok_or_else(|| UnitError::new(format!("{self} is not an integer"), name))
    }

    /// Asserts that the value lies in `[min, max]` (fuzzy bounds) and
    /// returns it, clamped to the bound when within tolerance of it.
    pub fn assert_between(
        &self,
        min: f64,
        max: f64,
        name: Option<&str>,
    ) -> Result<f64, UnitError> {
        fuzzy::assert_between(self.value, min, max, name)
    }

    /// Converts this number to the given unit signature.
    ///
    /// Strict: fails with a [`UnitError`] when any unit on either side has
    /// no convertible counterpart, including when one side is unitless and
    /// the other is not.
    pub fn convert(
        &self,
        numerator_units: &[&str],
        denominator_units: &[&str],
        name: Option<&str>,
    ) -> Result<Number, UnitError> {
        let value =
            self.coerce_or_convert_value(numerator_units, denominator_units, false, name, None, None)?;
        Ok(Number::with_units(
            value,
            numerator_units.iter().copied(),
            denominator_units.iter().copied(),
        ))
    }

    /// Like [`convert`](Self::convert), but returns the bare scalar.
    pub fn convert_value(
        &self,
        numerator_units: &[&str],
        denominator_units: &[&str],
        name: Option<&str>,
    ) -> Result<f64, UnitError> {
        self.coerce_or_convert_value(numerator_units, denominator_units, false, name, None, None)
    }

    /// Converts this number to `other`'s unit signature.
    ///
    /// `name` and `other_name` attribute the operands in error messages
    /// when the units are incompatible.
    pub fn convert_to_match(
        &self,
        other: &Number,
        name: Option<&str>,
        other_name: Option<&str>,
    ) -> Result<Number, UnitError> {
        let value = self.convert_value_to_match(other, name, other_name)?;
        Ok(Number::with_units(
            value,
            other.numerator_units.clone(),
            other.denominator_units.clone(),
        ))
    }

    /// Like [`convert_to_match`](Self::convert_to_match), but returns the
    /// bare scalar.
    pub fn convert_value_to_match(
        &self,
        other: &Number,
        name: Option<&str>,
        other_name: Option<&str>,
    ) -> Result<f64, UnitError> {
        let numerator_units: Vec<&str> =
            other.numerator_units.iter().map(String::as_str).collect();
        let denominator_units: Vec<&str> =
            other.denominator_units.iter().map(String::as_str).collect();
        self.coerce_or_convert_value(
            &numerator_units,
            &denominator_units,
            false,
            name,
            Some(other),
            other_name,
        )
    }

    /// Coerces this number to the given unit signature.
    ///
    /// Permissive: a unitless number or a unitless target signature is
    /// compatible with anything, and the value passes through unchanged.
    /// Otherwise behaves like [`convert`](Self::convert).
    pub fn coerce(
        &self,
        numerator_units: &[&str],
        denominator_units: &[&str],
        name: Option<&str>,
    ) -> Result<Number, UnitError> {
        let value =
            self.coerce_or_convert_value(numerator_units, denominator_units, true, name, None, None)?;
        Ok(Number::with_units(
            value,
            numerator_units.iter().copied(),
            denominator_units.iter().copied(),
        ))
    }

    /// Like [`coerce`](Self::coerce), but returns the bare scalar.
    pub fn coerce_value(
        &self,
        numerator_units: &[&str],
        denominator_units: &[&str],
        name: Option<&str>,
    ) -> Result<f64, UnitError> {
        self.coerce_or_convert_value(numerator_units, denominator_units, true, name, None, None)
    }

    /// Shorthand for coercing to a single numerator unit.
    pub fn coerce_value_to_unit(&self, unit: &str, name: Option<&str>) -> Result<f64, UnitError> {
        self.coerce_value(&[unit], &[], name)
    }

    /// Coerces this number to `other`'s unit signature.
    pub fn coerce_to_match(
        &self,
        other: &Number,
        name: Option<&str>,
        other_name: Option<&str>,
    ) -> Result<Number, UnitError> {
        let value = self.coerce_value_to_match(other, name, other_name)?;
        Ok(Number::with_units(
            value,
            other.numerator_units.clone(),
            other.denominator_units.clone(),
        ))
    }

    /// Like [`coerce_to_match`](Self::coerce_to_match), but returns the
    /// bare scalar.
    pub fn coerce_value_to_match(
        &self,
        other: &Number,
        name: Option<&str>,
        other_name: Option<&str>,
    ) -> Result<f64, UnitError> {
        let numerator_units: Vec<&str> =
            other.numerator_units.iter().map(String::as_str).collect();
        let denominator_units: Vec<&str> =
            other.denominator_units.iter().map(String::as_str).collect();
        self.coerce_or_convert_value(
            &numerator_units,
            &denominator_units,
            true,
            name,
            Some(other),
            other_name,
        )
    }

    /// The shared convert/coerce engine.
    ///
    /// Matches each target unit against the first not-yet-consumed source
    /// unit convertible to it (multiplying for numerators, dividing for
    /// denominators), then fails if any source unit is left unaccounted
    /// for. With `coerce_unitless`, a unitless source or target
    /// short-circuits to the unchanged value.
    fn coerce_or_convert_value(
        &self,
        new_numerator_units: &[&str],
        new_denominator_units: &[&str],
        coerce_unitless: bool,
        name: Option<&str>,
        other: Option<&Number>,
        other_name: Option<&str>,
    ) -> Result<f64, UnitError> {
        if let Some(other) = other {
            if !unit_lists_equal(&other.numerator_units, new_numerator_units)
                || !unit_lists_equal(&other.denominator_units, new_denominator_units)
            {
                return Err(UnitError::new(
                    format!(
                        "Expected {other} to have units {}",
                        unit_string(new_numerator_units, new_denominator_units)
                    ),
                    name,
                ));
            }
        }

        if unit_lists_equal(&self.numerator_units, new_numerator_units)
            && unit_lists_equal(&self.denominator_units, new_denominator_units)
        {
            return Ok(self.value);
        }

        let other_unitless = new_numerator_units.is_empty() && new_denominator_units.is_empty();

        if coerce_unitless && (self.is_unitless() || other_unitless) {
            return Ok(self.value);
        }

        // Built lazily so the message work only happens on failure.
        let compatibility_error = || -> UnitError {
            if let Some(other) = other {
                let mut message = format!("{self} and");
                if let Some(other_name) = other_name {
                    message.push_str(&format!(" ${other_name}:"));
                }
                message.push_str(&format!(" {other} have incompatible units"));
                if self.is_unitless() || other_unitless {
                    message.push_str(" (one has units and the other doesn't)");
                }
                return UnitError::new(message, name);
            }

            if other_unitless {
                return UnitError::new(format!("Expected {self} to have no units"), name);
            }

            if new_numerator_units.len() == 1 && new_denominator_units.is_empty() {
                if let Some(ty) = unit::type_of(new_numerator_units[0]) {
                    return UnitError::new(
                        format!(
                            "Expected {self} to have {article} {ty} unit ({units})",
                            article = article(ty.name()),
                            units = unit::units_of(ty).iter().join(", ")
                        ),
                        name,
                    );
                }
            }

            let unit_count = new_numerator_units.len() + new_denominator_units.len();
            UnitError::new(
                format!(
                    "Expected {self} to have unit{} {}",
                    if unit_count > 1 { "s" } else { "" },
                    unit_string(new_numerator_units, new_denominator_units)
                ),
                name,
            )
        };

        let mut result = self.value;

        let mut old_numerator_units: Vec<&str> =
            self.numerator_units.iter().map(String::as_str).collect();
        for new_numerator_unit in new_numerator_units {
            let matched = old_numerator_units
                .iter()
                .enumerate()
                .find_map(|(index, old_numerator_unit)| {
                    unit::conversion_factor(new_numerator_unit, old_numerator_unit)
                        .map(|factor| (index, factor))
                });
            let Some((index, factor)) = matched else {
                return Err(compatibility_error());
            };
            result *= factor;
            old_numerator_units.remove(index);
        }

        let mut old_denominator_units: Vec<&str> =
            self.denominator_units.iter().map(String::as_str).collect();
        for new_denominator_unit in new_denominator_units {
            let matched = old_denominator_units
                .iter()
                .enumerate()
                .find_map(|(index, old_denominator_unit)| {
                    unit::conversion_factor(new_denominator_unit, old_denominator_unit)
                        .map(|factor| (index, factor))
                });
            let Some((index, factor)) = matched else {
                return Err(compatibility_error());
            };
            result /= factor;
            old_denominator_units.remove(index);
        }

        if !old_numerator_units.is_empty() || !old_denominator_units.is_empty() {
            return Err(compatibility_error());
        }

        Ok(result)
    }

    /// The canonical fuzzy hash of this number, computed once.
    fn canonical_hash(&self) -> i64 {
        *self.hash.get_or_init(|| {
            if self.is_unitless() {
                fuzzy::hash(self.value)
            } else if self.is_single_unit() {
                fuzzy::hash(
                    self.value * unit::canonical_multiplier_for_unit(&self.numerator_units[0]),
                )
            } else {
                fuzzy::hash(
                    self.value * unit::canonical_multiplier(&self.numerator_units)
                        / unit::canonical_multiplier(&self.denominator_units),
                )
            }
        })
    }
}

impl PartialEq for Number {
    /// Numbers are equal when their unit-list lengths match, their
    /// canonicalized unit lists match on both sides of the ratio, and their
    /// canonically scaled magnitudes are fuzzily equal. Equality never
    /// coerces: a unitless number equals only unitless numbers.
    fn eq(&self, other: &Self) -> bool {
        if self.numerator_units.len() != other.numerator_units.len()
            || self.denominator_units.len() != other.denominator_units.len()
        {
            return false;
        }

        if self.is_unitless() {
            return fuzzy::equals(self.value, other.value);
        }

        if unit::canonicalize_units(&self.numerator_units)
            != unit::canonicalize_units(&other.numerator_units)
            || unit::canonicalize_units(&self.denominator_units)
                != unit::canonicalize_units(&other.denominator_units)
        {
            return false;
        }

        fuzzy::equals(
            self.value * unit::canonical_multiplier(&self.numerator_units)
                / unit::canonical_multiplier(&self.denominator_units),
            other.value * unit::canonical_multiplier(&other.numerator_units)
                / unit::canonical_multiplier(&other.denominator_units),
        )
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_hash().hash(state);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fuzzy::format_scalar(self.value))?;
        if self.is_single_unit() {
            f.write_str(&self.numerator_units[0])
        } else if self.has_units() {
            f.write_str(&unit_string(&self.numerator_units, &self.denominator_units))
        } else {
            Ok(())
        }
    }
}

/// Renders a unit signature for messages: `no units`, `px`, `px*em`,
/// `s^-1`, `(s*ms)^-1`, or `px/s`.
fn unit_string<S: fmt::Display>(numerator_units: &[S], denominator_units: &[S]) -> String {
    if numerator_units.is_empty() {
        if denominator_units.is_empty() {
            return "no units".to_string();
        }
        return if denominator_units.len() == 1 {
            format!("{}^-1", denominator_units[0])
        } else {
            format!("({})^-1", denominator_units.iter().join("*"))
        };
    }

    if denominator_units.is_empty() {
        return numerator_units.iter().join("*");
    }

    format!(
        "{}/{}",
        numerator_units.iter().join("*"),
        denominator_units.iter().join("*")
    )
}

fn unit_lists_equal(units: &[String], other: &[&str]) -> bool {
    units.len() == other.len() && units.iter().zip(other).all(|(a, b)| a == b)
}

fn article(noun: &str) -> &'static str {
    if noun.starts_with(['a', 'e', 'i', 'o', 'u']) {
        "an"
    } else {
        "a"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_cancels_convertible_units() {
        let number = Number::with_units(1.0, ["in"], ["px"]);
        assert!(number.is_unitless());
        assert_eq!(number.value(), 96.0);

        let number = Number::with_units(2.0, ["px"], ["px"]);
        assert!(number.is_unitless());
        assert_eq!(number.value(), 2.0);
    }

    #[test]
    fn test_construction_retains_unmatched_denominators() {
        let number = Number::with_units(96.0, ["px"], ["s"]);
        assert_eq!(number.numerator_units(), &["px"]);
        assert_eq!(number.denominator_units(), &["s"]);
        assert_eq!(number.value(), 96.0);
    }

    #[test]
    fn test_construction_never_cancels_unknown_units() {
        let number = Number::with_units(1.0, ["em"], ["px"]);
        assert_eq!(number.numerator_units(), &["em"]);
        assert_eq!(number.denominator_units(), &["px"]);

        // Identical unknown symbols do cancel: factor 1.
        let number = Number::with_units(1.0, ["em"], ["em"]);
        assert!(number.is_unitless());
        assert_eq!(number.value(), 1.0);
    }

    #[test]
    fn test_construction_first_match_is_order_dependent() {
        // "mm" consumes the first convertible numerator unit, so the unit
        // that survives depends on input order.
        let cm_first = Number::with_units(1.0, ["cm", "mm"], ["mm"]);
        assert_eq!(cm_first.numerator_units(), &["mm"]);
        assert!(fuzzy::equals(cm_first.value(), 10.0));

        let mm_first = Number::with_units(1.0, ["mm", "cm"], ["mm"]);
        assert_eq!(mm_first.numerator_units(), &["cm"]);
        assert!(fuzzy::equals(mm_first.value(), 1.0));
    }

    #[test]
    fn test_unit_predicates() {
        let pixels = Number::with_unit(5.0, "px");
        assert!(!pixels.is_unitless());
        assert!(pixels.has_units());
        assert!(pixels.has_unit("px"));
        assert!(!pixels.has_unit("in"));
        assert!(pixels.compatible_with_unit("in"));
        assert!(!pixels.compatible_with_unit("s"));

        let scalar = Number::new(5.0);
        assert!(scalar.is_unitless());
        assert!(!scalar.has_unit("px"));
        assert!(!scalar.compatible_with_unit("px"));

        let ratio = Number::with_units(5.0, ["px"], ["s"]);
        assert!(!ratio.has_unit("px"));
        assert!(!ratio.compatible_with_unit("px"));
    }

    #[test]
    fn test_integer_predicates() {
        assert!(Number::with_unit(5.0, "px").is_integer());
        assert!(!Number::with_unit(5.5, "px").is_integer());
        assert_eq!(Number::new(5.0 + 1e-12).to_i(), Some(5));
        assert_eq!(Number::new(5.5).to_i(), None);
    }

    #[test]
    fn test_assert_unitless() {
        assert!(Number::new(5.0).assert_unitless(None).is_ok());

        let err = Number::with_unit(1.0, "px")
            .assert_unitless(Some("gap"))
            .unwrap_err();
        assert_eq!(err.to_string(), "$gap: Expected 1px to have no units");
    }

    #[test]
    fn test_assert_unit() {
        assert!(Number::with_unit(1.0, "px").assert_unit("px", None).is_ok());

        let err = Number::with_unit(1.0, "px")
            .assert_unit("em", None)
            .unwrap_err();
        assert_eq!(err.to_string(), "Expected 1px to have unit \"em\"");
    }

    #[test]
    fn test_assert_integer() {
        assert_eq!(Number::with_unit(5.0, "px").assert_integer(None), Ok(5));

        let err = Number::with_unit(5.5, "px").assert_integer(None).unwrap_err();
        assert_eq!(err.to_string(), "5.5px is not an integer");
    }

    #[test]
    fn test_assert_between() {
        assert_eq!(Number::new(5.0).assert_between(0.0, 10.0, None), Ok(5.0));

        let err = Number::new(11.0)
            .assert_between(0.0, 10.0, Some("alpha"))
            .unwrap_err();
        assert_eq!(err.to_string(), "$alpha: 11 must be between 0 and 10");
    }

    #[test]
    fn test_display() {
        let cases = vec![
            (Number::new(5.0), "5"),
            (Number::new(0.5), "0.5"),
            (Number::with_unit(1.0, "px"), "1px"),
            (Number::with_unit(-1.5, "em"), "-1.5em"),
            (Number::with_units(96.0, ["px"], ["s"]), "96px/s"),
            (Number::with_units(5.0, Vec::<String>::new(), vec!["s"]), "5s^-1"),
            (
                Number::with_units(5.0, Vec::<String>::new(), vec!["s", "ms"]),
                "5(s*ms)^-1",
            ),
            (Number::with_units(1.0, vec!["px", "em"], Vec::<String>::new()), "1px*em"),
        ];

        for (number, expected) in cases {
            assert_eq!(number.to_string(), expected);
        }
    }

    #[test]
    fn test_unit_string() {
        assert_eq!(unit_string::<&str>(&[], &[]), "no units");
        assert_eq!(unit_string(&["px"], &[]), "px");
        assert_eq!(unit_string(&["px", "em"], &[]), "px*em");
        assert_eq!(unit_string(&[], &["s"]), "s^-1");
        assert_eq!(unit_string(&[], &["s", "ms"]), "(s*ms)^-1");
        assert_eq!(unit_string(&["px", "em"], &["s"]), "px*em/s");
    }

    #[test]
    fn test_article() {
        assert_eq!(article("length"), "a");
        assert_eq!(article("angle"), "an");
    }
}
