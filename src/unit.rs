// Unit compatibility follows the CSS Values and Units rules: units are
// grouped into categories (length, angle, time, frequency, pixel density),
// and within a category every unit has a fixed ratio to the category's
// canonical unit:
//
//   1in  = 2.54cm = 6pc = 25.4mm = 101.6q = 72pt = 96px
//   360deg = 400grad = 2π·rad = 1turn
//   1s   = 1000ms
//   1kHz = 1000Hz
//   1dpcm = 2.54dpi, 1dppx = 96dpi
//
// Units from different categories never convert, and unit symbols outside
// the table (em, vw, fr, or anything user-invented) convert only to an
// identical symbol. Symbols are case-sensitive, so "Hz" and "hz" are
// distinct units.

use std::fmt;

use itertools::Itertools;
use phf::phf_map;

/// A category of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    Length,
    Angle,
    Time,
    Frequency,
    PixelDensity,
}

impl UnitType {
    /// The category name used in user-facing messages.
    pub fn name(&self) -> &'static str {
        match self {
            UnitType::Length => "length",
            UnitType::Angle => "angle",
            UnitType::Time => "time",
            UnitType::Frequency => "frequency",
            UnitType::PixelDensity => "pixel density",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

struct UnitInfo {
    ty: UnitType,
    /// Canonical units per one of this unit.
    multiplier: f64,
}

static UNITS: phf::Map<&'static str, UnitInfo> = phf_map! {
    // Lengths, anchored at inches
    "in" => UnitInfo { ty: UnitType::Length, multiplier: 1.0 },
    "cm" => UnitInfo { ty: UnitType::Length, multiplier: 1.0 / 2.54 },
    "pc" => UnitInfo { ty: UnitType::Length, multiplier: 1.0 / 6.0 },
    "mm" => UnitInfo { ty: UnitType::Length, multiplier: 1.0 / 25.4 },
    "q" => UnitInfo { ty: UnitType::Length, multiplier: 1.0 / 101.6 },
    "pt" => UnitInfo { ty: UnitType::Length, multiplier: 1.0 / 72.0 },
    "px" => UnitInfo { ty: UnitType::Length, multiplier: 1.0 / 96.0 },
    // Angles, anchored at degrees
    "deg" => UnitInfo { ty: UnitType::Angle, multiplier: 1.0 },
    "grad" => UnitInfo { ty: UnitType::Angle, multiplier: 9.0 / 10.0 },
    "rad" => UnitInfo { ty: UnitType::Angle, multiplier: 180.0 / std::f64::consts::PI },
    "turn" => UnitInfo { ty: UnitType::Angle, multiplier: 360.0 },
    // Durations, anchored at seconds
    "s" => UnitInfo { ty: UnitType::Time, multiplier: 1.0 },
    "ms" => UnitInfo { ty: UnitType::Time, multiplier: 1.0 / 1000.0 },
    // Frequencies, anchored at Hertz
    "Hz" => UnitInfo { ty: UnitType::Frequency, multiplier: 1.0 },
    "kHz" => UnitInfo { ty: UnitType::Frequency, multiplier: 1000.0 },
    // Pixel densities, anchored at dots per inch
    "dpi" => UnitInfo { ty: UnitType::PixelDensity, multiplier: 1.0 },
    "dpcm" => UnitInfo { ty: UnitType::PixelDensity, multiplier: 2.54 },
    "dppx" => UnitInfo { ty: UnitType::PixelDensity, multiplier: 96.0 },
};

/// The units of `ty`, canonical unit first, in presentation order.
pub fn units_of(ty: UnitType) -> &'static [&'static str] {
    match ty {
        UnitType::Length => &["in", "cm", "pc", "mm", "q", "pt", "px"],
        UnitType::Angle => &["deg", "grad", "rad", "turn"],
        UnitType::Time => &["s", "ms"],
        UnitType::Frequency => &["Hz", "kHz"],
        UnitType::PixelDensity => &["dpi", "dpcm", "dppx"],
    }
}

/// The category of `unit`, or `None` for symbols outside the table.
pub fn type_of(unit: &str) -> Option<UnitType> {
    UNITS.get(unit).map(|info| info.ty)
}

/// The factor that converts a value expressed in `unit2` into `unit1`.
///
/// Identical symbols always convert with factor 1, even symbols outside the
/// table. Returns `None` when the units belong to different categories.
///
/// ```rust
/// use sass_number::unit::conversion_factor;
///
/// assert_eq!(conversion_factor("s", "ms"), Some(0.001));
/// assert_eq!(conversion_factor("px", "in"), Some(96.0));
/// assert_eq!(conversion_factor("px", "s"), None);
/// assert_eq!(conversion_factor("em", "em"), Some(1.0));
/// ```
pub fn conversion_factor(unit1: &str, unit2: &str) -> Option<f64> {
    if unit1 == unit2 {
        return Some(1.0);
    }
    let to = UNITS.get(unit1)?;
    let from = UNITS.get(unit2)?;
    if to.ty != from.ty {
        return None;
    }
    Some(from.multiplier / to.multiplier)
}

/// The multiplier that converts a value in `unit` into its category's
/// canonical unit; 1 for symbols outside the table.
pub fn canonical_multiplier_for_unit(unit: &str) -> f64 {
    UNITS.get(unit).map_or(1.0, |info| info.multiplier)
}

/// The product of [`canonical_multiplier_for_unit`] over `units`.
pub fn canonical_multiplier(units: &[String]) -> f64 {
    units
        .iter()
        .map(|unit| canonical_multiplier_for_unit(unit))
        .product()
}

/// The order-independent canonical form of a unit list: each unit replaced
/// by its category's canonical unit (symbols outside the table kept as-is),
/// then sorted.
pub fn canonicalize_units(units: &[String]) -> Vec<String> {
    units
        .iter()
        .map(|unit| match type_of(unit) {
            Some(ty) => units_of(ty)[0].to_string(),
            None => unit.clone(),
        })
        .sorted()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy;

    #[test]
    fn test_conversion_factor_within_category() {
        let cases = vec![
            ("in", "px", 1.0 / 96.0),
            ("px", "in", 96.0),
            ("pt", "px", 72.0 / 96.0),
            ("mm", "cm", 10.0),
            ("deg", "turn", 360.0),
            ("grad", "deg", 400.0 / 360.0),
            ("s", "ms", 0.001),
            ("ms", "s", 1000.0),
            ("kHz", "Hz", 0.001),
            ("dpi", "dppx", 96.0),
            ("dpcm", "dpi", 1.0 / 2.54),
        ];

        for (unit1, unit2, expected) in cases {
            let factor = conversion_factor(unit1, unit2)
                .unwrap_or_else(|| panic!("{unit1} and {unit2} should convert"));
            assert!(
                fuzzy::equals(factor, expected),
                "factor({unit1}, {unit2}) = {factor}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_conversion_factor_identical_symbols() {
        assert_eq!(conversion_factor("px", "px"), Some(1.0));
        // Unknown symbols convert to themselves and nothing else.
        assert_eq!(conversion_factor("em", "em"), Some(1.0));
        assert_eq!(conversion_factor("em", "rem"), None);
        assert_eq!(conversion_factor("em", "px"), None);
    }

    #[test]
    fn test_conversion_factor_across_categories() {
        assert_eq!(conversion_factor("px", "deg"), None);
        assert_eq!(conversion_factor("s", "Hz"), None);
        assert_eq!(conversion_factor("dpi", "px"), None);
    }

    #[test]
    fn test_case_sensitive_symbols() {
        assert_eq!(type_of("Hz"), Some(UnitType::Frequency));
        assert_eq!(type_of("hz"), None);
        assert_eq!(conversion_factor("hz", "Hz"), None);
    }

    #[test]
    fn test_type_of_and_units_of() {
        assert_eq!(type_of("px"), Some(UnitType::Length));
        assert_eq!(type_of("turn"), Some(UnitType::Angle));
        assert_eq!(type_of("em"), None);

        assert_eq!(
            units_of(UnitType::Length),
            &["in", "cm", "pc", "mm", "q", "pt", "px"]
        );
        assert_eq!(units_of(UnitType::Time), &["s", "ms"]);
    }

    #[test]
    fn test_unit_type_display() {
        assert_eq!(UnitType::Length.to_string(), "length");
        assert_eq!(UnitType::PixelDensity.to_string(), "pixel density");
    }

    #[test]
    fn test_canonical_multiplier() {
        assert!(fuzzy::equals(canonical_multiplier_for_unit("in"), 1.0));
        assert!(fuzzy::equals(
            canonical_multiplier_for_unit("px"),
            1.0 / 96.0
        ));
        assert!(fuzzy::equals(canonical_multiplier_for_unit("em"), 1.0));

        let units = vec!["px".to_string(), "s".to_string()];
        assert!(fuzzy::equals(canonical_multiplier(&units), 1.0 / 96.0));
        assert!(fuzzy::equals(canonical_multiplier(&[]), 1.0));
    }

    #[test]
    fn test_canonicalize_units() {
        let units = vec!["px".to_string(), "em".to_string(), "ms".to_string()];
        assert_eq!(canonicalize_units(&units), vec!["em", "in", "s"]);

        // Same category in any spelling canonicalizes to the same form.
        let cm = vec!["cm".to_string()];
        let pt = vec!["pt".to_string()];
        assert_eq!(canonicalize_units(&cm), canonicalize_units(&pt));
    }
}
