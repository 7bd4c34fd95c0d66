//! The Sass number value model: a scalar tagged with a ratio of unit
//! symbols, with unit-aware conversion, coercion, fuzzy equality, and
//! hashing. See [`number::Number`] for the full semantics.

pub mod error;
pub mod fuzzy;
pub mod number;
pub mod unit;

pub use crate::error::UnitError;
pub use crate::number::Number;
pub use crate::unit::UnitType;
