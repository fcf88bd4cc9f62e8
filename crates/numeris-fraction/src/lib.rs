//! # numeris-fraction
//!
//! Bit-bounded rationals over the numeris integer kernel.
//!
//! A [`Fraction`] stores a sign flag and two [`BigUint`] magnitudes kept in
//! lowest terms. Each fraction carries a precision bound, `max_bits`: while
//! both terms fit in the bound the value is an exact rational, and once the
//! terms outgrow it they are shifted down, turning the value into a
//! bounded-error approximation with roughly `max_bits` bits of relative
//! precision.
//!
//! This crate provides:
//! - Exact arithmetic and ordering with native signed-arithmetic sign rules
//! - Parsing of integer, decimal and scientific-notation strings
//! - Exact construction from IEEE-754 half, single, double, x87 extended
//!   and quad precision bit patterns
//! - Scientific-notation rendering
//! - Square root, natural logarithm, exponential, logarithm in an
//!   arbitrary base and general power
//!
//! ## Example
//!
//! ```
//! use numeris_fraction::Fraction;
//!
//! let third = Fraction::from_i64s(1, 3).unwrap();
//! let sixth = Fraction::from_i64s(1, 6).unwrap();
//! assert_eq!(third + sixth, Fraction::from_i64s(1, 2).unwrap());
//!
//! let root = Fraction::from(2u64).sqrt(64).unwrap();
//! assert_eq!(root.to_scientific(10, false), "1.4142135623e+0");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod float;
pub mod format;
pub mod fraction;
pub mod ops;
pub mod parse;
pub mod transcendental;

#[cfg(test)]
mod proptests;

pub use config::{ApproxConfig, DEFAULT_MAX_BITS, MAX_DECIMAL_EXPONENT};
pub use error::FractionError;
pub use float::FloatFormat;
pub use fraction::Fraction;
pub use numeris_bigint::BigUint;
