//! # numeris-bigint
//!
//! Multi-precision unsigned integer kernel for numeris.
//!
//! This crate provides:
//! - [`BigUint`], an unsigned integer stored as 32-bit limbs, least
//!   significant first
//! - Schoolbook and Karatsuba multiplication
//! - Native, Newton-Raphson and schoolbook division
//! - Binary GCD, LCM and square-and-multiply exponentiation
//! - Radix 2-36 string conversion
//!
//! ## Algorithm Selection
//!
//! - Multiplication: schoolbook while the combined limb count is at most
//!   [`KARATSUBA_THRESHOLD`], Karatsuba above it
//! - Division: native `u64` when both operands fit in two limbs,
//!   Newton-Raphson fixed-point reciprocal otherwise
//!
//! The kernel is unsigned only. Subtraction saturates at zero; signed
//! arithmetic lives one level up, in `numeris-fraction`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[macro_use]
mod macros;

pub mod algorithms;
pub mod arith;
pub mod bitwise;
pub mod error;
pub mod radix;
pub mod uint;

#[cfg(test)]
mod proptests;

pub use algorithms::div::{MAX_CORRECTION_STEPS, MAX_NEWTON_ITERATIONS};
pub use algorithms::gcd::GCD_MODULO_GAP_BITS;
pub use algorithms::mul::{KARATSUBA_BASE_CASE, KARATSUBA_THRESHOLD};
pub use error::BigUintError;
pub use uint::{BigUint, Limb, LIMB_BITS};
