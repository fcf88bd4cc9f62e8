//! Kernel algorithms.
//!
//! This module contains:
//! - Schoolbook and Karatsuba multiplication
//! - Native, Newton-Raphson and schoolbook division
//! - Binary GCD and LCM
//! - Square-and-multiply exponentiation

pub mod div;
pub mod gcd;
pub mod mul;
pub mod pow;
