//! # numeris
//!
//! Arbitrary-precision arithmetic in two layers.
//!
//! - [`bigint`]: an unsigned multi-precision integer kernel with Karatsuba
//!   multiplication, Newton-Raphson division, binary GCD and radix 2-36
//!   string conversion
//! - [`fraction`]: a signed rational over two kernel integers with a
//!   configurable bit budget, plus square root, logarithms, exponential
//!   and general power
//!
//! ## Quick Start
//!
//! ```rust
//! use numeris::prelude::*;
//!
//! let n = BigUint::from_str_radix("753", 10).unwrap();
//! assert_eq!(n.bit_len(), 10);
//! assert_eq!(n.to_str_radix(2).unwrap(), "1011110001");
//!
//! let half: Fraction = "0.5".parse().unwrap();
//! let quarter = half.powi(2).unwrap();
//! assert_eq!(quarter.to_scientific(3, false), "2.5e-1");
//! ```
//!
//! ## Precision
//!
//! Fractions stay exact while their terms fit the bit budget
//! ([`DEFAULT_MAX_BITS`](prelude::DEFAULT_MAX_BITS) unless chosen
//! otherwise). Past it, both terms are shifted right before reduction and
//! the value becomes a bounded-error approximation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use numeris_bigint as bigint;
pub use numeris_fraction as fraction;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use num_traits::{Num, One, Pow, ToPrimitive, Zero};
    pub use numeris_bigint::{BigUint, BigUintError, Limb};
    pub use numeris_fraction::{
        ApproxConfig, FloatFormat, Fraction, FractionError, DEFAULT_MAX_BITS,
    };
}
