//! Errors raised by the rational layer.

use numeris_bigint::BigUintError;
use thiserror::Error;

/// Errors that can occur in fraction operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FractionError {
    /// A fraction was constructed with a zero denominator.
    #[error("denominator cannot be zero")]
    ZeroDenominator,

    /// Division by a zero fraction.
    #[error("division by zero")]
    DivisionByZero,

    /// A malformed numeric string.
    #[error("cannot parse {input:?} as a fraction: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// NaN or infinity passed where a finite value is required.
    #[error("floating-point value is not finite")]
    NonFinite,

    /// An argument outside the domain of a real-valued function.
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// An iterative approximation hit its hard iteration cap.
    #[error("{routine} exceeded {limit} iterations")]
    IterationLimit {
        /// Name of the routine that gave up.
        routine: &'static str,
        /// The cap that was exceeded.
        limit: usize,
    },

    /// An error from the integer kernel.
    #[error(transparent)]
    Integer(#[from] BigUintError),
}
