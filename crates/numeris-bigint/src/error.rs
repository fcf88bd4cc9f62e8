//! Errors raised by the integer kernel.

use thiserror::Error;

/// Errors that can occur in integer kernel operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigUintError {
    /// Division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Radix outside of 2..=36.
    #[error("radix {0} is outside of 2..=36")]
    InvalidRadix(u32),

    /// A character that is not a digit of the requested radix.
    #[error("invalid digit {digit:?} at position {position} for radix {radix}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Byte offset of the character in the input.
        position: usize,
        /// The radix being parsed.
        radix: u32,
    },

    /// The input contained no digits.
    #[error("cannot parse an integer from an empty string")]
    Empty,

    /// An iterative routine hit its hard iteration cap.
    ///
    /// This indicates a convergence bug, never a property of the input.
    #[error("{routine} exceeded {limit} iterations")]
    IterationLimit {
        /// Name of the routine that gave up.
        routine: &'static str,
        /// The cap that was exceeded.
        limit: usize,
    },
}
