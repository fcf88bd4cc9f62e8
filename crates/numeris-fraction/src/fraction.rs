//! The bit-bounded rational type.

use std::hash::{Hash, Hasher};

use num_traits::{One, Zero};
use numeris_bigint::BigUint;
use tracing::trace;

use crate::config::DEFAULT_MAX_BITS;
use crate::error::FractionError;

/// A signed rational with a precision bound.
///
/// The magnitude lives in `numerator / denominator`; the sign is a
/// separate flag. After every operation the fraction is simplified:
///
/// - the denominator is nonzero
/// - zero is canonical: numerator 0, denominator 1, not negative
/// - numerator and denominator are coprime
/// - if the larger term is longer than `max_bits`, both terms are shifted
///   right by the excess before reducing, with the shift clamped so the
///   smaller term keeps `max_bits` bits
///
/// The last rule is a deliberate lossy cap. A fraction is an exact rational
/// only while both terms fit in `max_bits`; beyond that it is an
/// approximation with about `max_bits` bits of relative precision. It never
/// applies to integers, whose denominator is 1.
///
/// Equality, ordering and hashing compare values and ignore `max_bits`.
/// The result of a binary operation carries the larger of its operands'
/// bounds.
#[derive(Clone)]
pub struct Fraction {
    pub(crate) numerator: BigUint,
    pub(crate) denominator: BigUint,
    pub(crate) negative: bool,
    pub(crate) max_bits: u64,
}

impl Fraction {
    /// Creates a non-negative fraction with the default precision bound.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::ZeroDenominator`] if `denominator` is zero.
    pub fn new(numerator: BigUint, denominator: BigUint) -> Result<Self, FractionError> {
        Self::from_parts(false, numerator, denominator, DEFAULT_MAX_BITS)
    }

    /// Creates a non-negative fraction with an explicit precision bound.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::ZeroDenominator`] if `denominator` is zero.
    pub fn bounded(
        numerator: BigUint,
        denominator: BigUint,
        max_bits: u64,
    ) -> Result<Self, FractionError> {
        Self::from_parts(false, numerator, denominator, max_bits)
    }

    /// Creates a fraction from a sign, two magnitudes and a precision bound.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::ZeroDenominator`] if `denominator` is zero.
    pub fn from_parts(
        negative: bool,
        numerator: BigUint,
        denominator: BigUint,
        max_bits: u64,
    ) -> Result<Self, FractionError> {
        if denominator.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self::from_raw(negative, numerator, denominator, max_bits))
    }

    /// Creates a fraction from native signed integers. The sign follows
    /// native division: negative iff exactly one operand is negative.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::ZeroDenominator`] if `denominator` is zero.
    pub fn from_i64s(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
        Self::from_parts(
            (numerator < 0) != (denominator < 0),
            BigUint::from(numerator),
            BigUint::from(denominator),
            DEFAULT_MAX_BITS,
        )
    }

    /// Creates an integer-valued fraction.
    #[must_use]
    pub fn from_integer(value: BigUint) -> Self {
        Self::from_raw(false, value, BigUint::one(), DEFAULT_MAX_BITS)
    }

    /// Builds and simplifies. The caller guarantees a nonzero denominator.
    pub(crate) fn from_raw(
        negative: bool,
        numerator: BigUint,
        denominator: BigUint,
        max_bits: u64,
    ) -> Self {
        let mut fraction = Self {
            numerator,
            denominator,
            negative,
            max_bits,
        };
        fraction.simplify();
        fraction
    }

    pub(crate) fn zero_bounded(max_bits: u64) -> Self {
        Self {
            numerator: BigUint::zero(),
            denominator: BigUint::one(),
            negative: false,
            max_bits,
        }
    }

    pub(crate) fn one_bounded(max_bits: u64) -> Self {
        Self {
            numerator: BigUint::one(),
            denominator: BigUint::one(),
            negative: false,
            max_bits,
        }
    }

    /// Returns the numerator's magnitude.
    #[must_use]
    pub fn numerator(&self) -> &BigUint {
        &self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    /// Returns true if the value is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the precision bound in bits.
    #[must_use]
    pub fn max_bits(&self) -> u64 {
        self.max_bits
    }

    /// Consumes the fraction, returning `(negative, numerator, denominator)`.
    #[must_use]
    pub fn into_parts(self) -> (bool, BigUint, BigUint) {
        (self.negative, self.numerator, self.denominator)
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.numerator.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    /// Returns the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] if the value is zero.
    pub fn recip(&self) -> Result<Self, FractionError> {
        if self.numerator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        // Swapping coprime terms keeps them coprime; only the cap may apply.
        Ok(Self::from_raw(
            self.negative,
            self.denominator.clone(),
            self.numerator.clone(),
            self.max_bits,
        ))
    }

    /// Sets the precision bound and re-simplifies under it.
    pub fn set_precision(&mut self, max_bits: u64) -> &mut Self {
        self.max_bits = max_bits;
        self.simplify();
        self
    }

    /// Returns the fraction under a new precision bound.
    #[must_use]
    pub fn with_precision(mut self, max_bits: u64) -> Self {
        self.set_precision(max_bits);
        self
    }

    /// Restores the representation invariants.
    pub(crate) fn simplify(&mut self) {
        debug_assert!(!self.denominator.is_zero(), "denominator is zero");
        if self.numerator.is_zero() {
            self.denominator = BigUint::one();
            self.negative = false;
            return;
        }

        let num_bits = self.numerator.bit_len();
        let den_bits = self.denominator.bit_len();
        let keep = self.max_bits.max(1);
        let shift = num_bits
            .max(den_bits)
            .saturating_sub(keep)
            .min(num_bits.min(den_bits).saturating_sub(keep));
        if shift > 0 {
            trace!(shift, max_bits = self.max_bits, "precision cap applied");
            self.numerator >>= shift;
            self.denominator >>= shift;
        }

        let gcd = self.numerator.gcd(&self.denominator);
        if !gcd.is_one() {
            self.numerator = &self.numerator / &gcd;
            self.denominator = &self.denominator / &gcd;
        }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::zero_bounded(DEFAULT_MAX_BITS)
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::one_bounded(DEFAULT_MAX_BITS)
    }

    fn is_one(&self) -> bool {
        !self.negative && self.numerator.is_one() && self.denominator.is_one()
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative
            && self.numerator == other.numerator
            && self.denominator == other.denominator
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl From<BigUint> for Fraction {
    fn from(value: BigUint) -> Self {
        Self::from_integer(value)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fraction {
                fn from(value: $t) -> Self {
                    Self::from_integer(BigUint::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fraction {
                fn from(value: $t) -> Self {
                    let negative = value < 0;
                    Self::from_raw(negative, BigUint::from(value), BigUint::one(), DEFAULT_MAX_BITS)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);
