//! Exact conversion from IEEE-754 binary floating-point values.
//!
//! A finite float is `±mantissa / 2^(digits-1) · 2^exponent`, so its bit
//! pattern maps directly onto a fraction with a power-of-two denominator:
//! the stored mantissa (with the implicit leading bit restored for normal
//! values) becomes the numerator, and the unbiased exponent shifts either
//! the numerator or the denominator. The result is exact.

use num_traits::{One, ToPrimitive, Zero};
use numeris_bigint::{BigUint, Limb};

use crate::config::DEFAULT_MAX_BITS;
use crate::error::FractionError;
use crate::fraction::Fraction;

/// Field layout of an IEEE-754 binary interchange format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloatFormat {
    /// Width of the biased exponent field.
    pub exponent_bits: u32,
    /// Width of the stored mantissa field.
    pub mantissa_bits: u32,
    /// Whether the leading mantissa bit is stored rather than implied, as in
    /// the x87 80-bit extended format.
    pub explicit_leading_bit: bool,
}

impl FloatFormat {
    /// binary16.
    pub const HALF: Self = Self::implicit(5, 10);
    /// binary32, Rust's `f32`.
    pub const SINGLE: Self = Self::implicit(8, 23);
    /// binary64, Rust's `f64`.
    pub const DOUBLE: Self = Self::implicit(11, 52);
    /// x87 80-bit extended precision.
    pub const EXTENDED: Self = Self {
        exponent_bits: 15,
        mantissa_bits: 64,
        explicit_leading_bit: true,
    };
    /// binary128.
    pub const QUAD: Self = Self::implicit(15, 112);

    const fn implicit(exponent_bits: u32, mantissa_bits: u32) -> Self {
        Self {
            exponent_bits,
            mantissa_bits,
            explicit_leading_bit: false,
        }
    }

    /// Significant bits, including the leading bit.
    #[must_use]
    pub const fn digits(&self) -> u32 {
        if self.explicit_leading_bit {
            self.mantissa_bits
        } else {
            self.mantissa_bits + 1
        }
    }

    /// Total encoded width in bits.
    #[must_use]
    pub const fn total_bits(&self) -> u32 {
        1 + self.exponent_bits + self.mantissa_bits
    }

    /// Exponent bias.
    #[must_use]
    pub const fn bias(&self) -> i64 {
        (1 << (self.exponent_bits - 1)) - 1
    }
}

fn biguint_from_u128(value: u128) -> BigUint {
    #[allow(clippy::cast_possible_truncation)]
    let limbs: Vec<Limb> = (0..4).map(|i| (value >> (32 * i)) as Limb).collect();
    BigUint::from_limbs(limbs)
}

impl Fraction {
    /// Decodes an IEEE-754 bit pattern, right-aligned in `bits`.
    ///
    /// The result is exact: its precision bound is raised to the format's
    /// significant bits if `max_bits` is smaller. Zero of either sign
    /// decodes to the canonical zero.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::NonFinite`] for NaN and infinities.
    pub fn from_ieee_bits(
        bits: u128,
        format: FloatFormat,
        max_bits: u64,
    ) -> Result<Self, FractionError> {
        let max_bits = max_bits.max(u64::from(format.digits()));
        let exponent_mask = (1u128 << format.exponent_bits) - 1;
        let mantissa_mask = (1u128 << format.mantissa_bits) - 1;

        let negative = (bits >> (format.exponent_bits + format.mantissa_bits)) & 1 == 1;
        let biased = (bits >> format.mantissa_bits) & exponent_mask;
        let mut mantissa = bits & mantissa_mask;

        if biased == exponent_mask {
            return Err(FractionError::NonFinite);
        }
        if biased == 0 && mantissa == 0 {
            return Ok(Self::zero_bounded(max_bits));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let exponent = if biased == 0 {
            1 - format.bias()
        } else {
            if !format.explicit_leading_bit {
                mantissa |= 1 << format.mantissa_bits;
            }
            biased as i64 - format.bias()
        };

        let mut numerator = biguint_from_u128(mantissa);
        let mut denominator = BigUint::one() << u64::from(format.digits() - 1);
        if exponent > 0 {
            numerator <<= exponent.unsigned_abs();
        } else {
            denominator <<= exponent.unsigned_abs();
        }
        Ok(Self::from_raw(negative, numerator, denominator, max_bits))
    }

    /// Converts to `f64` by rendering enough decimal digits and parsing
    /// them back.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        if self.numerator.is_zero() {
            return 0.0;
        }
        self.to_scientific(27, false).parse().unwrap_or(f64::NAN)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_ieee_bits(u128::from(value.to_bits()), FloatFormat::DOUBLE, DEFAULT_MAX_BITS)
    }
}

impl TryFrom<f32> for Fraction {
    type Error = FractionError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_ieee_bits(u128::from(value.to_bits()), FloatFormat::SINGLE, DEFAULT_MAX_BITS)
    }
}

impl ToPrimitive for Fraction {
    /// Truncates toward zero.
    fn to_i64(&self) -> Option<i64> {
        let magnitude = (&self.numerator / &self.denominator).to_u64()?;
        if self.negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    /// Truncates toward zero; `None` below zero.
    fn to_u64(&self) -> Option<u64> {
        let magnitude = (&self.numerator / &self.denominator).to_u64()?;
        (!self.negative || magnitude == 0).then_some(magnitude)
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Fraction::to_f64(self))
    }
}
