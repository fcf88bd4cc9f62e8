//! Scientific-notation and pair rendering.

use std::fmt;

use num_traits::Zero;
use numeris_bigint::BigUint;

use crate::error::FractionError;
use crate::fraction::Fraction;

/// Default number of fractional digits for [`fmt::Display`].
const DEFAULT_DISPLAY_DIGITS: usize = 5;

impl Fraction {
    /// Renders `[-]d.ddd…e±x` with at most `precision` digits after the
    /// point.
    ///
    /// Digits are truncated, not rounded. Without `pad_with_zeros` trailing
    /// zeros are dropped, possibly leaving a bare point (`1.e+3`); with it
    /// the fraction is padded to exactly `precision` digits. Zero renders as
    /// `0.e+0`.
    #[must_use]
    pub fn to_scientific(&self, precision: usize, pad_with_zeros: bool) -> String {
        if self.numerator.is_zero() {
            let zeros = if pad_with_zeros { precision } else { 0 };
            return format!("0.{}e+0", "0".repeat(zeros));
        }

        let (int_part, mut remainder) = self.numerator.div_rem(&self.denominator);
        let next_digit = |remainder: &mut BigUint| {
            remainder.mul_add_limb(10, 0);
            let (digit, rest) = remainder.div_rem(&self.denominator);
            *remainder = rest;
            char::from(b'0' + digit.to_u8_wrapping())
        };

        let mut out = String::with_capacity(precision + 8);
        if self.negative {
            out.push('-');
        }

        let mut written;
        let exponent: i64;
        if int_part.is_zero() {
            let mut leading_zeros = 0i64;
            let first = loop {
                let digit = next_digit(&mut remainder);
                if digit != '0' {
                    break digit;
                }
                leading_zeros += 1;
            };
            exponent = -(leading_zeros + 1);
            out.push(first);
            out.push('.');
            written = 0;
        } else {
            let digits = int_part.to_string();
            exponent = i64::try_from(digits.len() - 1).unwrap_or(i64::MAX);
            out.push_str(&digits[..1]);
            out.push('.');
            written = precision.min(digits.len() - 1);
            out.push_str(&digits[1..=written]);
        }

        while written < precision && !remainder.is_zero() {
            out.push(next_digit(&mut remainder));
            written += 1;
        }
        if pad_with_zeros {
            out.extend(std::iter::repeat('0').take(precision - written));
        } else {
            while out.ends_with('0') {
                out.pop();
            }
        }

        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.unsigned_abs().to_string());
        out
    }

    /// Renders numerator and denominator in `radix`. The numerator carries
    /// a leading `-` when the value is negative.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Integer`] if `radix` is outside `2..=36`.
    pub fn to_string_pair(&self, radix: u32) -> Result<(String, String), FractionError> {
        let mut numerator = self.numerator.to_str_radix(radix)?;
        if self.negative {
            numerator.insert(0, '-');
        }
        Ok((numerator, self.denominator.to_str_radix(radix)?))
    }
}

impl fmt::Display for Fraction {
    /// Scientific notation. `{:.N}` sets the digit count (default 5) and
    /// `{:#}` pads with zeros.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_DIGITS);
        f.write_str(&self.to_scientific(precision, f.alternate()))
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(f, "Fraction({sign}{}/{})", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numeris_bigint::BigUintError;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::from_i64s(n, d).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(Fraction::zero().to_scientific(5, false), "0.e+0");
        assert_eq!(Fraction::zero().to_scientific(3, true), "0.000e+0");
    }

    #[test]
    fn test_integers() {
        assert_eq!(frac(1, 1).to_scientific(5, false), "1.e+0");
        assert_eq!(frac(1000, 1).to_scientific(5, false), "1.e+3");
        assert_eq!(frac(1000, 1).to_scientific(5, true), "1.00000e+3");
        assert_eq!(frac(-123_456_789, 1).to_scientific(3, false), "-1.234e+8");
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        assert_eq!(frac(2, 3).to_scientific(4, false), "6.6666e-1");
        assert_eq!(frac(2, 3).to_scientific(12, false), "6.666666666666e-1");
        assert_eq!(frac(1, 7).to_scientific(10, true), "1.4285714285e-1");
        assert_eq!(frac(199_999, 100_000).to_scientific(2, false), "1.99e+0");
    }

    #[test]
    fn test_mixed_and_small() {
        assert_eq!(frac(1131, 1000).to_scientific(5, false), "1.131e+0");
        assert_eq!(frac(-113, 100_000).to_scientific(5, false), "-1.13e-3");
        assert_eq!(frac(1, 3).to_scientific(5, true), "3.33333e-1");
        assert_eq!(frac(1, 8).to_scientific(0, false), "1.e-1");
    }

    #[test]
    fn test_display() {
        let f = frac(22, 7);
        assert_eq!(f.to_string(), "3.14285e+0");
        assert_eq!(format!("{f:.2}"), "3.14e+0");
        assert_eq!(format!("{:#.3}", frac(1, 2)), "5.000e-1");
        assert_eq!(format!("{:?}", frac(-3, 4)), "Fraction(-3/4)");
    }

    #[test]
    fn test_string_pair() {
        assert_eq!(
            frac(-255, 16).to_string_pair(16).unwrap(),
            ("-ff".to_string(), "10".to_string())
        );
        assert_eq!(
            frac(1, 2).to_string_pair(40),
            Err(FractionError::Integer(BigUintError::InvalidRadix(40)))
        );
    }
}
