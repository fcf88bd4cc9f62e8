//! Parsing of integer, decimal and scientific-notation strings.
//!
//! Accepted grammar: `[+-]? digits? ('.' digits?)? ([eE] [+-]? digits)?`
//! with at least one mantissa digit. The mantissa digits on both sides of
//! the point become the numerator, the denominator is `10^(fractional
//! digits)`, and the exponent scales the numerator (positive) or the
//! denominator (negative) by a power of ten.

use std::str::FromStr;

use num_traits::One;
use numeris_bigint::BigUint;

use crate::config::{DEFAULT_MAX_BITS, MAX_DECIMAL_EXPONENT};
use crate::error::FractionError;
use crate::fraction::Fraction;

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl Fraction {
    /// Parses a decimal or scientific-notation string under a precision
    /// bound.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Parse`] for malformed input, including an
    /// exponent beyond [`MAX_DECIMAL_EXPONENT`].
    pub fn parse_bounded(s: &str, max_bits: u64) -> Result<Self, FractionError> {
        let fail = |reason| FractionError::Parse {
            input: s.to_string(),
            reason,
        };

        let (negative, body) = match s.as_bytes().first() {
            None => return Err(fail("empty string")),
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
        };

        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(i) => (&body[..i], Some(&body[i + 1..])),
            None => (body, None),
        };
        let (int_part, frac_part) = match mantissa.find('.') {
            Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
            None => (mantissa, ""),
        };
        if frac_part.contains('.') {
            return Err(fail("more than one decimal point"));
        }
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(fail("invalid character in mantissa"));
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(fail("no digits in mantissa"));
        }

        let exponent: i64 = match exponent {
            None => 0,
            Some(e) => {
                let (exp_negative, digits) = match e.as_bytes().first() {
                    Some(b'-') => (true, &e[1..]),
                    Some(b'+') => (false, &e[1..]),
                    _ => (false, e),
                };
                if digits.is_empty() {
                    return Err(fail("missing exponent digits"));
                }
                if !all_digits(digits) {
                    return Err(fail("invalid character in exponent"));
                }
                let magnitude = digits
                    .parse::<u32>()
                    .ok()
                    .filter(|&m| m <= MAX_DECIMAL_EXPONENT)
                    .ok_or_else(|| fail("exponent out of range"))?;
                if exp_negative {
                    -i64::from(magnitude)
                } else {
                    i64::from(magnitude)
                }
            }
        };

        let mut numerator = BigUint::from_str_radix(&format!("{int_part}{frac_part}"), 10)?;
        let mut denominator = if frac_part.is_empty() {
            BigUint::one()
        } else {
            BigUint::new(10).pow(frac_part.len() as u64)
        };
        if exponent != 0 {
            let scale = BigUint::new(10).pow(exponent.unsigned_abs());
            if exponent > 0 {
                numerator *= scale;
            } else {
                denominator *= scale;
            }
        }
        Ok(Self::from_raw(negative, numerator, denominator, max_bits))
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parses under [`DEFAULT_MAX_BITS`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_bounded(s, DEFAULT_MAX_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::from_i64s(n, d).unwrap()
    }

    fn parse(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse("123"), frac(123, 1));
        assert_eq!(parse("-456"), frac(-456, 1));
        assert_eq!(parse("+7"), frac(7, 1));
        assert_eq!(parse("-0"), Fraction::zero());
    }

    #[test]
    fn test_decimals() {
        assert_eq!(parse("2149.1413"), frac(21_491_413, 10_000));
        assert_eq!(parse("-2149.1413"), frac(-21_491_413, 10_000));
        assert_eq!(parse(".5"), frac(1, 2));
        assert_eq!(parse("5."), frac(5, 1));
        assert_eq!(parse("0.000"), Fraction::zero());
    }

    #[test]
    fn test_scientific() {
        assert_eq!(parse("1.13e3"), frac(1130, 1));
        assert_eq!(parse("1.13e+3"), frac(1130, 1));
        assert_eq!(parse("1.13E-3"), frac(113, 100_000));
        assert_eq!(parse("1.e-3"), frac(1, 1000));
        assert_eq!(parse("-1.13e+3"), frac(-1130, 1));
        assert_eq!(parse("25e-1"), frac(5, 2));
        assert_eq!(parse("1e0"), frac(1, 1));
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        for bad in [
            "", "-", "+", ".", "1.2.3", "1e", "1e+", "1e-", "1x", "1e5e5", "--1", "1-2", "e5",
            "1e1.5", " 1", "1 ",
        ] {
            assert!(
                matches!(bad.parse::<Fraction>(), Err(FractionError::Parse { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_huge_exponent_is_rejected() {
        for huge in ["1e4000000000", "1e-4000000000", "1e1000001", "2.5E+99999999999"] {
            assert_eq!(
                huge.parse::<Fraction>(),
                Err(FractionError::Parse {
                    input: huge.to_string(),
                    reason: "exponent out of range"
                })
            );
        }
        assert_eq!(parse("1e300"), Fraction::from(10u32).powi(300).unwrap());
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = "1.2.3".parse::<Fraction>().unwrap_err();
        assert_eq!(
            err,
            FractionError::Parse {
                input: "1.2.3".to_string(),
                reason: "more than one decimal point"
            }
        );
    }

    #[test]
    fn test_parse_bounded_caps_precision() {
        let digits = "0.1234567890123456789012345678901234567890";
        let exact = parse(digits);
        let capped = Fraction::parse_bounded(digits, 32).unwrap();
        assert_ne!(exact, capped);
        assert_eq!(capped.max_bits(), 32);
        assert!(capped.numerator().bit_len() <= 32);
    }
}
