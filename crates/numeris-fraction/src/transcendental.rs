//! Iterative approximations: square root, logarithms, exponential and
//! general power.
//!
//! Every routine takes a requested precision in bits. The result carries
//! the larger of that request and the operand's own bound; zero therefore
//! means "the operand's precision". Internally the routines run with
//! [`ApproxConfig::guard_bits`] extra bits (plus whatever the argument
//! reduction costs) and narrow the result back at the end.
//!
//! - `sqrt`: Newton-Raphson, `x ← (x + v/x) / 2`, seeded with the power of
//!   two halfway between the bit lengths of numerator and denominator
//! - `ln`: reduce `x = 2^k · m` with `m` in `[1/2, 2)`, then
//!   `ln m = 2·(y + y³/3 + y⁵/5 + …)` with `y = (m-1)/(m+1)` and
//!   `ln x = ln m + k·ln 2`
//! - `exp`: reduce `|x| / 2^k <= 1/2`, sum the Taylor series, square `k`
//!   times, and take the reciprocal for negative arguments
//! - `pow`: square-and-multiply for integer exponents, `exp(b·ln a)`
//!   otherwise

use num_traits::{One, Zero};
use numeris_bigint::BigUint;
use tracing::debug;

use crate::config::ApproxConfig;
use crate::error::FractionError;
use crate::fraction::Fraction;

/// Bit length as a signed quantity for exponent arithmetic.
#[allow(clippy::cast_possible_wrap)]
fn signed_bit_len(n: &BigUint) -> i64 {
    n.bit_len() as i64
}

/// Returns true if `|diff| · 2^bits < |reference|`.
fn within_relative(diff: &Fraction, reference: &Fraction, bits: u64) -> bool {
    if diff.numerator.is_zero() {
        return true;
    }
    (&diff.numerator * &reference.denominator) << bits < &reference.numerator * &diff.denominator
}

/// Returns true if `|value| · 2^bits < 1`.
fn below_absolute(value: &Fraction, bits: u64) -> bool {
    &value.numerator << bits < value.denominator
}

impl Fraction {
    /// Multiplies by `2^k`.
    pub(crate) fn scaled_by_power_of_two(&self, k: i64) -> Fraction {
        let mut result = self.clone();
        if k >= 0 {
            result.numerator <<= k.unsigned_abs();
        } else {
            result.denominator <<= k.unsigned_abs();
        }
        result.simplify();
        result
    }

    fn divided_by(mut self, n: u64) -> Fraction {
        self.denominator *= BigUint::new(n);
        self.simplify();
        self
    }

    /// Approximates the square root to `precision` bits.
    ///
    /// # Errors
    ///
    /// - [`FractionError::Domain`] for negative input
    /// - [`FractionError::IterationLimit`] if Newton-Raphson does not settle
    pub fn sqrt(&self, precision: u64) -> Result<Fraction, FractionError> {
        self.sqrt_with(precision, &ApproxConfig::default())
    }

    /// [`Fraction::sqrt`] with explicit tuning.
    ///
    /// # Errors
    ///
    /// See [`Fraction::sqrt`].
    pub fn sqrt_with(
        &self,
        precision: u64,
        config: &ApproxConfig,
    ) -> Result<Fraction, FractionError> {
        if self.negative {
            return Err(FractionError::Domain("square root of a negative number"));
        }
        let target = self.max_bits.max(precision);
        if self.numerator.is_zero() {
            return Ok(Fraction::zero_bounded(target));
        }
        let working = target + config.guard_bits;

        let seed_exponent =
            (signed_bit_len(&self.numerator) - signed_bit_len(&self.denominator)) / 2;
        let mut x = Fraction::one_bounded(working).scaled_by_power_of_two(seed_exponent);

        for iteration in 1..=config.max_newton_iterations {
            let quotient = self.checked_div(&x)?;
            let next = (&x + &quotient).scaled_by_power_of_two(-1);
            let converged = within_relative(&(&next - &x), &next, target);
            x = next;
            if converged {
                debug!(iteration, target, "sqrt converged");
                return Ok(x.with_precision(target));
            }
        }
        Err(FractionError::IterationLimit {
            routine: "sqrt",
            limit: config.max_newton_iterations,
        })
    }

    /// Approximates the natural logarithm to `precision` bits.
    ///
    /// # Errors
    ///
    /// - [`FractionError::Domain`] for zero or negative input
    /// - [`FractionError::IterationLimit`] if the series does not settle
    pub fn ln(&self, precision: u64) -> Result<Fraction, FractionError> {
        self.ln_with(precision, &ApproxConfig::default())
    }

    /// [`Fraction::ln`] with explicit tuning.
    ///
    /// # Errors
    ///
    /// See [`Fraction::ln`].
    pub fn ln_with(
        &self,
        precision: u64,
        config: &ApproxConfig,
    ) -> Result<Fraction, FractionError> {
        if self.negative || self.numerator.is_zero() {
            return Err(FractionError::Domain("logarithm of a non-positive number"));
        }
        let target = self.max_bits.max(precision);
        if self.numerator == self.denominator {
            return Ok(Fraction::zero_bounded(target));
        }

        let k = signed_bit_len(&self.numerator) - signed_bit_len(&self.denominator);
        let k_bits = u64::from(u64::BITS - k.unsigned_abs().leading_zeros());
        let working = target + config.guard_bits + k_bits;
        let tolerance_bits = target + 4 + k_bits;

        let mut m = self.clone();
        m.max_bits = working;
        let mut result = ln_series(&m.scaled_by_power_of_two(-k), tolerance_bits, config)?;
        if k != 0 {
            let two = Fraction::from_raw(false, BigUint::new(2), BigUint::one(), working);
            let ln2 = ln_series(&two, tolerance_bits, config)?;
            let k_fraction =
                Fraction::from_raw(k < 0, BigUint::new(k.unsigned_abs()), BigUint::one(), working);
            result += &(&ln2 * &k_fraction);
        }
        Ok(result.with_precision(target))
    }

    /// Approximates `e^self` to `precision` bits.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::IterationLimit`] if the series does not
    /// settle.
    pub fn exp(&self, precision: u64) -> Result<Fraction, FractionError> {
        self.exp_with(precision, &ApproxConfig::default())
    }

    /// [`Fraction::exp`] with explicit tuning.
    ///
    /// # Errors
    ///
    /// See [`Fraction::exp`].
    pub fn exp_with(
        &self,
        precision: u64,
        config: &ApproxConfig,
    ) -> Result<Fraction, FractionError> {
        let target = self.max_bits.max(precision);
        if self.numerator.is_zero() {
            return Ok(Fraction::one_bounded(target));
        }

        let k = (signed_bit_len(&self.numerator) - signed_bit_len(&self.denominator) + 2)
            .max(0)
            .unsigned_abs();
        let working = target + config.guard_bits + k;
        let tolerance_bits = target + 4 + k;

        let mut reduced = self.abs();
        reduced.max_bits = working;
        #[allow(clippy::cast_possible_wrap)]
        let reduced = reduced.scaled_by_power_of_two(-(k as i64));

        let mut term = Fraction::one_bounded(working);
        let mut sum = term.clone();
        let mut converged = false;
        for n in 1..=config.max_series_terms as u64 {
            term = (term * &reduced).divided_by(n);
            if term.numerator.is_zero() || below_absolute(&term, tolerance_bits) {
                debug!(terms = n, reduction = k, target, "exp series converged");
                converged = true;
                break;
            }
            sum += &term;
        }
        if !converged {
            return Err(FractionError::IterationLimit {
                routine: "exp series",
                limit: config.max_series_terms,
            });
        }

        for _ in 0..k {
            sum = &sum * &sum;
        }
        if self.negative {
            sum = sum.recip()?;
        }
        Ok(sum.with_precision(target))
    }

    /// Approximates the logarithm of `self` in `base` as `ln(self) / ln(base)`.
    ///
    /// # Errors
    ///
    /// - [`FractionError::Domain`] if `base` is not positive, `base` is 1,
    ///   or `self` is not positive
    /// - [`FractionError::IterationLimit`] if a series does not settle
    pub fn log_base(&self, base: &Fraction, precision: u64) -> Result<Fraction, FractionError> {
        self.log_base_with(base, precision, &ApproxConfig::default())
    }

    /// [`Fraction::log_base`] with explicit tuning.
    ///
    /// # Errors
    ///
    /// See [`Fraction::log_base`].
    pub fn log_base_with(
        &self,
        base: &Fraction,
        precision: u64,
        config: &ApproxConfig,
    ) -> Result<Fraction, FractionError> {
        if base.negative || base.numerator.is_zero() || base.numerator == base.denominator {
            return Err(FractionError::Domain("logarithm base must be positive and not 1"));
        }
        if self.negative || self.numerator.is_zero() {
            return Err(FractionError::Domain("logarithm of a non-positive number"));
        }
        let target = self.max_bits.max(base.max_bits).max(precision);
        let working = target + config.guard_bits;
        let ln_x = self.ln_with(working, config)?;
        let ln_base = base.ln_with(working, config)?;
        Ok(ln_x.checked_div(&ln_base)?.with_precision(target))
    }

    /// Raises `self` to a rational power.
    ///
    /// Integer exponents are exact (up to the precision cap) via
    /// square-and-multiply; other exponents use `exp(b·ln a)`. A negative
    /// base is accepted when the exponent's denominator is odd, giving the
    /// real root with the sign of `(-1)^numerator`. The result bound is the
    /// larger of the operands' bounds.
    ///
    /// # Errors
    ///
    /// - [`FractionError::Domain`] for zero to a non-positive power, or a
    ///   negative base with an even-denominator exponent
    /// - [`FractionError::IterationLimit`] if a series does not settle
    pub fn pow(&self, exponent: &Fraction) -> Result<Fraction, FractionError> {
        self.pow_with(exponent, &ApproxConfig::default())
    }

    /// [`Fraction::pow`] with explicit tuning.
    ///
    /// # Errors
    ///
    /// See [`Fraction::pow`].
    pub fn pow_with(
        &self,
        exponent: &Fraction,
        config: &ApproxConfig,
    ) -> Result<Fraction, FractionError> {
        let target = self.max_bits.max(exponent.max_bits);
        if self.numerator.is_zero() {
            if exponent.negative || exponent.numerator.is_zero() {
                return Err(FractionError::Domain("zero to a non-positive power"));
            }
            return Ok(Fraction::zero_bounded(target));
        }
        if exponent.numerator.is_zero() {
            return Ok(Fraction::one_bounded(target));
        }
        if self.negative {
            if exponent.denominator.is_even() {
                return Err(FractionError::Domain(
                    "negative base with an even-denominator exponent",
                ));
            }
            let magnitude = self.abs().pow_with(exponent, config)?;
            return Ok(if exponent.numerator.is_odd() {
                -magnitude
            } else {
                magnitude
            });
        }
        if exponent.is_integer() {
            return self.pow_biguint(&exponent.numerator, exponent.negative, target, config);
        }
        if self.numerator == self.denominator {
            return Ok(Fraction::one_bounded(target));
        }

        let working = target + config.guard_bits;
        let ln = self.ln_with(working, config)?;
        let product = &ln * exponent;
        Ok(product.exp_with(working, config)?.with_precision(target))
    }

    /// Raises `self` to an integer power by square-and-multiply.
    ///
    /// `0^0` is one. The result keeps the bound of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] for zero to a negative power.
    pub fn powi(&self, exponent: i64) -> Result<Fraction, FractionError> {
        self.powi_with(exponent, &ApproxConfig::default())
    }

    /// [`Fraction::powi`] with explicit tuning.
    ///
    /// # Errors
    ///
    /// See [`Fraction::powi`].
    pub fn powi_with(
        &self,
        exponent: i64,
        config: &ApproxConfig,
    ) -> Result<Fraction, FractionError> {
        self.pow_biguint(&BigUint::from(exponent), exponent < 0, self.max_bits, config)
    }

    /// Square-and-multiply with one guard bit per squaring on top of the
    /// configured guard bits.
    fn pow_biguint(
        &self,
        exponent: &BigUint,
        reciprocal: bool,
        bound: u64,
        config: &ApproxConfig,
    ) -> Result<Fraction, FractionError> {
        let bits = exponent.bit_len();
        let working = bound + config.guard_bits + bits;
        let mut base = self.clone();
        base.max_bits = working;
        let mut result = Fraction::one_bounded(working);
        for i in 0..bits {
            if exponent.bit(i) {
                result *= &base;
            }
            if i + 1 < bits {
                base = &base * &base;
            }
        }
        if reciprocal {
            result = result.recip()?;
        }
        Ok(result.with_precision(bound))
    }
}

/// `ln m = 2·(y + y³/3 + y⁵/5 + …)` with `y = (m-1)/(m+1)`, summed until a
/// term drops below `2^-tolerance_bits`.
fn ln_series(
    m: &Fraction,
    tolerance_bits: u64,
    config: &ApproxConfig,
) -> Result<Fraction, FractionError> {
    let one = Fraction::one_bounded(m.max_bits);
    let y = (m - &one).checked_div(&(m + &one))?;
    let y_squared = &y * &y;
    let mut power = y.clone();
    let mut sum = y;

    for (terms, n) in (3u64..).step_by(2).take(config.max_series_terms).enumerate() {
        power *= &y_squared;
        let term = power.clone().divided_by(n);
        if term.numerator.is_zero() || below_absolute(&term, tolerance_bits) {
            debug!(terms, tolerance_bits, "ln series converged");
            return Ok(sum.scaled_by_power_of_two(1));
        }
        sum += &term;
    }
    Err(FractionError::IterationLimit {
        routine: "ln series",
        limit: config.max_series_terms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::from_i64s(n, d).unwrap()
    }

    fn assert_close(actual: &Fraction, expected: &Fraction, bits: u64) {
        let diff = actual - expected;
        assert!(
            within_relative(&diff, expected, bits),
            "{actual:?} is not within 2^-{bits} of {expected:?}"
        );
    }

    #[test]
    fn test_sqrt_exact_squares() {
        assert_eq!(frac(4, 1).sqrt(0).unwrap(), frac(2, 1));
        assert_eq!(frac(1, 4).sqrt(0).unwrap(), frac(1, 2));
        assert!(Fraction::zero().sqrt(64).unwrap().is_zero());
    }

    #[test]
    fn test_sqrt_two() {
        let root = frac(2, 1).sqrt(128).unwrap();
        assert_eq!(
            root.to_scientific(30, false),
            "1.414213562373095048801688724209e+0"
        );
        assert_close(&(&root * &root), &frac(2, 1), 120);
    }

    #[test]
    fn test_sqrt_large_and_small() {
        let big: Fraction = "1e40".parse().unwrap();
        assert_close(&big.sqrt(0).unwrap(), &"1e20".parse().unwrap(), 200);
        let small: Fraction = "1e-40".parse().unwrap();
        assert_close(&small.sqrt(0).unwrap(), &"1e-20".parse().unwrap(), 200);
    }

    #[test]
    fn test_sqrt_negative_is_domain_error() {
        assert!(matches!(frac(-4, 1).sqrt(0), Err(FractionError::Domain(_))));
    }

    #[test]
    fn test_sqrt_iteration_limit() {
        let config = ApproxConfig::default().with_max_newton_iterations(1);
        assert_eq!(
            frac(2, 1).sqrt_with(64, &config),
            Err(FractionError::IterationLimit {
                routine: "sqrt",
                limit: 1
            })
        );
    }

    #[test]
    fn test_result_bound() {
        let x = Fraction::bounded(BigUint::new(2), BigUint::one(), 64).unwrap();
        assert_eq!(x.sqrt(0).unwrap().max_bits(), 64);
        assert_eq!(x.sqrt(300).unwrap().max_bits(), 300);
        assert_eq!(x.ln(128).unwrap().max_bits(), 128);
    }

    #[test]
    fn test_ln_one_is_zero() {
        assert!(frac(1, 1).ln(64).unwrap().is_zero());
    }

    #[test]
    fn test_ln_known_values() {
        let ln2 = frac(2, 1).ln(128).unwrap();
        assert_eq!(ln2.to_scientific(25, false), "6.9314718055994530941723212e-1");
        let ln_half = frac(1, 2).ln(128).unwrap();
        assert_eq!(ln_half, -ln2);
        let ln10 = frac(10, 1).ln(128).unwrap();
        assert_eq!(ln10.to_scientific(20, false), "2.30258509299404568401e+0");
    }

    #[test]
    fn test_ln_domain() {
        assert!(matches!(Fraction::zero().ln(64), Err(FractionError::Domain(_))));
        assert!(matches!(frac(-2, 1).ln(64), Err(FractionError::Domain(_))));
    }

    #[test]
    fn test_exp_known_values() {
        assert!(Fraction::zero().exp(64).unwrap().is_one());
        let e = frac(1, 1).exp(128).unwrap();
        assert_eq!(e.to_scientific(25, false), "2.7182818284590452353602874e+0");
        let inv_e = frac(-1, 1).exp(128).unwrap();
        assert_eq!(inv_e.to_scientific(20, false), "3.67879441171442321595e-1");
    }

    #[test]
    fn test_exp_inverts_ln() {
        for (n, d) in [(3, 1), (1, 7), (1000, 3)] {
            let x = frac(n, d);
            let round_trip = x.ln(160).unwrap().exp(160).unwrap();
            assert_close(&round_trip, &x, 128);
        }
    }

    #[test]
    fn test_exp_series_limit() {
        let config = ApproxConfig::default().with_max_series_terms(2);
        assert!(matches!(
            frac(1, 1).exp_with(64, &config),
            Err(FractionError::IterationLimit { routine: "exp series", .. })
        ));
    }

    #[test]
    fn test_log_base() {
        assert_close(&frac(8, 1).log_base(&frac(2, 1), 64).unwrap(), &frac(3, 1), 60);
        assert_close(&frac(1, 100).log_base(&frac(10, 1), 64).unwrap(), &frac(-2, 1), 60);
        assert!(matches!(
            frac(8, 1).log_base(&frac(1, 1), 64),
            Err(FractionError::Domain(_))
        ));
        assert!(matches!(
            frac(8, 1).log_base(&frac(-2, 1), 64),
            Err(FractionError::Domain(_))
        ));
        assert!(matches!(
            Fraction::zero().log_base(&frac(2, 1), 64),
            Err(FractionError::Domain(_))
        ));
    }

    #[test]
    fn test_pow_integer_exponents() {
        assert_eq!(frac(2, 1).pow(&frac(10, 1)).unwrap(), frac(1024, 1));
        assert_eq!(frac(2, 1).pow(&frac(-2, 1)).unwrap(), frac(1, 4));
        assert_eq!(frac(-3, 2).pow(&frac(3, 1)).unwrap(), frac(-27, 8));
        assert_eq!(frac(-1, 1).pow(&frac(2, 1)).unwrap(), frac(1, 1));
        assert_eq!(frac(-1, 1).pow(&frac(3, 1)).unwrap(), frac(-1, 1));
        assert_eq!(frac(7, 3).pow(&Fraction::zero()).unwrap(), frac(1, 1));
    }

    #[test]
    fn test_pow_rational_exponents() {
        assert_close(&frac(4, 1).pow(&frac(1, 2)).unwrap(), &frac(2, 1), 200);
        assert_close(&frac(-8, 1).pow(&frac(1, 3)).unwrap(), &frac(-2, 1), 200);
        assert_close(&frac(-8, 1).pow(&frac(2, 3)).unwrap(), &frac(4, 1), 200);
        assert_close(&frac(27, 8).pow(&frac(-2, 3)).unwrap(), &frac(4, 9), 200);
    }

    #[test]
    fn test_pow_domain_errors() {
        assert!(matches!(
            Fraction::zero().pow(&frac(-1, 1)),
            Err(FractionError::Domain(_))
        ));
        assert!(matches!(
            Fraction::zero().pow(&Fraction::zero()),
            Err(FractionError::Domain(_))
        ));
        assert!(Fraction::zero().pow(&frac(2, 1)).unwrap().is_zero());
        assert!(matches!(
            frac(-8, 1).pow(&frac(1, 2)),
            Err(FractionError::Domain(_))
        ));
    }

    #[test]
    fn test_powi() {
        assert_eq!(frac(-3, 1).powi(3).unwrap(), frac(-27, 1));
        assert_eq!(frac(2, 3).powi(-2).unwrap(), frac(9, 4));
        assert!(Fraction::zero().powi(0).unwrap().is_one());
        assert_eq!(Fraction::zero().powi(-1), Err(FractionError::DivisionByZero));
    }

    #[test]
    fn test_powi_keeps_full_precision_under_a_small_bound() {
        let bounded = |bits| Fraction::bounded(BigUint::new(7), BigUint::new(5), bits).unwrap();
        let exact = bounded(4096).powi(1000).unwrap();
        assert_eq!(exact.numerator(), &BigUint::new(7).pow(1000));
        let approx = bounded(64).powi(1000).unwrap();
        assert_eq!(approx.max_bits(), 64);
        assert_close(&approx, &exact, 60);

        let inverse = bounded(64).powi(-1000).unwrap();
        assert_close(&inverse, &exact.recip().unwrap(), 60);
    }
}
