//! Arithmetic operators and ordering.
//!
//! Magnitudes and signs are computed separately. Addition of like signs
//! and subtraction of unlike signs add magnitudes; the other two cases
//! subtract them, flipping the sign when the right-hand magnitude is
//! larger. This reproduces native signed-arithmetic sign rules.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

use crate::error::FractionError;
use crate::fraction::Fraction;

impl Fraction {
    /// `|self| + |rhs|`, keeping the sign of `self`.
    fn add_magnitudes(&mut self, rhs: &Fraction) {
        self.max_bits = self.max_bits.max(rhs.max_bits);
        self.numerator =
            &(&self.numerator * &rhs.denominator) + &(&rhs.numerator * &self.denominator);
        self.denominator = &self.denominator * &rhs.denominator;
        self.simplify();
    }

    /// `|self| - |rhs|` under the sign of `self`.
    fn sub_magnitudes(&mut self, rhs: &Fraction) {
        self.max_bits = self.max_bits.max(rhs.max_bits);
        let left = &self.numerator * &rhs.denominator;
        let right = &rhs.numerator * &self.denominator;
        if left >= right {
            self.numerator = left - right;
        } else {
            self.numerator = right - left;
            self.negative = !self.negative;
        }
        self.denominator = &self.denominator * &rhs.denominator;
        self.simplify();
    }

    /// Divides, failing on a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Fraction) -> Result<Fraction, FractionError> {
        if rhs.numerator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Fraction::from_raw(
            self.negative != rhs.negative,
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
            self.max_bits.max(rhs.max_bits),
        ))
    }

    /// Compares magnitudes by cross-multiplication.
    fn cmp_magnitudes(&self, other: &Fraction) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl AddAssign<&Fraction> for Fraction {
    fn add_assign(&mut self, rhs: &Fraction) {
        if self.negative == rhs.negative {
            self.add_magnitudes(rhs);
        } else {
            self.sub_magnitudes(rhs);
        }
    }
}

impl SubAssign<&Fraction> for Fraction {
    fn sub_assign(&mut self, rhs: &Fraction) {
        if self.negative == rhs.negative {
            self.sub_magnitudes(rhs);
        } else {
            self.add_magnitudes(rhs);
        }
    }
}

impl MulAssign<&Fraction> for Fraction {
    fn mul_assign(&mut self, rhs: &Fraction) {
        self.negative ^= rhs.negative;
        self.max_bits = self.max_bits.max(rhs.max_bits);
        self.numerator *= &rhs.numerator;
        self.denominator *= &rhs.denominator;
        self.simplify();
    }
}

impl DivAssign<&Fraction> for Fraction {
    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use [`Fraction::checked_div`] to handle it.
    fn div_assign(&mut self, rhs: &Fraction) {
        match self.checked_div(rhs) {
            Ok(quotient) => *self = quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Derives the remaining operand combinations from `OpAssign<&Fraction>`.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign:ident) => {
        impl $assign_imp<Fraction> for Fraction {
            fn $assign(&mut self, rhs: Fraction) {
                $assign_imp::$assign(self, &rhs);
            }
        }

        impl $imp<&Fraction> for Fraction {
            type Output = Fraction;

            fn $method(mut self, rhs: &Fraction) -> Fraction {
                $assign_imp::$assign(&mut self, rhs);
                self
            }
        }

        impl $imp<Fraction> for Fraction {
            type Output = Fraction;

            fn $method(mut self, rhs: Fraction) -> Fraction {
                $assign_imp::$assign(&mut self, &rhs);
                self
            }
        }

        impl $imp<&Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                let mut result = self.clone();
                $assign_imp::$assign(&mut result, rhs);
                result
            }
        }

        impl $imp<Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                let mut result = self.clone();
                $assign_imp::$assign(&mut result, &rhs);
                result
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(mut self) -> Fraction {
        if !self.numerator.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        -self.clone()
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitudes(other),
            (true, true) => other.cmp_magnitudes(self),
        }
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use numeris_bigint::BigUint;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::from_i64s(n, d).unwrap()
    }

    #[test]
    fn test_third_plus_sixth() {
        assert_eq!(frac(1, 3) + frac(1, 6), frac(1, 2));
    }

    #[test]
    fn test_add_sign_rules() {
        let cases = [
            (3, 4, 1, 4),
            (3, 4, -1, 4),
            (-3, 4, 1, 4),
            (-3, 4, -1, 4),
            (1, 4, -3, 4),
            (-1, 4, 3, 4),
            (5, 1, -5, 1),
        ];
        for (a, b, c, d) in cases {
            let expected = frac(a * d + c * b, b * d);
            assert_eq!(frac(a, b) + frac(c, d), expected, "{a}/{b} + {c}/{d}");
        }
    }

    #[test]
    fn test_sub_sign_rules() {
        let cases = [
            (3, 4, 1, 4),
            (1, 4, 3, 4),
            (-3, 4, 1, 4),
            (3, 4, -1, 4),
            (-1, 4, -3, 4),
            (-3, 4, -1, 4),
            (2, 3, 2, 3),
        ];
        for (a, b, c, d) in cases {
            let expected = frac(a * d - c * b, b * d);
            assert_eq!(frac(a, b) - frac(c, d), expected, "{a}/{b} - {c}/{d}");
        }
    }

    #[test]
    fn test_mul_div() {
        assert_eq!(frac(-2, 3) * frac(9, 4), frac(-3, 2));
        assert_eq!(frac(-2, 3) / frac(-4, 9), frac(3, 2));
        assert!((frac(-2, 3) * Fraction::zero()).is_zero());
        assert!(!(frac(-2, 3) * Fraction::zero()).is_negative());
    }

    #[test]
    fn test_checked_div_by_zero() {
        assert_eq!(
            frac(1, 2).checked_div(&Fraction::zero()),
            Err(FractionError::DivisionByZero)
        );
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = frac(1, 2) / Fraction::zero();
    }

    #[test]
    fn test_neg() {
        assert_eq!(-frac(1, 2), frac(-1, 2));
        assert_eq!(-&frac(-1, 2), frac(1, 2));
        assert!(!(-Fraction::zero()).is_negative());
    }

    #[test]
    fn test_ordering() {
        let mut values = vec![frac(1, 2), frac(-1, 3), frac(0, 1), frac(-1, 2), frac(2, 3)];
        values.sort();
        assert_eq!(
            values,
            vec![frac(-1, 2), frac(-1, 3), frac(0, 1), frac(1, 2), frac(2, 3)]
        );
        assert!(frac(-1, 2) < frac(-1, 3));
        assert!(Fraction::one() > frac(99, 100));
    }

    #[test]
    fn test_result_bound_is_max_of_operands() {
        let a = Fraction::bounded(1u32.into(), 3u32.into(), 64).unwrap();
        let b = Fraction::bounded(1u32.into(), 5u32.into(), 512).unwrap();
        assert_eq!((&a + &b).max_bits(), 512);
        assert_eq!((&a * &b).max_bits(), 512);
        assert_eq!((&b - &a).max_bits(), 512);
        assert_eq!((a / b).max_bits(), 512);
    }

    #[test]
    fn test_random_large_operands_stay_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let random_fraction = |rng: &mut ChaCha8Rng| {
            let numerator = BigUint::from_limbs((0..8).map(|_| rng.gen()).collect());
            let denominator = BigUint::from_limbs((0..8).map(|_| rng.gen()).collect());
            let negative = rng.gen::<bool>();
            Fraction::from_parts(negative, numerator, denominator, 1024)
                .unwrap_or_else(|_| Fraction::one_bounded(1024))
        };
        for _ in 0..50 {
            let a = random_fraction(&mut rng);
            let b = random_fraction(&mut rng);
            assert_eq!(&(&a + &b) - &b, a);
            if !b.is_zero() {
                assert_eq!((&a * &b).checked_div(&b).unwrap(), a);
            }
            assert_eq!(a < b, (&a - &b).is_negative());
        }
    }
}
