//! Property-based tests for fractions.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use numeris_bigint::BigUint;
    use proptest::prelude::*;

    use crate::Fraction;

    // Strategy for exact fractions with word-sized terms
    fn fraction() -> impl Strategy<Value = Fraction> {
        (any::<i64>(), 1..=i64::MAX).prop_map(|(n, d)| Fraction::from_i64s(n, d).unwrap())
    }

    fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
        fraction().prop_map(|f| if f.is_zero() { Fraction::one() } else { f })
    }

    // Strategy for terminating decimals n / 10^k
    fn decimal() -> impl Strategy<Value = Fraction> {
        (any::<i64>(), 0u64..12).prop_map(|(n, k)| {
            let negative = n < 0;
            let denominator = BigUint::new(10).pow(k);
            Fraction::from_parts(negative, BigUint::from(n), denominator, crate::DEFAULT_MAX_BITS)
                .unwrap()
        })
    }

    fn finite_f64() -> impl Strategy<Value = f64> {
        prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
    }

    proptest! {
        #[test]
        fn terms_are_coprime(f in fraction()) {
            prop_assert!(f.numerator().gcd(f.denominator()).is_one());
            if f.is_zero() {
                prop_assert!(f.denominator().is_one());
                prop_assert!(!f.is_negative());
            }
        }

        #[test]
        fn renormalizing_is_idempotent(f in fraction(), bits in 1u64..200) {
            let once = f.with_precision(bits);
            let twice = once.clone().with_precision(bits);
            prop_assert_eq!(once.numerator(), twice.numerator());
            prop_assert_eq!(once.denominator(), twice.denominator());
        }

        #[test]
        fn precision_cap_bounds_the_smaller_term(f in fraction(), bits in 1u64..64) {
            let capped = f.with_precision(bits);
            let smaller = capped.numerator().bit_len().min(capped.denominator().bit_len());
            prop_assert!(capped.is_integer() || smaller <= bits);
        }

        #[test]
        fn add_then_sub(a in fraction(), b in fraction()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn mul_then_div(a in fraction(), b in non_zero_fraction()) {
            prop_assert_eq!((&a * &b).checked_div(&b).unwrap(), a);
        }

        #[test]
        fn order_matches_difference_sign(a in fraction(), b in fraction()) {
            let diff = &a - &b;
            prop_assert_eq!(a < b, diff.is_negative());
            prop_assert_eq!(a == b, diff.is_zero());
        }

        #[test]
        fn scientific_round_trip(f in decimal()) {
            let rendered = f.to_scientific(40, false);
            prop_assert_eq!(rendered.parse::<Fraction>().unwrap(), f);
        }

        #[test]
        fn f64_round_trip(value in finite_f64()) {
            let f = Fraction::try_from(value).unwrap();
            prop_assert_eq!(f.to_f64(), value);
        }

        #[test]
        fn sqrt_squares_back(f in non_zero_fraction()) {
            let f = f.abs();
            let root = f.sqrt(128).unwrap();
            let diff = &(&root * &root) - &f;
            // |diff| < |f| * 2^-120
            let lhs = (diff.numerator() * f.denominator()) << 120;
            prop_assert!(lhs < f.numerator() * diff.denominator());
        }
    }
}
