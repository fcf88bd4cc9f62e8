//! Property-based tests for the integer kernel.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{BigUint, Limb, KARATSUBA_THRESHOLD};

    // Strategy for integers of up to `max_limbs` limbs
    fn big(max_limbs: usize) -> impl Strategy<Value = BigUint> {
        prop::collection::vec(any::<Limb>(), 0..=max_limbs).prop_map(BigUint::from_limbs)
    }

    // Strategy for non-zero integers
    fn non_zero_big(max_limbs: usize) -> impl Strategy<Value = BigUint> {
        big(max_limbs).prop_map(|n| if n.is_zero() { BigUint::one() } else { n })
    }

    // Operands straddling the Karatsuba threshold
    fn karatsuba_sized() -> impl Strategy<Value = BigUint> {
        let half = KARATSUBA_THRESHOLD / 2;
        prop::collection::vec(any::<Limb>(), half - 4..=half + 40).prop_map(BigUint::from_limbs)
    }

    proptest! {
        #[test]
        fn radix_round_trip(n in big(8), radix in 2u32..=36) {
            let s = n.to_str_radix(radix).unwrap();
            prop_assert_eq!(BigUint::from_str_radix(&s, radix).unwrap(), n);
        }

        #[test]
        fn radix_output_has_no_leading_zero(n in non_zero_big(6), radix in 2u32..=36) {
            let s = n.to_str_radix(radix).unwrap();
            prop_assert!(!s.starts_with('0'));
        }

        #[test]
        fn add_then_sub(a in big(10), b in big(10)) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn add_commutative(a in big(10), b in big(10)) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn sub_saturates(a in big(6), b in big(6)) {
            let diff = &a - &b;
            if a < b {
                prop_assert!(diff.is_zero());
            } else {
                prop_assert_eq!(diff + b, a);
            }
        }

        #[test]
        fn mul_distributes(a in big(6), b in big(6), c in big(6)) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn karatsuba_matches_schoolbook(a in karatsuba_sized(), b in karatsuba_sized()) {
            prop_assert_eq!(a.mul_karatsuba(&b), a.mul_schoolbook(&b));
            prop_assert_eq!(&a * &b, a.mul_schoolbook(&b));
        }

        #[test]
        fn div_rem_identity(a in big(12), b in non_zero_big(8)) {
            let (q, r) = a.div_rem(&b);
            prop_assert!(r < b);
            prop_assert_eq!(&(&q * &b) + &r, a);
        }

        #[test]
        fn mul_then_div(a in big(10), b in non_zero_big(10)) {
            prop_assert_eq!(&(&a * &b) / &b, a);
        }

        #[test]
        fn newton_matches_schoolbook(a in big(16), b in non_zero_big(10)) {
            prop_assert_eq!(a.div_rem_newton(&b).unwrap(), a.div_rem_schoolbook(&b).unwrap());
        }

        #[test]
        fn shifts_are_powers_of_two(a in big(6), k in 0u64..200) {
            prop_assert_eq!(&a << k, &a * &(BigUint::one() << k));
            prop_assert_eq!(&a >> k, &a / &(BigUint::one() << k));
        }

        #[test]
        fn gcd_with_zero_and_self(a in big(8)) {
            prop_assert_eq!(a.gcd(&BigUint::zero()), a.clone());
            prop_assert_eq!(a.gcd(&a), a);
        }

        #[test]
        fn gcd_divides_both(a in non_zero_big(8), b in non_zero_big(8)) {
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
            let (a_red, b_red) = (&a / &g, &b / &g);
            prop_assert!(a_red.gcd(&b_red).is_one());
        }

        #[test]
        fn gcd_times_lcm(a in non_zero_big(5), b in non_zero_big(5)) {
            prop_assert_eq!(&a.gcd(&b) * &a.lcm(&b), &a * &b);
        }

        #[test]
        fn pow_adds_exponents(a in big(3), m in 0u64..12, n in 0u64..12) {
            prop_assert_eq!(&a.pow(m) * &a.pow(n), a.pow(m + n));
        }
    }
}
