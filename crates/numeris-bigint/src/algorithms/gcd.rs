//! Greatest common divisor and least common multiple.

use num_traits::Zero;

use crate::uint::BigUint;

/// Bit-length gap above which a binary GCD step reduces by remainder
/// instead of subtraction.
pub const GCD_MODULO_GAP_BITS: u64 = 32;

impl BigUint {
    /// Computes the greatest common divisor with the binary GCD algorithm.
    ///
    /// The shared power of two is factored out up front and restored at the
    /// end. Each step subtracts the smaller odd operand from the larger one,
    /// or takes the remainder when their bit lengths differ by more than
    /// [`GCD_MODULO_GAP_BITS`].
    ///
    /// `gcd(a, 0) == a` and `gcd(0, 0) == 0`.
    #[must_use]
    pub fn gcd(&self, other: &BigUint) -> BigUint {
        let (Some(a_zeros), Some(b_zeros)) = (self.trailing_zeros(), other.trailing_zeros()) else {
            return if self.is_zero() {
                other.clone()
            } else {
                self.clone()
            };
        };
        let shared = a_zeros.min(b_zeros);

        let mut a = self >> a_zeros;
        let mut b = other >> b_zeros;
        loop {
            if a > b {
                std::mem::swap(&mut a, &mut b);
            }
            // both odd, a <= b
            if b.bit_len() - a.bit_len() > GCD_MODULO_GAP_BITS {
                b = &b % &a;
            } else {
                b -= &a;
            }
            match b.trailing_zeros() {
                Some(zeros) => b >>= zeros,
                None => break,
            }
        }
        a << shared
    }

    /// Computes the least common multiple, `a·b / gcd(a, b)`.
    ///
    /// Returns zero if either operand is zero.
    #[must_use]
    pub fn lcm(&self, other: &BigUint) -> BigUint {
        if self.is_zero() || other.is_zero() {
            return BigUint::zero();
        }
        (self / &self.gcd(other)) * other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn test_gcd_with_zero() {
        let a = BigUint::new(84);
        assert_eq!(a.gcd(&BigUint::zero()), a);
        assert_eq!(BigUint::zero().gcd(&a), a);
        assert!(BigUint::zero().gcd(&BigUint::zero()).is_zero());
    }

    #[test]
    fn test_gcd_small() {
        assert_eq!(BigUint::new(48).gcd(&BigUint::new(18)), BigUint::new(6));
        assert_eq!(BigUint::new(17).gcd(&BigUint::new(5)), BigUint::one());
        assert_eq!(BigUint::new(64).gcd(&BigUint::new(96)), BigUint::new(32));
        assert_eq!(BigUint::new(9).gcd(&BigUint::new(9)), BigUint::new(9));
    }

    #[test]
    fn test_gcd_skewed_magnitudes_uses_remainder() {
        // 3^5 · 2^300 + 3^5 against 3^5: gap far beyond the subtraction window
        let small = BigUint::new(243);
        let big = &(&small << 300) + &small;
        assert_eq!(big.gcd(&small), small);
        assert_eq!(small.gcd(&big), small);
    }

    #[test]
    fn test_gcd_restores_shared_power_of_two() {
        let a = BigUint::new(3 * 7) << 100;
        let b = BigUint::new(7 * 11) << 40;
        assert_eq!(a.gcd(&b), BigUint::new(7) << 40);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(BigUint::new(4).lcm(&BigUint::new(6)), BigUint::new(12));
        assert!(BigUint::new(4).lcm(&BigUint::zero()).is_zero());
        let a = BigUint::one() << 70;
        let b = BigUint::new(3) << 10;
        assert_eq!(a.lcm(&b), BigUint::new(3) << 70);
    }
}
