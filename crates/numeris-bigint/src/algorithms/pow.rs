//! Integer exponentiation.

use num_traits::{One, Pow};

use crate::uint::BigUint;

impl BigUint {
    /// Raises `self` to `exp` by square-and-multiply.
    ///
    /// Powers of two reduce to a single shift. `0^0` is one.
    #[must_use]
    pub fn pow(&self, exp: u64) -> BigUint {
        if exp == 0 {
            return BigUint::one();
        }
        if self.is_zero() || self.is_one() || exp == 1 {
            return self.clone();
        }
        if self.is_power_of_two() {
            let zeros = self.trailing_zeros().unwrap_or(0);
            return BigUint::one() << zeros.saturating_mul(exp);
        }

        let mut base = self.clone();
        let mut result = BigUint::one();
        let mut exp = exp;
        loop {
            if exp & 1 == 1 {
                result *= &base;
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            base = base.square();
        }
        result
    }
}

impl Pow<u64> for &BigUint {
    type Output = BigUint;

    fn pow(self, exp: u64) -> BigUint {
        BigUint::pow(self, exp)
    }
}

impl Pow<u32> for &BigUint {
    type Output = BigUint;

    fn pow(self, exp: u32) -> BigUint {
        BigUint::pow(self, u64::from(exp))
    }
}
