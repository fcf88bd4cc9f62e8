//! Multiplication.
//!
//! Schoolbook multiplication is O(n·m) and wins for small operands.
//! Karatsuba splits the operands at the midpoint of the longer one and
//! replaces four half-size products with three, achieving O(n^1.58).

use std::ops::{Mul, MulAssign};

use num_traits::Zero;
use tracing::trace;

use crate::arith::{add_limbs, add_limbs_at, sub_limbs};
use crate::uint::{trim_limbs, BigUint, DoubleLimb, Limb, LIMB_BITS};

/// Combined limb count above which multiplication switches to Karatsuba.
pub const KARATSUBA_THRESHOLD: usize = 128;

/// Per-operand limb count at or below which Karatsuba recursion falls
/// back to schoolbook multiplication.
pub const KARATSUBA_BASE_CASE: usize = 64;

/// Multiplies two limb slices, selecting the algorithm by combined size.
///
/// Returns an empty vector if either operand is zero.
pub(crate) fn mul_limbs(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let a = trim_limbs(a);
    let b = trim_limbs(b);
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    if a.len() + b.len() > KARATSUBA_THRESHOLD {
        trace!(a_limbs = a.len(), b_limbs = b.len(), "karatsuba multiplication");
        karatsuba_mul(a, b)
    } else {
        schoolbook_mul(a, b)
    }
}

/// Schoolbook multiplication: O(n·m).
///
/// The result has `a.len() + b.len()` limbs and may carry leading zeros.
#[must_use]
pub fn schoolbook_mul(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry: DoubleLimb = 0;
        for (j, &y) in b.iter().enumerate() {
            let product = DoubleLimb::from(x) * DoubleLimb::from(y)
                + DoubleLimb::from(result[i + j])
                + carry;
            #[allow(clippy::cast_possible_truncation)]
            {
                result[i + j] = product as Limb;
            }
            carry = product >> LIMB_BITS;
        }
        #[allow(clippy::cast_possible_truncation)]
        {
            result[i + b.len()] = carry as Limb;
        }
    }
    result
}

/// Karatsuba multiplication.
///
/// Splits both operands at half the longer operand's limb count:
/// `a = a1·B^h + a0`, `b = b1·B^h + b0`, then
/// `a·b = z2·B^2h + (z1 - z2 - z0)·B^h + z0` with `z0 = a0·b0`,
/// `z2 = a1·b1` and `z1 = (a0 + a1)·(b0 + b1)`. Sub-products go through
/// the size dispatch again, so recursion bottoms out in schoolbook.
///
/// The result has `a.len() + b.len()` limbs and may carry leading zeros.
#[must_use]
pub fn karatsuba_mul(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let a = trim_limbs(a);
    let b = trim_limbs(b);
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let n = a.len().max(b.len());
    if n <= KARATSUBA_BASE_CASE {
        return schoolbook_mul(a, b);
    }

    let half = (n + 1) / 2;
    let (a0, a1) = split_at_limb(a, half);
    let (b0, b1) = split_at_limb(b, half);

    let z0 = mul_limbs(a0, b0);
    let z2 = mul_limbs(a1, b1);

    let mut a01 = a0.to_vec();
    add_limbs(&mut a01, a1);
    let mut b01 = b0.to_vec();
    add_limbs(&mut b01, b1);

    // z1 = (a0+a1)(b0+b1) - z0 - z2 = a0·b1 + a1·b0, never negative
    let mut z1 = mul_limbs(&a01, &b01);
    sub_limbs(&mut z1, trim_limbs(&z0));
    sub_limbs(&mut z1, trim_limbs(&z2));

    let mut result = vec![0; a.len() + b.len()];
    add_limbs_at(&mut result, trim_limbs(&z0), 0);
    add_limbs_at(&mut result, trim_limbs(&z1), half);
    add_limbs_at(&mut result, trim_limbs(&z2), 2 * half);
    result
}

/// Splits at limb `at` into trimmed (low, high) halves.
fn split_at_limb(limbs: &[Limb], at: usize) -> (&[Limb], &[Limb]) {
    let at = at.min(limbs.len());
    let (low, high) = limbs.split_at(at);
    (trim_limbs(low), high)
}

impl BigUint {
    /// Multiplies using the schoolbook algorithm regardless of size.
    #[must_use]
    pub fn mul_schoolbook(&self, other: &BigUint) -> BigUint {
        BigUint::from_limbs(schoolbook_mul(self.limbs(), other.limbs()))
    }

    /// Multiplies using Karatsuba regardless of size.
    ///
    /// Operands at or below [`KARATSUBA_BASE_CASE`] limbs still use
    /// schoolbook multiplication.
    #[must_use]
    pub fn mul_karatsuba(&self, other: &BigUint) -> BigUint {
        BigUint::from_limbs(karatsuba_mul(self.limbs(), other.limbs()))
    }

    /// Returns `self²`.
    #[must_use]
    pub fn square(&self) -> BigUint {
        self * self
    }
}

impl Mul<&BigUint> for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: &BigUint) -> BigUint {
        if self.is_zero() || rhs.is_zero() {
            return BigUint::zero();
        }
        if self.is_one() {
            return rhs.clone();
        }
        if rhs.is_one() {
            return self.clone();
        }
        BigUint::from_limbs(mul_limbs(self.limbs(), rhs.limbs()))
    }
}

impl Mul<&BigUint> for BigUint {
    type Output = BigUint;

    fn mul(mut self, rhs: &BigUint) -> BigUint {
        self *= rhs;
        self
    }
}

impl Mul<BigUint> for BigUint {
    type Output = BigUint;

    fn mul(mut self, rhs: BigUint) -> BigUint {
        if self.is_one() {
            return rhs;
        }
        self *= &rhs;
        self
    }
}

impl Mul<BigUint> for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: BigUint) -> BigUint {
        rhs * self
    }
}

impl MulAssign<&BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: &BigUint) {
        if rhs.is_one() || self.is_zero() {
            return;
        }
        if rhs.is_zero() {
            self.set_zero();
            return;
        }
        if self.is_one() {
            self.clone_from(rhs);
            return;
        }
        *self = BigUint::from_limbs(mul_limbs(self.limbs(), rhs.limbs()));
    }
}

impl MulAssign<BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: BigUint) {
        if self.is_one() {
            *self = rhs;
            return;
        }
        *self *= &rhs;
    }
}
