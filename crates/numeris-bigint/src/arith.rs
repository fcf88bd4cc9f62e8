//! Addition and subtraction.
//!
//! Both ripple a carry (or borrow) across limbs through a 64-bit
//! intermediate. Subtraction is saturating: `a - b` with `a < b` is zero.
//! Use [`BigUint::checked_sub`] when the caller needs to tell the cases
//! apart.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::uint::{BigUint, DoubleLimb, Limb, LIMB_BITS};

/// Adds `b` into `a`, growing `a` as needed. Does not normalize.
pub(crate) fn add_limbs(a: &mut Vec<Limb>, b: &[Limb]) {
    if a.len() < b.len() {
        a.resize(b.len(), 0);
    }
    let mut carry: DoubleLimb = 0;
    for (i, &limb) in b.iter().enumerate() {
        let sum = DoubleLimb::from(a[i]) + DoubleLimb::from(limb) + carry;
        #[allow(clippy::cast_possible_truncation)]
        {
            a[i] = sum as Limb;
        }
        carry = sum >> LIMB_BITS;
    }
    let mut i = b.len();
    while carry != 0 && i < a.len() {
        let sum = DoubleLimb::from(a[i]) + carry;
        #[allow(clippy::cast_possible_truncation)]
        {
            a[i] = sum as Limb;
        }
        carry = sum >> LIMB_BITS;
        i += 1;
    }
    if carry != 0 {
        #[allow(clippy::cast_possible_truncation)]
        a.push(carry as Limb);
    }
}

/// Adds `b · 2^(32·offset)` into the fixed-size buffer `a`.
///
/// The caller guarantees the sum fits in `a`.
pub(crate) fn add_limbs_at(a: &mut [Limb], b: &[Limb], offset: usize) {
    let mut carry: DoubleLimb = 0;
    for (i, &limb) in b.iter().enumerate() {
        let sum = DoubleLimb::from(a[offset + i]) + DoubleLimb::from(limb) + carry;
        #[allow(clippy::cast_possible_truncation)]
        {
            a[offset + i] = sum as Limb;
        }
        carry = sum >> LIMB_BITS;
    }
    let mut i = offset + b.len();
    while carry != 0 {
        debug_assert!(i < a.len(), "carry escaped the result buffer");
        let sum = DoubleLimb::from(a[i]) + carry;
        #[allow(clippy::cast_possible_truncation)]
        {
            a[i] = sum as Limb;
        }
        carry = sum >> LIMB_BITS;
        i += 1;
    }
}

/// Subtracts `b` from `a` in place. Requires `a >= b`; does not normalize.
pub(crate) fn sub_limbs(a: &mut [Limb], b: &[Limb]) {
    let mut borrow: DoubleLimb = 0;
    for (i, &limb) in b.iter().enumerate() {
        let diff = DoubleLimb::from(a[i])
            .wrapping_sub(DoubleLimb::from(limb))
            .wrapping_sub(borrow);
        #[allow(clippy::cast_possible_truncation)]
        {
            a[i] = diff as Limb;
        }
        borrow = (diff >> LIMB_BITS) & 1;
    }
    let mut i = b.len();
    while borrow != 0 && i < a.len() {
        let diff = DoubleLimb::from(a[i]).wrapping_sub(borrow);
        #[allow(clippy::cast_possible_truncation)]
        {
            a[i] = diff as Limb;
        }
        borrow = (diff >> LIMB_BITS) & 1;
        i += 1;
    }
    debug_assert_eq!(borrow, 0, "subtrahend larger than minuend");
}

/// Computes `a = a · mul + add` in place. Does not normalize.
pub(crate) fn mul_add_limb(a: &mut Vec<Limb>, mul: Limb, add: Limb) {
    let mut carry = DoubleLimb::from(add);
    for limb in a.iter_mut() {
        let product = DoubleLimb::from(*limb) * DoubleLimb::from(mul) + carry;
        #[allow(clippy::cast_possible_truncation)]
        {
            *limb = product as Limb;
        }
        carry = product >> LIMB_BITS;
    }
    if carry != 0 {
        #[allow(clippy::cast_possible_truncation)]
        a.push(carry as Limb);
    }
}

impl BigUint {
    /// Computes `self = self · mul + add` for single-limb operands.
    pub fn mul_add_limb(&mut self, mul: Limb, add: Limb) {
        mul_add_limb(self.limbs_mut(), mul, add);
        self.normalize();
    }

    /// Adds one.
    pub fn inc(&mut self) {
        add_limbs(self.limbs_mut(), &[1]);
    }

    /// Subtracts one, saturating at zero.
    pub fn dec(&mut self) {
        if self.is_zero() {
            return;
        }
        sub_limbs(self.limbs_mut(), &[1]);
        self.normalize();
    }

    /// Returns `self - other`, or `None` if `other > self`.
    #[must_use]
    pub fn checked_sub(&self, other: &BigUint) -> Option<BigUint> {
        if self < other {
            return None;
        }
        let mut result = self.clone();
        sub_limbs(result.limbs_mut(), other.limbs());
        result.normalize();
        Some(result)
    }

    /// Returns `|self - other|`.
    #[must_use]
    pub fn abs_diff(&self, other: &BigUint) -> BigUint {
        if self >= other {
            self - other
        } else {
            other - self
        }
    }
}

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, rhs: &BigUint) {
        if rhs.is_zero() {
            return;
        }
        add_limbs(self.limbs_mut(), rhs.limbs());
        self.normalize();
    }
}

impl SubAssign<&BigUint> for BigUint {
    fn sub_assign(&mut self, rhs: &BigUint) {
        if *self < *rhs {
            self.set_zero();
            return;
        }
        sub_limbs(self.limbs_mut(), rhs.limbs());
        self.normalize();
    }
}

forward_ops_via_assign!(Add, add, AddAssign, add_assign);
forward_ops_via_assign!(Sub, sub, SubAssign, sub_assign);
