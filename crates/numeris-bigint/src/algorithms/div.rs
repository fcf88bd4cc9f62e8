//! Division and remainder.
//!
//! Three tiers:
//! - both operands fit in 64 bits: native `u64` division
//! - otherwise: Newton-Raphson fixed-point reciprocal, followed by a
//!   bounded correction of the candidate quotient
//! - a bit-at-a-time schoolbook long division, kept for validation
//!
//! Every tier returns the floor quotient `q` and remainder `r` with
//! `q·d <= a < (q+1)·d` and `a = q·d + r`.

use std::ops::{Div, DivAssign, Rem, RemAssign};

use num_traits::{One, Zero};
use tracing::trace;

use crate::error::BigUintError;
use crate::uint::{BigUint, DoubleLimb, Limb, LIMB_BITS};

/// Hard cap on Newton-Raphson reciprocal iterations.
pub const MAX_NEWTON_ITERATIONS: usize = 128;

/// Hard cap on quotient correction steps after the reciprocal converges.
pub const MAX_CORRECTION_STEPS: usize = 128;

/// Fractional bits kept beyond the dividend's bit length.
const RECIPROCAL_GUARD_BITS: u64 = 32;

/// Quotient and remainder.
pub type DivRem = (BigUint, BigUint);

/// Resolves the cases every tier shares.
fn trivial_div_rem(a: &BigUint, b: &BigUint) -> Result<Option<DivRem>, BigUintError> {
    if b.is_zero() {
        return Err(BigUintError::DivisionByZero);
    }
    if a.is_zero() {
        return Ok(Some((BigUint::zero(), BigUint::zero())));
    }
    if b.is_one() {
        return Ok(Some((a.clone(), BigUint::zero())));
    }
    if a < b {
        return Ok(Some((BigUint::zero(), a.clone())));
    }
    Ok(None)
}

/// Native division for operands of at most two limbs.
fn native_div_rem(a: &BigUint, b: &BigUint) -> DivRem {
    let (a, b) = (a.low_u64(), b.low_u64());
    (BigUint::new(a / b), BigUint::new(a % b))
}

/// Newton-Raphson division. Requires `a >= b > 1`.
///
/// Computes the fixed-point reciprocal `x ≈ 2^k / b` by iterating
/// `x ← x·(2·2^k − b·x) >> k` from `x0 = 2^(k − bits(b))`, which starts
/// below the true reciprocal and climbs monotonically until it stops
/// changing. The candidate `q = a·x >> k` is then corrected in both
/// directions.
fn newton_raphson_div_rem(a: &BigUint, b: &BigUint) -> Result<DivRem, BigUintError> {
    let kbits = a.bit_len() + RECIPROCAL_GUARD_BITS;
    let two_fixed = BigUint::one() << (kbits + 1);

    let mut x = BigUint::one() << (kbits - b.bit_len());
    let mut iterations = 0;
    loop {
        if iterations == MAX_NEWTON_ITERATIONS {
            return Err(BigUintError::IterationLimit {
                routine: "newton-raphson reciprocal",
                limit: MAX_NEWTON_ITERATIONS,
            });
        }
        iterations += 1;

        let bx = b * &x;
        let next = (&x * &(&two_fixed - &bx)) >> kbits;
        if next == x || next.is_zero() {
            x = next;
            break;
        }
        x = next;
    }
    trace!(iterations, kbits, "newton-raphson reciprocal converged");

    let mut q = (a * &x) >> kbits;

    let mut steps = 0;
    let mut product = &q * b;
    while product > *a {
        if steps == MAX_CORRECTION_STEPS {
            return Err(BigUintError::IterationLimit {
                routine: "newton-raphson quotient correction",
                limit: MAX_CORRECTION_STEPS,
            });
        }
        steps += 1;
        q.dec();
        product -= b;
    }
    loop {
        let next_product = &product + b;
        if next_product > *a {
            break;
        }
        if steps == MAX_CORRECTION_STEPS {
            return Err(BigUintError::IterationLimit {
                routine: "newton-raphson quotient correction",
                limit: MAX_CORRECTION_STEPS,
            });
        }
        steps += 1;
        q.inc();
        product = next_product;
    }

    let r = a - &product;
    Ok((q, r))
}

/// Bit-at-a-time long division. Requires `a >= b > 1`.
fn schoolbook_div_rem(a: &BigUint, b: &BigUint) -> DivRem {
    let shift = a.bit_len() - b.bit_len();
    let mut remainder = a.clone();
    let mut divisor = b << shift;
    #[allow(clippy::cast_possible_truncation)]
    let mut quotient: Vec<Limb> = vec![0; (shift / LIMB_BITS) as usize + 1];

    for bit in (0..=shift).rev() {
        if remainder >= divisor {
            remainder -= &divisor;
            #[allow(clippy::cast_possible_truncation)]
            {
                quotient[(bit / LIMB_BITS) as usize] |= 1 << (bit % LIMB_BITS);
            }
        }
        divisor >>= 1;
    }
    (BigUint::from_limbs(quotient), remainder)
}

impl BigUint {
    /// Computes the floor quotient and remainder.
    ///
    /// # Errors
    ///
    /// Returns [`BigUintError::DivisionByZero`] if `divisor` is zero, or
    /// [`BigUintError::IterationLimit`] if the Newton-Raphson iteration
    /// fails to settle.
    pub fn checked_div_rem(&self, divisor: &BigUint) -> Result<DivRem, BigUintError> {
        if let Some(result) = trivial_div_rem(self, divisor)? {
            return Ok(result);
        }
        if self.limb_len() <= 2 && divisor.limb_len() <= 2 {
            return Ok(native_div_rem(self, divisor));
        }
        newton_raphson_div_rem(self, divisor)
    }

    /// Computes the floor quotient.
    ///
    /// # Errors
    ///
    /// See [`BigUint::checked_div_rem`].
    pub fn checked_div(&self, divisor: &BigUint) -> Result<BigUint, BigUintError> {
        self.checked_div_rem(divisor).map(|(q, _)| q)
    }

    /// Computes the remainder.
    ///
    /// # Errors
    ///
    /// See [`BigUint::checked_div_rem`].
    pub fn checked_rem(&self, divisor: &BigUint) -> Result<BigUint, BigUintError> {
        self.checked_div_rem(divisor).map(|(_, r)| r)
    }

    /// Computes the floor quotient and remainder.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &BigUint) -> DivRem {
        match self.checked_div_rem(divisor) {
            Ok(result) => result,
            Err(err) => panic!("{err}"),
        }
    }

    /// Divides with the Newton-Raphson tier, skipping the native fast path.
    ///
    /// # Errors
    ///
    /// See [`BigUint::checked_div_rem`].
    pub fn div_rem_newton(&self, divisor: &BigUint) -> Result<DivRem, BigUintError> {
        if let Some(result) = trivial_div_rem(self, divisor)? {
            return Ok(result);
        }
        newton_raphson_div_rem(self, divisor)
    }

    /// Divides with bit-at-a-time long division.
    ///
    /// # Errors
    ///
    /// Returns [`BigUintError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem_schoolbook(&self, divisor: &BigUint) -> Result<DivRem, BigUintError> {
        if let Some(result) = trivial_div_rem(self, divisor)? {
            return Ok(result);
        }
        Ok(schoolbook_div_rem(self, divisor))
    }

    /// Divides by a single limb, returning the quotient and remainder.
    ///
    /// # Errors
    ///
    /// Returns [`BigUintError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem_limb(&self, divisor: Limb) -> Result<(BigUint, Limb), BigUintError> {
        if divisor == 0 {
            return Err(BigUintError::DivisionByZero);
        }
        let mut quotient = self.clone();
        let remainder = div_rem_limb_in_place(quotient.limbs_mut(), divisor);
        quotient.normalize();
        Ok((quotient, remainder))
    }
}

/// Divides `limbs` by a nonzero limb in place, returning the remainder.
/// Does not normalize.
pub(crate) fn div_rem_limb_in_place(limbs: &mut [Limb], divisor: Limb) -> Limb {
    let divisor = DoubleLimb::from(divisor);
    let mut remainder: DoubleLimb = 0;
    for limb in limbs.iter_mut().rev() {
        let dividend = (remainder << LIMB_BITS) | DoubleLimb::from(*limb);
        #[allow(clippy::cast_possible_truncation)]
        {
            *limb = (dividend / divisor) as Limb;
        }
        remainder = dividend % divisor;
    }
    #[allow(clippy::cast_possible_truncation)]
    let remainder = remainder as Limb;
    remainder
}

impl Div<&BigUint> for &BigUint {
    type Output = BigUint;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: &BigUint) -> BigUint {
        self.div_rem(rhs).0
    }
}

impl Rem<&BigUint> for &BigUint {
    type Output = BigUint;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: &BigUint) -> BigUint {
        self.div_rem(rhs).1
    }
}

forward_ops_via_ref!(Div, div, DivAssign, div_assign);
forward_ops_via_ref!(Rem, rem, RemAssign, rem_assign);
