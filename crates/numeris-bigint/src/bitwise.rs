//! Bitwise logic and shifts.
//!
//! Shifting by `k` bits moves `k / 32` whole limbs and `k % 32` bits
//! within limbs, carrying the bits that cross a limb boundary into the
//! neighbouring limb. Right shifts past the bit length produce zero.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use num_traits::Zero;

use crate::uint::{BigUint, Limb, LIMB_BITS};

impl BigUint {
    fn shl_bits(&self, shift: u64) -> BigUint {
        if shift == 0 || self.is_zero() {
            return self.clone();
        }
        let limb_shift =
            usize::try_from(shift / LIMB_BITS).expect("shift amount exceeds address space");
        #[allow(clippy::cast_possible_truncation)]
        let bit_shift = (shift % LIMB_BITS) as u32;

        let limbs = self.limbs();
        let mut out: Vec<Limb> = Vec::with_capacity(limb_shift + limbs.len() + 1);
        out.resize(limb_shift, 0);
        if bit_shift == 0 {
            out.extend_from_slice(limbs);
        } else {
            let mut carry: Limb = 0;
            for &limb in limbs {
                out.push((limb << bit_shift) | carry);
                carry = limb >> (32 - bit_shift);
            }
            if carry != 0 {
                out.push(carry);
            }
        }
        BigUint::from_limbs(out)
    }

    fn shr_bits(&self, shift: u64) -> BigUint {
        if shift == 0 {
            return self.clone();
        }
        if shift >= self.bit_len() {
            return BigUint::zero();
        }
        // shift < bit_len, so the limb index is in range.
        #[allow(clippy::cast_possible_truncation)]
        let limb_shift = (shift / LIMB_BITS) as usize;
        #[allow(clippy::cast_possible_truncation)]
        let bit_shift = (shift % LIMB_BITS) as u32;

        let src = &self.limbs()[limb_shift..];
        let out = if bit_shift == 0 {
            src.to_vec()
        } else {
            (0..src.len())
                .map(|i| {
                    let high = src.get(i + 1).map_or(0, |&h| h << (32 - bit_shift));
                    (src[i] >> bit_shift) | high
                })
                .collect()
        };
        BigUint::from_limbs(out)
    }
}

impl Shl<u64> for &BigUint {
    type Output = BigUint;

    fn shl(self, shift: u64) -> BigUint {
        self.shl_bits(shift)
    }
}

impl Shl<u64> for BigUint {
    type Output = BigUint;

    fn shl(self, shift: u64) -> BigUint {
        self.shl_bits(shift)
    }
}

impl ShlAssign<u64> for BigUint {
    fn shl_assign(&mut self, shift: u64) {
        *self = self.shl_bits(shift);
    }
}

impl Shr<u64> for &BigUint {
    type Output = BigUint;

    fn shr(self, shift: u64) -> BigUint {
        self.shr_bits(shift)
    }
}

impl Shr<u64> for BigUint {
    type Output = BigUint;

    fn shr(self, shift: u64) -> BigUint {
        self.shr_bits(shift)
    }
}

impl ShrAssign<u64> for BigUint {
    fn shr_assign(&mut self, shift: u64) {
        *self = self.shr_bits(shift);
    }
}

impl BitAnd<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitand(self, rhs: &BigUint) -> BigUint {
        let out = self
            .limbs()
            .iter()
            .zip(rhs.limbs())
            .map(|(a, b)| a & b)
            .collect();
        BigUint::from_limbs(out)
    }
}

/// Combines two limb slices, treating missing limbs as zero.
fn zip_longest(a: &[Limb], b: &[Limb], op: impl Fn(Limb, Limb) -> Limb) -> BigUint {
    let len = a.len().max(b.len());
    let out = (0..len)
        .map(|i| {
            op(
                a.get(i).copied().unwrap_or(0),
                b.get(i).copied().unwrap_or(0),
            )
        })
        .collect();
    BigUint::from_limbs(out)
}

impl BitOr<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitor(self, rhs: &BigUint) -> BigUint {
        zip_longest(self.limbs(), rhs.limbs(), |a, b| a | b)
    }
}

impl BitXor<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitxor(self, rhs: &BigUint) -> BigUint {
        zip_longest(self.limbs(), rhs.limbs(), |a, b| a ^ b)
    }
}

forward_ops_via_ref!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_ops_via_ref!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_ops_via_ref!(BitXor, bitxor, BitXorAssign, bitxor_assign);

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn test_shl_crosses_limb_boundary() {
        let n = BigUint::new(0x8000_0001);
        assert_eq!((&n << 1).limbs(), &[2, 1]);
        assert_eq!((&n << 32).limbs(), &[0, 0x8000_0001]);
        assert_eq!((&n << 33).limbs(), &[0, 2, 1]);
    }

    #[test]
    fn test_shr_crosses_limb_boundary() {
        let n = BigUint::from_limbs(vec![0, 2, 1]);
        assert_eq!((&n >> 33).limbs(), &[0x8000_0001]);
        assert_eq!((&n >> 32).limbs(), &[2, 1]);
        assert_eq!((&n >> 1).limbs(), &[0, 0x8000_0001]);
    }

    #[test]
    fn test_shr_past_bit_length_is_zero() {
        let n = BigUint::new(753);
        assert!((&n >> 10).is_zero());
        assert_eq!(&n >> 9, BigUint::one());
        assert!((n >> 1_000_000).is_zero());
    }

    #[test]
    fn test_shift_round_trip() {
        let n = BigUint::from_limbs(vec![0x1234_5678, 0x9abc_def0, 0x0fed_cba9]);
        for k in [0u64, 1, 5, 31, 32, 33, 64, 100] {
            assert_eq!((&n << k) >> k, n, "shift by {k}");
        }
    }

    #[test]
    fn test_shift_assign() {
        let mut n = BigUint::one();
        n <<= 95;
        assert_eq!(n.bit_len(), 96);
        n >>= 95;
        assert!(n.is_one());
    }

    #[test]
    fn test_bitwise_different_lengths() {
        let a = BigUint::from_limbs(vec![0b1100, 0xff]);
        let b = BigUint::new(0b1010);
        assert_eq!(&a & &b, BigUint::new(0b1000));
        assert_eq!((&a | &b).limbs(), &[0b1110, 0xff]);
        assert_eq!((&a ^ &b).limbs(), &[0b0110, 0xff]);
    }

    #[test]
    fn test_and_normalizes() {
        let a = BigUint::from_limbs(vec![1, 0xf0]);
        let b = BigUint::from_limbs(vec![2, 0x0f]);
        assert!((a & b).is_zero());
    }

    #[test]
    fn test_xor_self_is_zero() {
        let mut a = BigUint::from_limbs(vec![7, 8, 9]);
        let b = a.clone();
        a ^= b;
        assert!(a.is_zero());
    }
}
