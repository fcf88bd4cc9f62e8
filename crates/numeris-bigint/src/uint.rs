//! Multi-precision unsigned integers.
//!
//! This module defines [`BigUint`] and the representation-level
//! operations every algorithm builds on: normalization, bit queries,
//! ordering and conversions to and from native integers.

use num_traits::{One, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;

/// One storage unit of a [`BigUint`].
pub type Limb = u32;

/// A limb-pair wide enough to hold any limb product plus carries.
pub(crate) type DoubleLimb = u64;

/// Number of bits in a [`Limb`].
pub const LIMB_BITS: u64 = 32;

/// An arbitrary precision unsigned integer.
///
/// The value is `Σ limbs[i] · 2^(32·i)`. Limbs are stored least
/// significant first and the vector is always normalized: there is no
/// leading zero limb, except for zero itself which is exactly `[0]`.
/// Because the representation is canonical, the derived `PartialEq` and
/// `Hash` agree with numeric equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigUint {
    limbs: Vec<Limb>,
}

impl BigUint {
    /// Creates a new integer from a u64.
    #[must_use]
    pub fn new(value: u64) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let low = value as Limb;
        let high = (value >> LIMB_BITS) as Limb;
        if high == 0 {
            Self { limbs: vec![low] }
        } else {
            Self {
                limbs: vec![low, high],
            }
        }
    }

    /// Creates an integer from little-endian limbs, trimming leading zeros.
    #[must_use]
    pub fn from_limbs(limbs: Vec<Limb>) -> Self {
        let mut value = Self { limbs };
        value.normalize();
        value
    }

    /// Creates an integer from a little-endian limb slice.
    #[must_use]
    pub fn from_slice(limbs: &[Limb]) -> Self {
        Self::from_limbs(limbs.to_vec())
    }

    /// Returns the little-endian limbs.
    #[must_use]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Consumes the integer, returning its limbs.
    #[must_use]
    pub fn into_limbs(self) -> Vec<Limb> {
        self.limbs
    }

    /// Returns the number of stored limbs (1 for zero).
    #[must_use]
    pub fn limb_len(&self) -> usize {
        self.limbs.len()
    }

    /// Returns the number of bits needed to represent this integer.
    ///
    /// Zero has a bit length of 0.
    #[must_use]
    pub fn bit_len(&self) -> u64 {
        let top = self.top_limb();
        if top == 0 {
            return 0;
        }
        (self.limbs.len() as u64 - 1) * LIMB_BITS + (LIMB_BITS - u64::from(top.leading_zeros()))
    }

    /// Returns true if this integer is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// Returns true if this integer is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 1
    }

    /// Returns true if the lowest bit is clear.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.limbs[0] & 1 == 0
    }

    /// Returns true if the lowest bit is set.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Tests bit `index`. Bits past the top are zero.
    #[must_use]
    pub fn bit(&self, index: u64) -> bool {
        let limb = usize::try_from(index / LIMB_BITS).unwrap_or(usize::MAX);
        self.limbs
            .get(limb)
            .is_some_and(|l| (l >> (index % LIMB_BITS)) & 1 == 1)
    }

    /// Sets or clears bit `index`, growing the integer as needed.
    ///
    /// # Panics
    ///
    /// Panics if `index` addresses a limb beyond `usize::MAX`.
    pub fn set_bit(&mut self, index: u64, value: bool) {
        let limb = usize::try_from(index / LIMB_BITS).expect("bit index exceeds address space");
        let mask: Limb = 1 << (index % LIMB_BITS);
        if value {
            if limb >= self.limbs.len() {
                self.limbs.resize(limb + 1, 0);
            }
            self.limbs[limb] |= mask;
        } else if limb < self.limbs.len() {
            self.limbs[limb] &= !mask;
            self.normalize();
        }
    }

    /// Returns the number of trailing zero bits, or `None` for zero.
    #[must_use]
    pub fn trailing_zeros(&self) -> Option<u64> {
        let (index, limb) = self.limbs.iter().enumerate().find(|(_, &l)| l != 0)?;
        Some(index as u64 * LIMB_BITS + u64::from(limb.trailing_zeros()))
    }

    /// Returns the number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> u64 {
        self.limbs.iter().map(|l| u64::from(l.count_ones())).sum()
    }

    /// Returns true if exactly one bit is set.
    #[must_use]
    pub fn is_power_of_two(&self) -> bool {
        self.count_ones() == 1
    }

    /// Returns the low 64 bits.
    #[must_use]
    pub fn low_u64(&self) -> u64 {
        let low = DoubleLimb::from(self.limbs[0]);
        let high = self.limbs.get(1).copied().map_or(0, DoubleLimb::from);
        low | (high << LIMB_BITS)
    }

    /// Returns the low 64 bits, discarding the rest.
    #[must_use]
    pub fn to_u64_wrapping(&self) -> u64 {
        self.low_u64()
    }

    /// Returns the low 32 bits, discarding the rest.
    #[must_use]
    pub fn to_u32_wrapping(&self) -> u32 {
        self.limbs[0]
    }

    /// Returns the low 16 bits, discarding the rest.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_u16_wrapping(&self) -> u16 {
        self.limbs[0] as u16
    }

    /// Returns the low 8 bits, discarding the rest.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_u8_wrapping(&self) -> u8 {
        self.limbs[0] as u8
    }

    /// Returns the low bits as a `usize`, discarding the rest.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_usize_wrapping(&self) -> usize {
        self.low_u64() as usize
    }

    /// Reinterprets the low 64 bits as a two's complement `i64`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_i64_wrapping(&self) -> i64 {
        self.low_u64() as i64
    }

    /// Reinterprets the low 32 bits as a two's complement `i32`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_i32_wrapping(&self) -> i32 {
        self.limbs[0] as i32
    }

    /// Reinterprets the low 16 bits as a two's complement `i16`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn to_i16_wrapping(&self) -> i16 {
        self.limbs[0] as i16
    }

    /// Reinterprets the low 8 bits as a two's complement `i8`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn to_i8_wrapping(&self) -> i8 {
        self.limbs[0] as i8
    }

    /// Reinterprets the low bits as a two's complement `isize`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn to_isize_wrapping(&self) -> isize {
        self.low_u64() as isize
    }

    /// Most significant limb.
    pub(crate) fn top_limb(&self) -> Limb {
        self.limbs[self.limbs.len() - 1]
    }

    pub(crate) fn limbs_mut(&mut self) -> &mut Vec<Limb> {
        &mut self.limbs
    }

    /// Trims leading zero limbs, keeping a single limb for zero.
    pub(crate) fn normalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs[self.limbs.len() - 1] == 0 {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
    }

    pub(crate) fn set_zero(&mut self) {
        self.limbs.clear();
        self.limbs.push(0);
    }
}

/// Compares two normalized limb slices.
pub(crate) fn cmp_limbs(a: &[Limb], b: &[Limb]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x.cmp(y);
        }
    }
    Ordering::Equal
}

/// Returns `limbs` without its leading zero limbs. Zero becomes empty.
pub(crate) fn trim_limbs(limbs: &[Limb]) -> &[Limb] {
    let len = limbs.iter().rposition(|&l| l != 0).map_or(0, |i| i + 1);
    &limbs[..len]
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_limbs(&self.limbs, &other.limbs)
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for BigUint {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for BigUint {
    fn zero() -> Self {
        Self { limbs: vec![0] }
    }

    fn is_zero(&self) -> bool {
        BigUint::is_zero(self)
    }
}

impl One for BigUint {
    fn one() -> Self {
        Self { limbs: vec![1] }
    }

    fn is_one(&self) -> bool {
        BigUint::is_one(self)
    }
}

impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUint({self})")
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigUint {
                #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
                fn from(value: $t) -> Self {
                    Self::new(value as u64)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            /// Stores the magnitude; the sign is dropped.
            impl From<$t> for BigUint {
                #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
                fn from(value: $t) -> Self {
                    Self::new(value.unsigned_abs() as u64)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl ToPrimitive for BigUint {
    fn to_i64(&self) -> Option<i64> {
        self.to_u64().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        (self.limbs.len() <= 2).then(|| self.low_u64())
    }

    fn to_u128(&self) -> Option<u128> {
        if self.limbs.len() > 4 {
            return None;
        }
        Some(
            self.limbs
                .iter()
                .rev()
                .fold(0u128, |acc, &l| (acc << LIMB_BITS) | u128::from(l)),
        )
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn to_f64(&self) -> Option<f64> {
        let bits = self.bit_len();
        if bits <= 64 {
            return Some(self.low_u64() as f64);
        }
        let shift = bits - 64;
        let top = (self >> shift).low_u64() as f64;
        Some(top * 2f64.powi(i32::try_from(shift).unwrap_or(i32::MAX)))
    }
}
