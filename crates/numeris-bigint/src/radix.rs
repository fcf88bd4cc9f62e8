//! Conversion between integers and strings in radix 2 through 36.
//!
//! Parsing validates every character before touching the accumulator, then
//! consumes the digits in chunks: each chunk holds as many digits as fit
//! in one limb, so the accumulator sees one multiply-add per chunk rather
//! than per digit. Rendering runs the same chunking in reverse, dividing
//! the value by the chunk's place value and emitting the remainders.
//! Radix 2 and 16 skip division entirely and read digits straight out of
//! the limbs.

use std::fmt;
use std::str::FromStr;

use num_traits::{Num, Unsigned};
use once_cell::sync::Lazy;

use crate::algorithms::div::div_rem_limb_in_place;
use crate::arith::mul_add_limb;
use crate::error::BigUintError;
use crate::uint::{BigUint, Limb};

/// Digit alphabet, lowercase.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Marks bytes that are not digits in any radix.
const NOT_A_DIGIT: u8 = u8::MAX;

/// Byte to digit value, accepting either letter case.
static DIGIT_VALUES: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut table = [NOT_A_DIGIT; 256];
    for (value, &byte) in (0u8..).zip(DIGITS.iter()) {
        table[usize::from(byte)] = value;
        table[usize::from(byte.to_ascii_uppercase())] = value;
    }
    table
});

/// How many digits of a radix fit in one limb.
#[derive(Clone, Copy, Debug)]
struct RadixChunk {
    /// Largest `d` with `radix^d <= Limb::MAX`.
    digits: usize,
    /// `radix^digits`.
    power: Limb,
}

/// Chunk constants indexed by radix; entries 0 and 1 are unused.
static RADIX_CHUNKS: Lazy<[RadixChunk; 37]> = Lazy::new(|| {
    let mut table = [RadixChunk {
        digits: 0,
        power: 1,
    }; 37];
    for (radix, entry) in table.iter_mut().enumerate().skip(2) {
        #[allow(clippy::cast_possible_truncation)]
        let radix = radix as Limb;
        let mut digits = 0;
        let mut power: Limb = 1;
        while let Some(next) = power.checked_mul(radix) {
            power = next;
            digits += 1;
        }
        *entry = RadixChunk { digits, power };
    }
    table
});

fn check_radix(radix: u32) -> Result<(), BigUintError> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(BigUintError::InvalidRadix(radix))
    }
}

fn chunk_for(radix: u32) -> RadixChunk {
    RADIX_CHUNKS[radix as usize]
}

/// Value of an ASCII digit byte, or [`NOT_A_DIGIT`].
fn digit_value(byte: u8) -> u8 {
    DIGIT_VALUES[usize::from(byte)]
}

impl BigUint {
    /// Parses a string of digits in the given radix.
    ///
    /// Letters are case-insensitive. No sign, prefix or separator is
    /// accepted.
    ///
    /// # Errors
    ///
    /// - [`BigUintError::InvalidRadix`] if `radix` is outside `2..=36`
    /// - [`BigUintError::Empty`] if `s` is empty
    /// - [`BigUintError::InvalidDigit`] on the first character that is not
    ///   a digit of `radix`
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, BigUintError> {
        check_radix(radix)?;
        if s.is_empty() {
            return Err(BigUintError::Empty);
        }
        for (position, digit) in s.char_indices() {
            let valid = u8::try_from(digit)
                .map(digit_value)
                .is_ok_and(|value| u32::from(value) < radix);
            if !valid {
                return Err(BigUintError::InvalidDigit {
                    digit,
                    position,
                    radix,
                });
            }
        }

        let chunk = chunk_for(radix);
        let mut limbs: Vec<Limb> = Vec::with_capacity(s.len() / chunk.digits + 1);
        for digits in s.as_bytes().chunks(chunk.digits) {
            let (value, place) = digits.iter().fold((0, 1), |(value, place): (Limb, Limb), &b| {
                (value * radix + Limb::from(digit_value(b)), place * radix)
            });
            mul_add_limb(&mut limbs, place, value);
        }
        Ok(BigUint::from_limbs(limbs))
    }

    /// Parses an integer literal, choosing the radix from its prefix:
    /// `0x`/`0X` hexadecimal, `0b`/`0B` binary, a leading `0` octal and
    /// decimal otherwise.
    ///
    /// # Errors
    ///
    /// As [`BigUint::from_str_radix`]. Digit positions refer to the full
    /// literal, prefix included.
    pub fn from_literal(literal: &str) -> Result<Self, BigUintError> {
        let (prefix_len, radix) = match literal.as_bytes() {
            [b'0', b'x' | b'X', ..] => (2, 16),
            [b'0', b'b' | b'B', ..] => (2, 2),
            [b'0', _, ..] => (1, 8),
            _ => (0, 10),
        };
        Self::from_str_radix(&literal[prefix_len..], radix).map_err(|err| match err {
            BigUintError::InvalidDigit {
                digit,
                position,
                radix,
            } => BigUintError::InvalidDigit {
                digit,
                position: position + prefix_len,
                radix,
            },
            other => other,
        })
    }

    /// Renders the integer in the given radix with lowercase letters.
    ///
    /// # Errors
    ///
    /// Returns [`BigUintError::InvalidRadix`] if `radix` is outside `2..=36`.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, BigUintError> {
        check_radix(radix)?;
        Ok(self.to_radix_string(radix))
    }

    /// Renders in a radix already known to be valid.
    fn to_radix_string(&self, radix: u32) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        match radix {
            2 => self.to_bit_digits(1),
            16 => self.to_bit_digits(4),
            _ => self.to_chunked_digits(radix),
        }
    }

    /// Reads `bits`-wide digits straight from the limbs. `bits` divides 32.
    fn to_bit_digits(&self, bits: u32) -> String {
        let per_limb = Limb::BITS / bits;
        let mask: Limb = (1 << bits) - 1;
        let mut out = String::with_capacity(self.limb_len() * per_limb as usize);
        for &limb in self.limbs().iter().rev() {
            for k in (0..per_limb).rev() {
                let digit = (limb >> (k * bits)) & mask;
                if out.is_empty() && digit == 0 {
                    continue;
                }
                out.push(char::from(DIGITS[digit as usize]));
            }
        }
        out
    }

    /// Repeatedly divides by the radix's chunk power. Every chunk after
    /// the most significant one is zero-padded to the full chunk width.
    fn to_chunked_digits(&self, radix: u32) -> String {
        let chunk = chunk_for(radix);
        let mut limbs = self.limbs().to_vec();
        let mut len = limbs.len();
        let mut chunks = Vec::with_capacity(len * 32 / chunk.digits + 1);
        while len > 0 {
            chunks.push(div_rem_limb_in_place(&mut limbs[..len], chunk.power));
            while len > 0 && limbs[len - 1] == 0 {
                len -= 1;
            }
        }

        let mut out = String::with_capacity(chunks.len() * chunk.digits);
        for (i, &value) in chunks.iter().rev().enumerate() {
            let width = if i == 0 { 1 } else { chunk.digits };
            push_chunk(&mut out, value, radix, width);
        }
        out
    }
}

/// Appends `value` in `radix`, left-padded with zeros to `width` digits.
fn push_chunk(out: &mut String, mut value: Limb, radix: Limb, width: usize) {
    let mut buf = [b'0'; Limb::BITS as usize];
    let mut start = buf.len();
    while value != 0 {
        start -= 1;
        buf[start] = DIGITS[(value % radix) as usize];
        value /= radix;
    }
    start = start.min(buf.len() - width);
    out.extend(buf[start..].iter().map(|&b| char::from(b)));
}

impl FromStr for BigUint {
    type Err = BigUintError;

    /// Parses a decimal string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

impl Num for BigUint {
    type FromStrRadixErr = BigUintError;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, BigUintError> {
        BigUint::from_str_radix(s, radix)
    }
}

impl Unsigned for BigUint {}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_radix_string(10))
    }
}

impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_radix_string(16))
    }
}

impl fmt::UpperHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_radix_string(16).to_ascii_uppercase())
    }
}

impl fmt::Octal for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &self.to_radix_string(8))
    }
}

impl fmt::Binary for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.to_radix_string(2))
    }
}
