//! Bit manipulation on 64-bit words. Bit 0 is the least significant bit,
//! bit 63 the most significant.
//!
//! Equations:
//!   bit(i)         = 1 << i                        i < 64
//!   low_mask(c)    = (1 << c) - 1                  c <= 64
//!   range(i, w)    = low_mask(w) << (i + 1 - w)    bits i, i-1, ..., i-w+1

use thiserror::Error;

pub const WORD_BITS: u32 = u64::BITS;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BitError {
    #[error("bit index {0} is outside a 64-bit word")]
    IndexOutOfRange(u32),
    #[error("bit count {0} exceeds the 64-bit word width")]
    CountOutOfRange(u32),
    #[error("{num_bits} bits ending at bit {bit_index} run past bit 0")]
    RangeUnderflow { bit_index: u32, num_bits: u32 },
}

fn bit(index: u32) -> Result<u64, BitError> {
    1u64.checked_shl(index).ok_or(BitError::IndexOutOfRange(index))
}

fn low_mask(count: u32) -> Result<u64, BitError> {
    match count {
        WORD_BITS => Ok(u64::MAX),
        c if c < WORD_BITS => Ok((1u64 << c) - 1),
        c => Err(BitError::CountOutOfRange(c)),
    }
}

pub fn set_bit(n: u64, index: u32) -> Result<u64, BitError> {
    Ok(n | bit(index)?)
}

pub fn clear_bit(n: u64, index: u32) -> Result<u64, BitError> {
    Ok(n & !bit(index)?)
}

/// Clear the lowest `count` bits.
pub fn clear_lower_bits(n: u64, count: u32) -> Result<u64, BitError> {
    Ok(n & !low_mask(count)?)
}

/// Set the lowest `count` bits.
pub fn set_lower_bits(n: u64, count: u32) -> Result<u64, BitError> {
    Ok(n | low_mask(count)?)
}

/// Set `num_bits` bits starting at `bit_index` and running toward bit 0.
pub fn set_bits_in_range(n: u64, bit_index: u32, num_bits: u32) -> Result<u64, BitError> {
    if bit_index >= WORD_BITS {
        return Err(BitError::IndexOutOfRange(bit_index));
    }
    if num_bits > bit_index + 1 {
        return Err(BitError::RangeUnderflow {
            bit_index,
            num_bits,
        });
    }
    Ok(n | low_mask(num_bits)? << (bit_index + 1 - num_bits))
}
