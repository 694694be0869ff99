//! Parity bit computation, insertion and verification.
//!
//! Detection works on the mod-2 one-count of the whole frame: an odd number
//! of flipped bits always changes it and is detected, an even number never
//! does. Nothing here locates or corrects a bad bit.

use crate::types::{Bit, ParityMode, ParityPosition};
#[cfg(feature = "alloc")]
use crate::types::BitString;
#[cfg(feature = "alloc")]
use crate::ParityError;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Number of one-valued bits. Zero for an empty sequence.
pub fn count_ones<B: AsRef<[Bit]> + ?Sized>(bits: &B) -> usize {
    bits.as_ref().iter().filter(|b| b.is_one()).count()
}

/// The bit that makes the total one-count of `bits` plus itself satisfy
/// `mode`.
pub fn compute_parity_bit<B: AsRef<[Bit]> + ?Sized>(bits: &B, mode: ParityMode) -> Bit {
    parity_for_ones(count_ones(bits), mode)
}

/// `true` when the one-count of the whole received frame, parity bit
/// included, satisfies `mode`. The parity bit position is irrelevant.
pub fn check_parity<B: AsRef<[Bit]> + ?Sized>(received: &B, mode: ParityMode) -> bool {
    count_ones(received) % 2 == mode.expected_remainder()
}

/// Returns `bits` with its parity bit inserted at `position`.
#[cfg(feature = "alloc")]
pub fn append_parity<B: AsRef<[Bit]> + ?Sized>(
    bits: &B,
    mode: ParityMode,
    position: ParityPosition,
) -> BitString {
    let data = bits.as_ref();
    let parity = compute_parity_bit(data, mode);
    let mut framed = Vec::with_capacity(data.len() + 1);
    match position {
        ParityPosition::MostSignificant => {
            framed.push(parity);
            framed.extend_from_slice(data);
        }
        ParityPosition::LeastSignificant => {
            framed.extend_from_slice(data);
            framed.push(parity);
        }
    }
    BitString::from_bits(framed)
}

/// Separates a frame into its parity bit and data bits. `None` when empty.
#[cfg(feature = "alloc")]
pub fn split_parity<B: AsRef<[Bit]> + ?Sized>(
    framed: &B,
    position: ParityPosition,
) -> Option<(Bit, BitString)> {
    let framed = framed.as_ref();
    match position {
        ParityPosition::MostSignificant => {
            let (parity, data) = framed.split_first()?;
            Some((*parity, BitString::from(data)))
        }
        ParityPosition::LeastSignificant => {
            let (parity, data) = framed.split_last()?;
            Some((*parity, BitString::from(data)))
        }
    }
}

/// Parity bit over the low `width` bits of `value` (at most 64).
pub fn word_parity_bit(value: u64, width: u32, mode: ParityMode) -> Bit {
    let ones = (value & low_mask(width)).count_ones() as usize;
    parity_for_ones(ones, mode)
}

const fn low_mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

const fn parity_for_ones(ones: usize, mode: ParityMode) -> Bit {
    Bit::from_bool(ones % 2 != mode.expected_remainder())
}

/// A mode and position pair used on both ends of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParityCodec {
    pub mode: ParityMode,
    pub position: ParityPosition,
}

impl ParityCodec {
    pub const fn new(mode: ParityMode, position: ParityPosition) -> Self {
        Self { mode, position }
    }

    pub fn parity_bit<B: AsRef<[Bit]> + ?Sized>(&self, data: &B) -> Bit {
        compute_parity_bit(data, self.mode)
    }

    pub fn check<B: AsRef<[Bit]> + ?Sized>(&self, received: &B) -> bool {
        check_parity(received, self.mode)
    }

    #[cfg(feature = "alloc")]
    pub fn encode<B: AsRef<[Bit]> + ?Sized>(&self, data: &B) -> BitString {
        append_parity(data, self.mode, self.position)
    }

    /// Verifies `received` and returns its data bits with the parity bit
    /// removed.
    #[cfg(feature = "alloc")]
    pub fn decode<B: AsRef<[Bit]> + ?Sized>(
        &self,
        received: &B,
    ) -> Result<BitString, ParityError> {
        let (_, data) = split_parity(received, self.position).ok_or(ParityError::Empty)?;
        if !self.check(received) {
            return Err(ParityError::Mismatch {
                ones: count_ones(received),
            });
        }
        Ok(data)
    }
}
