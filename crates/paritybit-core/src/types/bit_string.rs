use crate::types::Bit;
use crate::{FlipError, ParseError};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// An ordered, immutable sequence of bits.
///
/// Index 0 is the leftmost digit of the textual form, i.e. the most
/// significant bit when the sequence is read as a number. Operations that
/// change bits return a new `BitString` and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BitString {
    bits: Vec<Bit>,
}

impl BitString {
    pub const fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn from_bits(bits: Vec<Bit>) -> Self {
        Self { bits }
    }

    /// Builds the `width` low bits of `value`, most significant bit first.
    ///
    /// `from_uint(0x48, 7)` yields `1001000` (ASCII `H`).
    pub fn from_uint(value: u64, width: u32) -> Result<Self, ParseError> {
        if width > u64::BITS {
            return Err(ParseError::WidthTooLarge { width });
        }
        if width < u64::BITS && value >> width != 0 {
            return Err(ParseError::ValueTooWide { value, width });
        }
        let bits = (0..width)
            .rev()
            .map(|shift| Bit::from_bool((value >> shift) & 1 == 1))
            .collect();
        Ok(Self { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Bit> {
        self.bits.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Bit> + ExactSizeIterator + '_ {
        self.bits.iter().copied()
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|b| b.is_one()).count()
    }

    /// Returns a copy with the bit at `index` inverted.
    pub fn flip(&self, index: usize) -> Result<Self, FlipError> {
        self.flip_all(core::iter::once(index))
    }

    /// Returns a copy with every listed bit inverted, in order.
    ///
    /// Listing an index twice restores it. Nothing is returned if any index
    /// is out of range.
    pub fn flip_all<I>(&self, indices: I) -> Result<Self, FlipError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut bits = self.bits.clone();
        let len = bits.len();
        for index in indices {
            let bit = bits
                .get_mut(index)
                .ok_or(FlipError::IndexOutOfRange { index, len })?;
            *bit = bit.flipped();
        }
        Ok(Self { bits })
    }

    /// Number of positions at which the two sequences differ, or `None` if
    /// their lengths differ.
    pub fn hamming_distance(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }
        Some(self.iter().zip(other.iter()).filter(|(a, b)| a != b).count())
    }
}

impl AsRef<[Bit]> for BitString {
    fn as_ref(&self) -> &[Bit] {
        &self.bits
    }
}

impl From<Vec<Bit>> for BitString {
    fn from(bits: Vec<Bit>) -> Self {
        Self::from_bits(bits)
    }
}

impl From<&[Bit]> for BitString {
    fn from(bits: &[Bit]) -> Self {
        Self::from_bits(bits.to_vec())
    }
}

impl FromIterator<Bit> for BitString {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BitString {
    type Item = Bit;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, Bit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter().copied()
    }
}

impl FromStr for BitString {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(index, symbol)| {
                Bit::from_char(symbol).ok_or(ParseError::InvalidSymbol { index, symbol })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_bits)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.bits.iter().map(|b| b.to_char()).collect();
        f.pad(&text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BitString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BitString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = BitString;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string of '0' and '1' digits")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<BitString, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::BitString;
    use crate::types::Bit;
    use crate::{FlipError, ParseError};
    use alloc::string::ToString;

    fn bits(s: &str) -> BitString {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_displays() {
        let b = bits("1011001");
        assert_eq!(b.len(), 7);
        assert_eq!(b.get(0), Some(Bit::One));
        assert_eq!(b.get(1), Some(Bit::Zero));
        assert_eq!(b.to_string(), "1011001");
    }

    #[test]
    fn empty_string_is_empty_sequence() {
        let b = bits("");
        assert!(b.is_empty());
        assert_eq!(b.count_ones(), 0);
    }

    #[test]
    fn rejects_non_binary_symbols() {
        assert_eq!(
            "10a1".parse::<BitString>().unwrap_err(),
            ParseError::InvalidSymbol {
                index: 2,
                symbol: 'a'
            }
        );
        assert_eq!(
            "1 0".parse::<BitString>().unwrap_err(),
            ParseError::InvalidSymbol {
                index: 1,
                symbol: ' '
            }
        );
    }

    #[test]
    fn from_uint_is_msb_first() {
        assert_eq!(BitString::from_uint(0x48, 7).unwrap(), bits("1001000"));
        assert_eq!(BitString::from_uint(0, 0).unwrap(), BitString::new());
        assert_eq!(BitString::from_uint(u64::MAX, 64).unwrap().count_ones(), 64);
        assert_eq!(
            BitString::from_uint(0x80, 7).unwrap_err(),
            ParseError::ValueTooWide {
                value: 0x80,
                width: 7
            }
        );
        assert_eq!(
            BitString::from_uint(1, 65).unwrap_err(),
            ParseError::WidthTooLarge { width: 65 }
        );
    }

    #[test]
    fn flip_returns_new_sequence() {
        let original = bits("1100");
        let flipped = original.flip(3).unwrap();
        assert_eq!(flipped, bits("1101"));
        assert_eq!(original, bits("1100"));
    }

    #[test]
    fn flip_all_twice_restores() {
        let original = bits("1010");
        assert_eq!(original.flip_all([1, 1]).unwrap(), original);
        assert_eq!(original.flip_all([0, 3]).unwrap(), bits("0011"));
    }

    #[test]
    fn flip_out_of_range() {
        assert_eq!(
            bits("101").flip(3).unwrap_err(),
            FlipError::IndexOutOfRange { index: 3, len: 3 }
        );
        assert_eq!(
            bits("101").flip_all([0, 7]).unwrap_err(),
            FlipError::IndexOutOfRange { index: 7, len: 3 }
        );
    }

    #[test]
    fn hamming_distance_counts_differences() {
        assert_eq!(bits("1010").hamming_distance(&bits("0011")), Some(2));
        assert_eq!(bits("1").hamming_distance(&bits("10")), None);
    }
}
