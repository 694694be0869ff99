use crate::SimError;
use paritybit_core::types::{Bit, BitString};
use paritybit_core::{count_ones, ParityCodec};
use std::fmt;

/// Data words used by the default parity table.
pub const SAMPLE_WORDS: [&str; 7] = ["0000", "0001", "0011", "0111", "1111", "1010", "1100"];

/// One line of a parity table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParityRow {
    pub data: BitString,
    pub data_ones: usize,
    pub parity_bit: Bit,
    pub framed: BitString,
    pub total_ones: usize,
}

impl ParityRow {
    pub const HEADER: &'static str = "Data      | 1s | Parity | With Parity | Total 1s";

    pub fn new(data: &BitString, codec: ParityCodec) -> Self {
        let framed = codec.encode(data);
        Self {
            data: data.clone(),
            data_ones: count_ones(data),
            parity_bit: codec.parity_bit(data),
            total_ones: count_ones(&framed),
            framed,
        }
    }
}

impl fmt::Display for ParityRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parity = if self.total_ones % 2 == 0 { "even" } else { "odd" };
        write!(
            f,
            "{:<9} | {:>2} | {:>6} | {:<11} | {:>2} ({parity})",
            self.data,
            self.data_ones,
            self.parity_bit,
            self.framed,
            self.total_ones
        )
    }
}

pub fn parity_table(words: &[BitString], codec: ParityCodec) -> Vec<ParityRow> {
    words.iter().map(|w| ParityRow::new(w, codec)).collect()
}

/// One character of text with its 7-bit code and parity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsciiRow {
    pub ch: char,
    pub code: BitString,
    pub parity_bit: Bit,
    pub framed: BitString,
}

impl AsciiRow {
    pub const HEADER: &'static str = "Char | ASCII (7-bit) | Parity | 8-bit with Parity";

    pub fn new(ch: char, codec: ParityCodec) -> Result<Self, SimError> {
        if !ch.is_ascii() {
            return Err(SimError::NonAscii { ch });
        }
        let code = BitString::from_uint(u64::from(ch as u8), 7)?;
        Ok(Self {
            ch,
            parity_bit: codec.parity_bit(&code),
            framed: codec.encode(&code),
            code,
        })
    }
}

impl fmt::Display for AsciiRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {}  |   {}   |   {}    |     {}",
            self.ch, self.code, self.parity_bit, self.framed
        )
    }
}

/// Frames every character of `text` as 7-bit ASCII plus a parity bit.
pub fn ascii_table(text: &str, codec: ParityCodec) -> Result<Vec<AsciiRow>, SimError> {
    text.chars().map(|ch| AsciiRow::new(ch, codec)).collect()
}

#[cfg(test)]
mod tests {
    use super::{ascii_table, parity_table, ParityRow, SAMPLE_WORDS};
    use crate::SimError;
    use paritybit_core::types::{Bit, BitString, ParityMode, ParityPosition};
    use paritybit_core::ParityCodec;

    const EVEN_MSB: ParityCodec =
        ParityCodec::new(ParityMode::Even, ParityPosition::MostSignificant);

    #[test]
    fn sample_table_totals_are_even() {
        let words: Vec<BitString> = SAMPLE_WORDS.iter().map(|w| w.parse().unwrap()).collect();
        let rows = parity_table(&words, EVEN_MSB);
        assert_eq!(rows.len(), 7);
        for row in &rows {
            assert_eq!(row.total_ones % 2, 0);
            assert_eq!(row.framed.len(), row.data.len() + 1);
        }
        assert_eq!(rows[1].parity_bit, Bit::One);
        assert_eq!(rows[1].framed.to_string(), "10001");
        assert_eq!(rows[3].framed.to_string(), "10111");
    }

    #[test]
    fn row_renders_columns() {
        let row = ParityRow::new(&"0111".parse().unwrap(), EVEN_MSB);
        assert_eq!(
            row.to_string(),
            "0111      |  3 |      1 | 10111       |  4 (even)"
        );
    }

    #[test]
    fn ascii_hello() {
        let rows = ascii_table("HELLO", EVEN_MSB).unwrap();
        let framed: Vec<String> = rows.iter().map(|r| r.framed.to_string()).collect();
        assert_eq!(
            framed,
            ["01001000", "11000101", "11001100", "11001100", "11001111"]
        );
        assert_eq!(rows[0].code.to_string(), "1001000");
    }

    #[test]
    fn ascii_rejects_non_ascii() {
        let err = ascii_table("héllo", EVEN_MSB).unwrap_err();
        assert!(matches!(err, SimError::NonAscii { ch: 'é' }));
    }
}
