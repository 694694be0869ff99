use core::fmt;

/// Errors produced while parsing a textual bit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// A character other than `'0'` or `'1'` was found at `index`.
    InvalidSymbol { index: usize, symbol: char },
    /// An integer word was requested with more than 64 bits.
    WidthTooLarge { width: u32 },
    /// The integer does not fit in the requested width.
    ValueTooWide { value: u64, width: u32 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { index, symbol } => {
                write!(f, "invalid symbol {symbol:?} at index {index}")
            }
            Self::WidthTooLarge { width } => write!(f, "width {width} exceeds 64 bits"),
            Self::ValueTooWide { value, width } => {
                write!(f, "value {value} does not fit in {width} bits")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Errors produced when injecting bit flips into a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlipError {
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for FlipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "bit index {index} out of range for length {len}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FlipError {}

/// Errors produced when verifying and stripping a parity bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParityError {
    /// The frame has no bits, so there is no parity bit to strip.
    Empty,
    /// The total one-count does not satisfy the configured mode.
    Mismatch { ones: usize },
}

impl fmt::Display for ParityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty frame"),
            Self::Mismatch { ones } => write!(f, "parity mismatch ({ones} ones)"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParityError {}
