use core::fmt;
use core::ops::Not;

/// A single binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bit {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "0"))]
    Zero,
    #[cfg_attr(feature = "serde", serde(rename = "1"))]
    One,
}

impl Bit {
    pub const fn from_bool(value: bool) -> Self {
        if value {
            Self::One
        } else {
            Self::Zero
        }
    }

    pub const fn is_one(self) -> bool {
        matches!(self, Self::One)
    }

    pub const fn to_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }

    /// Returns `None` for anything other than `'0'` or `'1'`.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            _ => None,
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

impl Not for Bit {
    type Output = Self;

    fn not(self) -> Self {
        self.flipped()
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> bool {
        bit.is_one()
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Zero => "0",
            Self::One => "1",
        })
    }
}
