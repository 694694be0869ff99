use core::fmt;
use core::str::FromStr;

/// Which invariant the total one-count must satisfy once the parity bit is
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParityMode {
    #[default]
    Even,
    Odd,
}

impl ParityMode {
    /// The value `ones % 2` must take for a frame to pass the check.
    pub const fn expected_remainder(self) -> usize {
        match self {
            Self::Even => 0,
            Self::Odd => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

impl fmt::Display for ParityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ParityMode {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("even") {
            Ok(Self::Even)
        } else if s.eq_ignore_ascii_case("odd") {
            Ok(Self::Odd)
        } else {
            Err(UnknownName)
        }
    }
}

/// Where the parity bit sits relative to the data bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParityPosition {
    /// Parity bit first, ahead of the data.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "msb"))]
    MostSignificant,
    /// Parity bit last, after the data.
    #[cfg_attr(feature = "serde", serde(rename = "lsb"))]
    LeastSignificant,
}

impl ParityPosition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MostSignificant => "msb",
            Self::LeastSignificant => "lsb",
        }
    }
}

impl fmt::Display for ParityPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ParityPosition {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("msb") {
            Ok(Self::MostSignificant)
        } else if s.eq_ignore_ascii_case("lsb") {
            Ok(Self::LeastSignificant)
        } else {
            Err(UnknownName)
        }
    }
}

/// Returned when a mode or position name is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownName;

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown name")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownName {}

#[cfg(test)]
mod tests {
    use super::{ParityMode, ParityPosition, UnknownName};

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("EVEN".parse::<ParityMode>(), Ok(ParityMode::Even));
        assert_eq!("odd".parse::<ParityMode>(), Ok(ParityMode::Odd));
        assert_eq!("Lsb".parse::<ParityPosition>(), Ok(ParityPosition::LeastSignificant));
        assert_eq!("mark".parse::<ParityMode>(), Err(UnknownName));
    }

    #[test]
    fn remainders() {
        assert_eq!(ParityMode::Even.expected_remainder(), 0);
        assert_eq!(ParityMode::Odd.expected_remainder(), 1);
    }
}
