//! Simulated transmission of a parity-protected word over a noisy link.

use crate::SimError;
use paritybit_core::types::{Bit, BitString};
use paritybit_core::{count_ones, ParityCodec};
use std::collections::HashSet;
use std::fmt;

/// Outcome of checking a received frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    /// No bits were flipped and the check passed.
    Clean,
    /// The check failed.
    Detected,
    /// Bits were flipped but the check still passed.
    Masked,
}

impl Verdict {
    fn classify(flip_count: usize, passed: bool) -> Self {
        match (flip_count, passed) {
            (_, false) => Self::Detected,
            (0, true) => Self::Clean,
            (_, true) => Self::Masked,
        }
    }
}

/// One word sent through [`Transmission::simulate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transmission {
    pub codec: ParityCodec,
    pub data: BitString,
    pub parity_bit: Bit,
    pub transmitted: BitString,
    pub flips: Vec<usize>,
    pub received: BitString,
    pub received_ones: usize,
    pub verdict: Verdict,
}

impl Transmission {
    /// Encodes `data`, inverts the bits of the frame at `flips` and checks
    /// what arrives.
    ///
    /// `flips` index the framed word, so the parity bit itself can be hit.
    /// Each position may appear at most once.
    pub fn simulate(
        data: &BitString,
        codec: ParityCodec,
        flips: &[usize],
    ) -> Result<Self, SimError> {
        let mut seen = HashSet::with_capacity(flips.len());
        if let Some(&index) = flips.iter().find(|&&i| !seen.insert(i)) {
            return Err(SimError::DuplicateFlip { index });
        }

        let parity_bit = codec.parity_bit(data);
        let transmitted = codec.encode(data);
        let received = transmitted.flip_all(flips.iter().copied())?;
        let passed = codec.check(&received);
        let verdict = Verdict::classify(flips.len(), passed);
        log::debug!(
            "sent {transmitted} ({} parity, {}), flipped {flips:?}, received {received}: \
             {verdict:?}",
            codec.mode,
            codec.position
        );

        Ok(Self {
            codec,
            data: data.clone(),
            parity_bit,
            transmitted,
            flips: flips.to_vec(),
            received_ones: count_ones(&received),
            received,
            verdict,
        })
    }

    /// `true` if the receiver accepted the frame.
    pub fn passed(&self) -> bool {
        self.verdict != Verdict::Detected
    }

    pub fn detected(&self) -> bool {
        self.verdict == Verdict::Detected
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original data:    {} ({} ones)", self.data, count_ones(&self.data))?;
        writeln!(f, "Parity bit:       {}", self.parity_bit)?;
        writeln!(f, "Transmitted:      {}", self.transmitted)?;
        match self.flips.as_slice() {
            [] => writeln!(f, "No errors:        {}", self.received)?,
            [index] => writeln!(f, "Error at bit {index}!  Received: {}", self.received)?,
            many => writeln!(f, "Errors at bits {many:?}!  Received: {}", self.received)?,
        }
        writeln!(f, "Total 1s:         {}", self.received_ones)?;
        match self.verdict {
            Verdict::Clean => write!(f, "Parity check:     PASS (data likely correct)"),
            Verdict::Detected => write!(f, "Parity check:     FAIL (error detected)"),
            Verdict::Masked => write!(
                f,
                "Parity check:     PASS (errors cancelled out, not detected)"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Transmission, Verdict};
    use crate::SimError;
    use paritybit_core::types::{BitString, ParityMode, ParityPosition};
    use paritybit_core::{FlipError, ParityCodec};

    fn odd_msb() -> ParityCodec {
        ParityCodec::new(ParityMode::Odd, ParityPosition::MostSignificant)
    }

    #[test]
    fn clean_transmission_passes() {
        let data: BitString = "1001101".parse().unwrap();
        let t = Transmission::simulate(&data, odd_msb(), &[]).unwrap();
        assert_eq!(t.transmitted.to_string(), "11001101");
        assert_eq!(t.received, t.transmitted);
        assert_eq!(t.verdict, Verdict::Clean);
        assert!(t.passed());
    }

    #[test]
    fn single_flip_is_detected() {
        let data: BitString = "1001101".parse().unwrap();
        let t = Transmission::simulate(&data, odd_msb(), &[3]).unwrap();
        assert_eq!(t.received.to_string(), "11011101");
        assert_eq!(t.received_ones, 6);
        assert_eq!(t.verdict, Verdict::Detected);
        assert!(t.detected());
    }

    #[test]
    fn duplicate_flip_rejected() {
        let data: BitString = "1001101".parse().unwrap();
        let err = Transmission::simulate(&data, odd_msb(), &[2, 5, 2]).unwrap_err();
        assert!(matches!(err, SimError::DuplicateFlip { index: 2 }));
    }

    #[test]
    fn out_of_range_flip_rejected() {
        let data: BitString = "101".parse().unwrap();
        let err = Transmission::simulate(&data, odd_msb(), &[4]).unwrap_err();
        assert!(matches!(
            err,
            SimError::Flip(FlipError::IndexOutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn transcript_mentions_error_position() {
        let data: BitString = "1001101".parse().unwrap();
        let text = Transmission::simulate(&data, odd_msb(), &[3]).unwrap().to_string();
        assert!(text.contains("Error at bit 3!  Received: 11011101"));
        assert!(text.ends_with("FAIL (error detected)"));
    }
}
