//! Exhaustive error injection over every combination of flipped bits.

use crate::transmission::{Transmission, Verdict};
use crate::SimError;
use paritybit_core::types::BitString;
use paritybit_core::ParityCodec;
use std::fmt;

/// How many `flip_count`-bit error patterns the parity check caught.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionSummary {
    pub codec: ParityCodec,
    pub data: BitString,
    pub frame_len: usize,
    pub flip_count: usize,
    pub patterns: usize,
    pub clean: usize,
    pub detected: usize,
    pub masked: usize,
}

impl DetectionSummary {
    pub fn all_detected(&self) -> bool {
        self.masked == 0
    }

    pub fn none_detected(&self) -> bool {
        self.detected == 0
    }
}

impl fmt::Display for DetectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} flip(s) over {} bits: {} patterns, {} clean, {} detected, {} masked",
            self.flip_count, self.frame_len, self.patterns, self.clean, self.detected, self.masked
        )
    }
}

/// Sends `data` once for every set of `flip_count` distinct frame positions.
///
/// A `flip_count` larger than the frame yields zero patterns.
pub fn exhaustive_detection(
    data: &BitString,
    codec: ParityCodec,
    flip_count: usize,
) -> Result<DetectionSummary, SimError> {
    let frame_len = data.len() + 1;
    let mut summary = DetectionSummary {
        codec,
        data: data.clone(),
        frame_len,
        flip_count,
        patterns: 0,
        clean: 0,
        detected: 0,
        masked: 0,
    };

    for flips in Combinations::new(frame_len, flip_count) {
        let t = Transmission::simulate(data, codec, &flips)?;
        summary.patterns += 1;
        match t.verdict {
            Verdict::Clean => summary.clean += 1,
            Verdict::Detected => summary.detected += 1,
            Verdict::Masked => summary.masked += 1,
        }
    }
    log::debug!("{summary}");
    Ok(summary)
}

/// Ascending `k`-subsets of `0..n` in lexicographic order.
struct Combinations {
    n: usize,
    current: Option<Vec<usize>>,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        let current = (k <= n).then(|| (0..k).collect());
        Self { n, current }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let out = self.current.take()?;
        let k = out.len();
        let mut next = out.clone();
        // rightmost slot that can still move
        let pivot = (0..k).rev().find(|&i| next[i] < self.n - k + i);
        if let Some(i) = pivot {
            next[i] += 1;
            for j in i + 1..k {
                next[j] = next[j - 1] + 1;
            }
            self.current = Some(next);
        }
        Some(out)
    }
}
