pub mod error;
pub mod sweep;
pub mod table;
pub mod transmission;

pub use error::SimError;
pub use sweep::{exhaustive_detection, DetectionSummary};
pub use table::{ascii_table, parity_table, AsciiRow, ParityRow, SAMPLE_WORDS};
pub use transmission::{Transmission, Verdict};
