use paritybit_core::{FlipError, ParseError};
use thiserror::Error;

/// Errors raised while building simulations and tables.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("flip error: {0}")]
    Flip(#[from] FlipError),
    #[error("bit {index} listed more than once")]
    DuplicateFlip { index: usize },
    #[error("character {ch:?} is not 7-bit ASCII")]
    NonAscii { ch: char },
}
