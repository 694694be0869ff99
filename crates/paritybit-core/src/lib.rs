//! Parity-bit error detection in pure Rust.
//!
//! `paritybit-core` provides the bit types and the parity codec: counting
//! ones, computing an even or odd parity bit, inserting it ahead of or after
//! the data, and checking a received frame. It is `no_std`-compatible and
//! forms the foundation of the paritybit crate family.
//!
//! Single-bit errors are always detected. Any even number of flipped bits
//! leaves the parity intact and goes unnoticed; the codec neither locates nor
//! corrects errors.
//!
//! # Feature flags
//!
//! - **`std`** (default) — enables `std::error::Error` implementations.
//! - **`alloc`** (default) — enables [`BitString`](types::BitString) and the
//!   operations that build new sequences.
//! - **`serde`** — derives `Serialize`/`Deserialize` on core types.
//! - **`defmt`** — derives `defmt::Format` for embedded logging.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Error types for parsing, bit flipping and parity verification.
pub mod error;
/// Parity bit computation, insertion and checking.
pub mod parity;
/// Bit, bit string, parity mode and parity position types.
pub mod types;

pub use error::{FlipError, ParityError, ParseError};
#[cfg(feature = "alloc")]
pub use parity::{append_parity, split_parity};
pub use parity::{check_parity, compute_parity_bit, count_ones, ParityCodec};
