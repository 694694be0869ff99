pub mod bit;
#[cfg(feature = "alloc")]
pub mod bit_string;
pub mod mode;

pub use bit::Bit;
#[cfg(feature = "alloc")]
pub use bit_string::BitString;
pub use mode::{ParityMode, ParityPosition, UnknownName};
