//! Named colors and their hex encoding.

pub mod error;
pub mod hex;
pub mod palette;

pub use error::{Channel, ColorError};
pub use palette::{lookup, ColorEntry, PALETTE};

/// An RGB triple. Each channel is a byte, so values are always in 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}
