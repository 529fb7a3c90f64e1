//! Hex formatting for RGB colors.
//!
//! Output is always six lowercase hex digits without a `#` or `0x` prefix,
//! each channel zero-padded to two digits. Channels outside 0-255 are
//! rejected rather than clamped.

use super::error::{Channel, ColorError};
use super::Rgb;

/// Format three channel values as a hex string, e.g. `(0, 204, 102)` -> `"00cc66"`.
pub fn format(red: i64, green: i64, blue: i64) -> Result<String, ColorError> {
    Rgb::try_from_channels(red, green, blue).map(|rgb| rgb.to_hex())
}

fn checked(channel: Channel, value: i64) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::InvalidChannelValue { channel, value })
}

impl Rgb {
    /// Build a color from unchecked channel values.
    pub fn try_from_channels(red: i64, green: i64, blue: i64) -> Result<Self, ColorError> {
        Ok(Self::new(
            checked(Channel::Red, red)?,
            checked(Channel::Green, green)?,
            checked(Channel::Blue, blue)?,
        ))
    }

    /// Six-digit lowercase hex representation.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
