//! DPT 232.600 - RGB Color (3 bytes)
//!
//! Group sockets deliver the channels in reverse order:
//!
//! ```text
//! Byte 0: blue
//! Byte 1: green
//! Byte 2: red
//! ```

use core::fmt;

use crate::dpt::{expect_len, DptDecode};
use crate::error::Result;

/// DPT 232.600 RGB codec (decode only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt232;

/// Decoded DPT 232 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl DptDecode<Rgb> for Dpt232 {
    fn decode(&self, data: &[u8]) -> Result<Rgb> {
        expect_len(data, 3)?;
        Ok(Rgb {
            red: data[2],
            green: data[1],
            blue: data[0],
        })
    }
}
