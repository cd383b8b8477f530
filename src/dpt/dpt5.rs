//! DPT 5.xxx / 6.xxx - 8-bit Values (1 byte)
//!
//! ## Format
//!
//! - DPT 5: 8 bits unsigned (0-255)
//! - DPT 6: 8 bits signed, two's complement (-128-127)
//!
//! Values are passed through unscaled; percentage (5.001) or angle (5.003)
//! scaling is left to the application.
//!
//! ## Example
//!
//! ```rust
//! use knx_groupsocket::dpt::{Dpt5, Dpt6, DptEncode, DptDecode};
//!
//! let data = Dpt5.encode(191)?;
//! assert_eq!(Dpt5.decode(&data)?, 191);
//! assert_eq!(Dpt6.decode(&[0xFF])?, -1);
//! # Ok::<(), knx_groupsocket::KnxError>(())
//! ```

use crate::dpt::{expect_len, payload, DptDecode, DptEncode, Payload};
use crate::error::Result;

/// DPT 5.xxx 8-bit unsigned codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt5;

/// DPT 6.xxx 8-bit signed codec (decode only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt6;

impl DptEncode<u8> for Dpt5 {
    fn encode(&self, value: u8) -> Result<Payload> {
        payload(&[value])
    }
}

impl DptDecode<u8> for Dpt5 {
    fn decode(&self, data: &[u8]) -> Result<u8> {
        expect_len(data, 1)?;
        Ok(data[0])
    }
}

impl DptDecode<i8> for Dpt6 {
    fn decode(&self, data: &[u8]) -> Result<i8> {
        expect_len(data, 1)?;
        Ok(i8::from_be_bytes([data[0]]))
    }
}
