//! DPT 7.xxx / 8.xxx - 16-bit Values (2 bytes)
//!
//! ## Format
//!
//! - DPT 7: 16 bits unsigned, big-endian (0-65535)
//! - DPT 8: 16 bits signed, big-endian two's complement (-32768-32767)
//!
//! ## Example
//!
//! ```rust
//! use knx_groupsocket::dpt::{Dpt7, Dpt8, DptEncode, DptDecode};
//!
//! let bytes = Dpt7.encode(5000)?;
//! assert_eq!(&bytes[..], &[0x13, 0x88]);
//! assert_eq!(Dpt8.decode(&[0xFF, 0x38])?, -200);
//! # Ok::<(), knx_groupsocket::KnxError>(())
//! ```

use crate::dpt::{expect_len, payload, DptDecode, DptEncode, Payload};
use crate::error::Result;

/// DPT 7.xxx 16-bit unsigned codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt7;

/// DPT 8.xxx 16-bit signed codec (decode only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt8;

impl DptEncode<u16> for Dpt7 {
    fn encode(&self, value: u16) -> Result<Payload> {
        payload(&value.to_be_bytes())
    }
}

impl DptDecode<u16> for Dpt7 {
    fn decode(&self, data: &[u8]) -> Result<u16> {
        expect_len(data, 2)?;
        Ok(u16::from_be_bytes([data[0], data[1]]))
    }
}

impl DptDecode<i16> for Dpt8 {
    fn decode(&self, data: &[u8]) -> Result<i16> {
        expect_len(data, 2)?;
        Ok(i16::from_be_bytes([data[0], data[1]]))
    }
}
