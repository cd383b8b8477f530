//! DPT 12.xxx / 13.xxx - 4-byte Integer Values (4 bytes)
//!
//! ## Format
//!
//! - DPT 12: 32 bits unsigned, big-endian (0 to 4,294,967,295)
//! - DPT 13: 32 bits signed, big-endian two's complement
//!
//! ## Common Subtypes
//!
//! - **12.001** - Counter Pulses (unsigned)
//! - **13.001** - Counter Pulses (signed)
//! - **13.010** - Active Energy (Wh)
//! - **13.013** - Active Energy (kWh)
//!
//! ## Example
//!
//! ```rust
//! use knx_groupsocket::dpt::{Dpt12, Dpt13, DptDecode};
//!
//! let wh = Dpt13.decode(&[0x00, 0x07, 0xA1, 0x20])?;  // 500000 Wh
//! assert_eq!(wh, 500_000);
//! assert_eq!(Dpt12.decode(&[0xFF, 0xFF, 0xFF, 0xFF])?, u32::MAX);
//! # Ok::<(), knx_groupsocket::KnxError>(())
//! ```

use crate::dpt::{expect_len, DptDecode};
use crate::error::Result;

/// DPT 12.xxx 32-bit unsigned codec (decode only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt12;

/// DPT 13.xxx 32-bit signed codec (decode only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt13;

impl DptDecode<u32> for Dpt12 {
    fn decode(&self, data: &[u8]) -> Result<u32> {
        expect_len(data, 4)?;
        Ok(u32::from_be_bytes([data[0], data[1], data[2], data[3]]))
    }
}

impl DptDecode<i32> for Dpt13 {
    fn decode(&self, data: &[u8]) -> Result<i32> {
        expect_len(data, 4)?;
        Ok(i32::from_be_bytes([data[0], data[1], data[2], data[3]]))
    }
}
