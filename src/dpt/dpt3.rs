//! DPT 2.xxx and DPT 3.xxx - small control values
//!
//! Both types live in the low bits of a single byte, like DPT 1, and travel
//! inside the APCI byte of a group telegram.
//!
//! ## Format
//!
//! ```text
//! DPT 2:  xxxx xxCV   C = control, V = value
//! DPT 3:  xxxx CSSS   C = direction, SSS = step code
//! ```
//!
//! Upper bits are ignored on decode; encoding rejects values that do not fit.

use crate::dpt::{expect_len, payload, DptDecode, DptEncode, Payload};
use crate::error::{KnxError, Result};

/// DPT 2.xxx 2-bit controlled boolean codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt2;

/// DPT 3.xxx 4-bit dimming/blind step codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt3;

impl Dpt2 {
    const MASK: u8 = 0x03;
}

impl Dpt3 {
    const MASK: u8 = 0x0F;
}

impl DptEncode<u8> for Dpt2 {
    fn encode(&self, value: u8) -> Result<Payload> {
        if value > Self::MASK {
            return Err(KnxError::dpt_value_out_of_range());
        }
        payload(&[value])
    }
}

impl DptDecode<u8> for Dpt2 {
    fn decode(&self, data: &[u8]) -> Result<u8> {
        expect_len(data, 1)?;
        Ok(data[0] & Self::MASK)
    }
}

impl DptEncode<u8> for Dpt3 {
    fn encode(&self, value: u8) -> Result<Payload> {
        if value > Self::MASK {
            return Err(KnxError::dpt_value_out_of_range());
        }
        payload(&[value])
    }
}

impl DptDecode<u8> for Dpt3 {
    fn decode(&self, data: &[u8]) -> Result<u8> {
        expect_len(data, 1)?;
        Ok(data[0] & Self::MASK)
    }
}
