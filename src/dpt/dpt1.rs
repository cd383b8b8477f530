//! DPT 1.xxx - Boolean (1-bit)
//!
//! Boolean datapoint types represent binary states (on/off, true/false, etc.)
//! encoded as a single bit.
//!
//! ## Format
//!
//! On a group socket the bit travels in the low bits of the APCI byte, so the
//! payload byte seen by the decoder is the APCI byte itself:
//!
//! ```text
//! 0x80 / 0x81  write     off / on
//! 0x40 / 0x41  response  off / on
//! 0x00 / 0x01  plain bit off / on
//! ```
//!
//! ## Example
//!
//! ```rust
//! use knx_groupsocket::dpt::{Dpt1, DptEncode, DptDecode};
//!
//! let data = Dpt1.encode(true)?;          // [0x01]
//! assert!(Dpt1.decode(&[0x81])?);          // write "on"
//! assert!(!Dpt1.decode(&[0x40])?);         // response "off"
//! # Ok::<(), knx_groupsocket::KnxError>(())
//! ```

use crate::dpt::{expect_len, payload, DptDecode, DptEncode, Payload};
use crate::error::Result;

/// DPT 1.xxx boolean codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt1;

impl DptEncode<bool> for Dpt1 {
    fn encode(&self, value: bool) -> Result<Payload> {
        payload(&[u8::from(value) & 0x01])
    }
}

impl DptDecode<bool> for Dpt1 {
    fn decode(&self, data: &[u8]) -> Result<bool> {
        expect_len(data, 1)?;

        // Strip the APCI bits of a response (0x40) or write (0x80)
        let raw = data[0];
        let mut value = i16::from(raw) - 64;
        if value > 1 {
            value -= 64;
        }

        if (0..=1).contains(&value) {
            Ok(value == 1)
        } else {
            // plain bit without APCI
            Ok(raw & 0x01 != 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnxError;

    #[test]
    fn test_encode_false() {
        let result = Dpt1.encode(false).unwrap();
        assert_eq!(&result[..], &[0x00]);
    }

    #[test]
    fn test_encode_true() {
        let result = Dpt1.encode(true).unwrap();
        assert_eq!(&result[..], &[0x01]);
    }

    #[test]
    fn test_decode_response() {
        assert!(Dpt1.decode(&[65]).unwrap());
        assert!(!Dpt1.decode(&[64]).unwrap());
    }

    #[test]
    fn test_decode_write() {
        assert!(Dpt1.decode(&[0x81]).unwrap());
        assert!(!Dpt1.decode(&[0x80]).unwrap());
    }

    #[test]
    fn test_decode_plain_bit() {
        assert!(Dpt1.decode(&[0x01]).unwrap());
        assert!(!Dpt1.decode(&[0x00]).unwrap());
    }

    #[test]
    fn test_decode_empty_data() {
        let result = Dpt1.decode(&[]);
        assert!(matches!(result.unwrap_err(), KnxError::Dpt(_)));
    }

    #[test]
    fn test_decode_too_long() {
        let err = Dpt1.decode(&[0x81, 0x00]).unwrap_err();
        assert_eq!(err.as_dpt().unwrap().lengths(), Some((1, 2)));
    }
}
