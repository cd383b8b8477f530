//! DPT 14.xxx - 4-byte Float (IEEE 754 single precision)
//!
//! Used for physical quantities that need more range or precision than
//! DPT 9 (power, energy, frequency, ...). Big-endian on the wire.
//!
//! This is also the fallback type when a telegram's length does not point
//! at a more specific type.

use crate::dpt::{expect_len, payload, DptDecode, DptEncode, Payload};
use crate::error::Result;

/// DPT 14.xxx 4-byte float codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt14;

impl DptEncode<f32> for Dpt14 {
    fn encode(&self, value: f32) -> Result<Payload> {
        payload(&value.to_be_bytes())
    }
}

impl DptDecode<f32> for Dpt14 {
    fn decode(&self, data: &[u8]) -> Result<f32> {
        expect_len(data, 4)?;
        Ok(f32::from_be_bytes([data[0], data[1], data[2], data[3]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_bits() {
        // 1.0 = 0x3F800000
        assert_eq!(Dpt14.decode(&[0x3F, 0x80, 0x00, 0x00]).unwrap(), 1.0);
        // -2.5 = 0xC0200000
        assert_eq!(Dpt14.decode(&[0xC0, 0x20, 0x00, 0x00]).unwrap(), -2.5);
    }

    #[test]
    fn test_encode_big_endian() {
        assert_eq!(&Dpt14.encode(1.0).unwrap()[..], &[0x3F, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_decode_wrong_length() {
        let err = Dpt14.decode(&[0x3F, 0x80]).unwrap_err();
        assert_eq!(err.as_dpt().unwrap().lengths(), Some((4, 2)));
    }
}
