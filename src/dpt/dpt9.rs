//! DPT 9.xxx - 2-byte Float (16-bit floating point)
//!
//! 2-byte floating point datapoint types represent values using a custom
//! 16-bit floating point format with 1 sign bit, 4 exponent bits, and 11 mantissa bits.
//!
//! ## Format
//!
//! ```text
//! Byte 0: SEEE EMMM
//! Byte 1: MMMM MMMM
//!
//! S = Sign bit (bit 15: 0 = positive, 1 = negative)
//! E = Exponent (bits 14-11: 4 bits, unsigned, range 0-15)
//! M = Mantissa (bits 10-0, two's complement together with S)
//!
//! Value = (0.01 * M) * 2^E
//! ```
//!
//! ## Range
//!
//! - Min: -671088.64
//! - Max: +670760.96
//! - Resolution: 0.01 at exponent 0
//!
//! ## Common Subtypes
//!
//! - **9.001** - Temperature (°C)
//! - **9.004** - Illuminance (lux)
//! - **9.005** - Wind speed (m/s)
//! - **9.007** - Humidity (%)
//!
//! ## Example
//!
//! ```rust
//! use knx_groupsocket::dpt::{Dpt9, DptEncode, DptDecode};
//!
//! let bytes = Dpt9.encode(21.6)?;
//! assert_eq!(&bytes[..], &[0x0C, 0x38]);
//!
//! let temp = Dpt9.decode(&bytes)?;
//! assert!((temp - 21.6).abs() < 0.01);
//! # Ok::<(), knx_groupsocket::KnxError>(())
//! ```

use crate::dpt::{expect_len, payload, DptDecode, DptEncode, Payload};
use crate::error::{KnxError, Result};

/// DPT 9.xxx 2-byte float codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt9;

impl Dpt9 {
    const MANTISSA_MIN: f32 = -2048.0;
    const MANTISSA_MAX: f32 = 2047.0;
    const MAX_EXPONENT: u8 = 15;
}

impl DptEncode<f32> for Dpt9 {
    fn encode(&self, value: f32) -> Result<Payload> {
        if !value.is_finite() {
            return Err(KnxError::dpt_value_out_of_range());
        }

        if value == 0.0 {
            return payload(&[0x00, 0x00]);
        }

        // Smallest exponent whose rounded mantissa fits 12-bit two's complement
        let mut exponent = 0u8;
        let mut mantissa_f = (value * 100.0).round();
        while !(Self::MANTISSA_MIN..=Self::MANTISSA_MAX).contains(&mantissa_f) {
            if exponent == Self::MAX_EXPONENT {
                return Err(KnxError::dpt_value_out_of_range());
            }
            exponent += 1;
            mantissa_f = (value * 100.0 / f32::from(1u16 << exponent)).round();
        }

        let mantissa = mantissa_f as i16;

        let (sign_bit, mantissa_bits) = if mantissa < 0 {
            (1u16, ((mantissa + 2048) as u16) & 0x07FF)
        } else {
            (0u16, (mantissa as u16) & 0x07FF)
        };

        // SEEE EMMM MMMM MMMM
        let raw = (sign_bit << 15) | (u16::from(exponent) << 11) | mantissa_bits;
        payload(&raw.to_be_bytes())
    }
}

impl DptDecode<f32> for Dpt9 {
    fn decode(&self, data: &[u8]) -> Result<f32> {
        expect_len(data, 2)?;

        let raw = u16::from_be_bytes([data[0], data[1]]);
        let sign_bit = (raw >> 15) & 0x01;
        let exponent = ((raw >> 11) & 0x0F) as u8;
        let mantissa_raw = raw & 0x07FF;

        let mantissa = if sign_bit == 1 {
            (mantissa_raw as i16) - 2048
        } else {
            mantissa_raw as i16
        };

        Ok((0.01 * f32::from(mantissa)) * f32::from(1u16 << exponent))
    }
}
