//! KNX Datapoint Types (DPT)
//!
//! This module converts group telegram payloads to and from native values.
//! DPTs define how to interpret the data payload of a telegram; the type of a
//! group address is not on the wire, so it either comes from a lookup table
//! ([`decode_as`]) or is guessed from the frame length ([`decode`]).
//!
//! ## Supported DPT Families
//!
//! | DPT | Size | Value | Encode |
//! |-----|------|-------|--------|
//! | 1   | 1 bit (1 byte) | [`DptValue::Bool`] | yes |
//! | 2   | 2 bit (1 byte) | [`DptValue::Bits`] | yes |
//! | 3   | 4 bit (1 byte) | [`DptValue::Bits`] | yes |
//! | 4   | 1 byte | [`DptValue::Text`] | no |
//! | 5   | 1 byte | [`DptValue::U8`] | yes |
//! | 6   | 1 byte | [`DptValue::I8`] | no |
//! | 7   | 2 bytes | [`DptValue::U16`] | yes |
//! | 8   | 2 bytes | [`DptValue::I16`] | no |
//! | 9   | 2 bytes | [`DptValue::Float`] | yes |
//! | 10  | 3 bytes | [`DptValue::Time`] | yes |
//! | 11  | 3 bytes | [`DptValue::Date`] | yes |
//! | 12  | 4 bytes | [`DptValue::U32`] | no |
//! | 13  | 4 bytes | [`DptValue::I32`] | no |
//! | 14  | 4 bytes | [`DptValue::Float`] | yes |
//! | 16  | 14 bytes | [`DptValue::Text`] | no |
//! | 232 | 3 bytes | [`DptValue::Rgb`] | no |
//!
//! ## Usage
//!
//! ```rust
//! use knx_groupsocket::dpt::{self, DatapointType, DptValue};
//!
//! // Known type
//! let decoded = dpt::decode_as(DatapointType::Dpt9, &[0x0C, 0x38]);
//! assert_eq!(decoded.dpt, DatapointType::Dpt9);
//!
//! // Unknown type: guess from the declared frame length
//! let decoded = dpt::decode(9, &[0x2A]);
//! assert_eq!(decoded.value, Ok(DptValue::U8(42)));
//!
//! // Encode
//! let payload = dpt::encode(DatapointType::Dpt7, &DptValue::U16(5000))?;
//! assert_eq!(&payload[..], &[0x13, 0x88]);
//! # Ok::<(), knx_groupsocket::KnxError>(())
//! ```

use core::fmt;
use core::str::FromStr;

use chrono::NaiveDate;

use crate::error::{KnxError, Result};

pub mod dpt1;
pub mod dpt3;
pub mod dpt4;
pub mod dpt5;
pub mod dpt7;
pub mod dpt9;
pub mod dpt10;
pub mod dpt11;
pub mod dpt13;
pub mod dpt14;
pub mod dpt16;
pub mod dpt232;

// Re-export common types
#[doc(inline)]
pub use dpt1::Dpt1;
#[doc(inline)]
pub use dpt3::{Dpt2, Dpt3};
#[doc(inline)]
pub use dpt4::Dpt4;
#[doc(inline)]
pub use dpt5::{Dpt5, Dpt6};
#[doc(inline)]
pub use dpt7::{Dpt7, Dpt8};
#[doc(inline)]
pub use dpt9::Dpt9;
#[doc(inline)]
pub use dpt10::{Dpt10, TimeOfDay};
#[doc(inline)]
pub use dpt11::Dpt11;
#[doc(inline)]
pub use dpt13::{Dpt12, Dpt13};
#[doc(inline)]
pub use dpt14::Dpt14;
#[doc(inline)]
pub use dpt16::Dpt16;
#[doc(inline)]
pub use dpt232::{Dpt232, Rgb};

/// Largest fixed payload of any supported type (DPT 16).
pub const MAX_PAYLOAD_SIZE: usize = 14;

/// Encoded payload, sized for the largest supported type.
pub type Payload = heapless::Vec<u8, MAX_PAYLOAD_SIZE>;

/// Trait for encoding values to KNX data format
pub trait DptEncode<T> {
    /// Encode a value to its wire representation
    fn encode(&self, value: T) -> Result<Payload>;
}

/// Trait for decoding KNX data to values
pub trait DptDecode<T> {
    /// Decode KNX byte representation to a value
    ///
    /// The slice must have exactly the size of the type.
    fn decode(&self, data: &[u8]) -> Result<T>;
}

/// Fail with a length mismatch unless `data` has exactly `expected` bytes.
#[inline]
pub(crate) fn expect_len(data: &[u8], expected: usize) -> Result<()> {
    if data.len() == expected {
        Ok(())
    } else {
        Err(KnxError::length_mismatch(expected, data.len()))
    }
}

/// Copy encoded bytes into a [`Payload`].
#[inline]
pub(crate) fn payload(bytes: &[u8]) -> Result<Payload> {
    Payload::from_slice(bytes).map_err(|_full| KnxError::payload_too_large())
}

// =============================================================================
// Datapoint type identifier
// =============================================================================

/// Main datapoint type of a group address.
///
/// Sub-types (`9.001` temperature, `9.004` lux, ...) share the encoding of
/// their main type, so only the main number is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DatapointType {
    /// 1 bit boolean
    Dpt1,
    /// 2 bit controlled boolean
    Dpt2,
    /// 4 bit dimming/blind step
    Dpt3,
    /// Single character
    Dpt4,
    /// 8 bit unsigned
    Dpt5,
    /// 8 bit signed
    Dpt6,
    /// 16 bit unsigned
    Dpt7,
    /// 16 bit signed
    Dpt8,
    /// 16 bit KNX float
    Dpt9,
    /// Time of day with weekday
    Dpt10,
    /// Date
    Dpt11,
    /// 32 bit unsigned
    Dpt12,
    /// 32 bit signed
    Dpt13,
    /// IEEE-754 32 bit float
    Dpt14,
    /// 14 character string
    Dpt16,
    /// RGB color
    Dpt232,
}

impl DatapointType {
    /// Every supported type, in ascending DPT number.
    pub const ALL: [Self; 16] = [
        Self::Dpt1,
        Self::Dpt2,
        Self::Dpt3,
        Self::Dpt4,
        Self::Dpt5,
        Self::Dpt6,
        Self::Dpt7,
        Self::Dpt8,
        Self::Dpt9,
        Self::Dpt10,
        Self::Dpt11,
        Self::Dpt12,
        Self::Dpt13,
        Self::Dpt14,
        Self::Dpt16,
        Self::Dpt232,
    ];

    /// Main DPT number (e.g. `9` for DPT 9.xxx)
    pub const fn number(self) -> u16 {
        match self {
            Self::Dpt1 => 1,
            Self::Dpt2 => 2,
            Self::Dpt3 => 3,
            Self::Dpt4 => 4,
            Self::Dpt5 => 5,
            Self::Dpt6 => 6,
            Self::Dpt7 => 7,
            Self::Dpt8 => 8,
            Self::Dpt9 => 9,
            Self::Dpt10 => 10,
            Self::Dpt11 => 11,
            Self::Dpt12 => 12,
            Self::Dpt13 => 13,
            Self::Dpt14 => 14,
            Self::Dpt16 => 16,
            Self::Dpt232 => 232,
        }
    }

    /// Look up a main DPT number.
    pub const fn from_number(number: u16) -> Option<Self> {
        Some(match number {
            1 => Self::Dpt1,
            2 => Self::Dpt2,
            3 => Self::Dpt3,
            4 => Self::Dpt4,
            5 => Self::Dpt5,
            6 => Self::Dpt6,
            7 => Self::Dpt7,
            8 => Self::Dpt8,
            9 => Self::Dpt9,
            10 => Self::Dpt10,
            11 => Self::Dpt11,
            12 => Self::Dpt12,
            13 => Self::Dpt13,
            14 => Self::Dpt14,
            16 => Self::Dpt16,
            232 => Self::Dpt232,
            _ => return None,
        })
    }

    /// Canonical name (`"DPT9"`)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dpt1 => "DPT1",
            Self::Dpt2 => "DPT2",
            Self::Dpt3 => "DPT3",
            Self::Dpt4 => "DPT4",
            Self::Dpt5 => "DPT5",
            Self::Dpt6 => "DPT6",
            Self::Dpt7 => "DPT7",
            Self::Dpt8 => "DPT8",
            Self::Dpt9 => "DPT9",
            Self::Dpt10 => "DPT10",
            Self::Dpt11 => "DPT11",
            Self::Dpt12 => "DPT12",
            Self::Dpt13 => "DPT13",
            Self::Dpt14 => "DPT14",
            Self::Dpt16 => "DPT16",
            Self::Dpt232 => "DPT232",
        }
    }

    /// Payload size in bytes
    pub const fn size(self) -> usize {
        match self {
            Self::Dpt1 | Self::Dpt2 | Self::Dpt3 | Self::Dpt4 | Self::Dpt5 | Self::Dpt6 => 1,
            Self::Dpt7 | Self::Dpt8 | Self::Dpt9 => 2,
            Self::Dpt10 | Self::Dpt11 | Self::Dpt232 => 3,
            Self::Dpt12 | Self::Dpt13 | Self::Dpt14 => 4,
            Self::Dpt16 => 14,
        }
    }

    /// Whether [`encode`] supports this type
    pub const fn is_encodable(self) -> bool {
        matches!(
            self,
            Self::Dpt1
                | Self::Dpt2
                | Self::Dpt3
                | Self::Dpt5
                | Self::Dpt7
                | Self::Dpt9
                | Self::Dpt10
                | Self::Dpt11
                | Self::Dpt14
        )
    }

    /// Whether the payload fits into the low bits of the APCI byte
    pub const fn is_embedded(self) -> bool {
        matches!(self, Self::Dpt1 | Self::Dpt2 | Self::Dpt3)
    }
}

impl fmt::Display for DatapointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatapointType {
    type Err = KnxError;

    /// Accepts `"DPT9"`, `"DPT9.001"`, `"dpt9"`, `"9.001"` and `"9"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let rest = match s.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("dpt") => &s[3..],
            _ => s,
        };
        let main = rest.split('.').next().unwrap_or_default();

        main.parse::<u16>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(KnxError::unknown_dpt)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DatapointType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DatapointType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse()
            .map_err(|_unknown| serde::de::Error::custom(format_args!("unknown datapoint type {s:?}")))
    }
}

// =============================================================================
// Native values
// =============================================================================

/// Native value of a decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub enum DptValue {
    /// DPT 1
    Bool(bool),
    /// DPT 2 (0-3) and DPT 3 (0-15)
    Bits(u8),
    /// DPT 4 and DPT 16
    Text(String),
    /// DPT 5
    U8(u8),
    /// DPT 6
    I8(i8),
    /// DPT 7
    U16(u16),
    /// DPT 8
    I16(i16),
    /// DPT 9 and DPT 14
    Float(f32),
    /// DPT 10
    Time(TimeOfDay),
    /// DPT 11
    Date(NaiveDate),
    /// DPT 12
    U32(u32),
    /// DPT 13
    I32(i32),
    /// DPT 232
    Rgb(Rgb),
}

impl DptValue {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            DptValue::Bool(b) => Some(f64::from(u8::from(b))),
            DptValue::Bits(v) | DptValue::U8(v) => Some(f64::from(v)),
            DptValue::I8(v) => Some(f64::from(v)),
            DptValue::U16(v) => Some(f64::from(v)),
            DptValue::I16(v) => Some(f64::from(v)),
            DptValue::Float(v) => Some(f64::from(v)),
            DptValue::U32(v) => Some(f64::from(v)),
            DptValue::I32(v) => Some(f64::from(v)),
            DptValue::Text(_) | DptValue::Time(_) | DptValue::Date(_) | DptValue::Rgb(_) => None,
        }
    }
}

impl fmt::Display for DptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DptValue::Bool(b) => write!(f, "{}", u8::from(*b)),
            DptValue::Bits(v) | DptValue::U8(v) => write!(f, "{v}"),
            DptValue::Text(s) => write!(f, "{s}"),
            DptValue::I8(v) => write!(f, "{v}"),
            DptValue::U16(v) => write!(f, "{v}"),
            DptValue::I16(v) => write!(f, "{v}"),
            DptValue::Float(v) => write!(f, "{v}"),
            DptValue::Time(t) => write!(f, "{t}"),
            DptValue::Date(d) => write!(f, "{d}"),
            DptValue::U32(v) => write!(f, "{v}"),
            DptValue::I32(v) => write!(f, "{v}"),
            DptValue::Rgb(c) => write!(f, "{c}"),
        }
    }
}

impl From<bool> for DptValue {
    fn from(value: bool) -> Self {
        DptValue::Bool(value)
    }
}

impl From<f32> for DptValue {
    fn from(value: f32) -> Self {
        DptValue::Float(value)
    }
}

impl From<TimeOfDay> for DptValue {
    fn from(value: TimeOfDay) -> Self {
        DptValue::Time(value)
    }
}

impl From<NaiveDate> for DptValue {
    fn from(value: NaiveDate) -> Self {
        DptValue::Date(value)
    }
}

impl From<Rgb> for DptValue {
    fn from(value: Rgb) -> Self {
        DptValue::Rgb(value)
    }
}

// =============================================================================
// Decode result
// =============================================================================

/// Outcome of one payload decode attempt.
///
/// Carries the datapoint type that was used (looked up or guessed) together
/// with either the value or the reason there is none.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// Type used for decoding
    pub dpt: DatapointType,
    /// Decoded value or decode error
    pub value: Result<DptValue>,
}

impl Decoded {
    /// The value, if decoding succeeded
    pub fn value(&self) -> Option<&DptValue> {
        self.value.as_ref().ok()
    }

    /// The error, if decoding failed
    pub fn error(&self) -> Option<&KnxError> {
        self.value.as_ref().err()
    }
}

// =============================================================================
// Codec entry points
// =============================================================================

/// Decode a payload whose datapoint type is known.
///
/// The payload must have exactly [`DatapointType::size`] bytes, otherwise the
/// result carries a length mismatch error.
pub fn decode_as(dpt: DatapointType, data: &[u8]) -> Decoded {
    let value = match dpt {
        DatapointType::Dpt1 => Dpt1.decode(data).map(DptValue::Bool),
        DatapointType::Dpt2 => Dpt2.decode(data).map(DptValue::Bits),
        DatapointType::Dpt3 => Dpt3.decode(data).map(DptValue::Bits),
        DatapointType::Dpt4 => Dpt4.decode(data).map(DptValue::Text),
        DatapointType::Dpt5 => Dpt5.decode(data).map(DptValue::U8),
        DatapointType::Dpt6 => Dpt6.decode(data).map(DptValue::I8),
        DatapointType::Dpt7 => Dpt7.decode(data).map(DptValue::U16),
        DatapointType::Dpt8 => Dpt8.decode(data).map(DptValue::I16),
        DatapointType::Dpt9 => Dpt9.decode(data).map(DptValue::Float),
        DatapointType::Dpt10 => Dpt10.decode(data).map(DptValue::Time),
        DatapointType::Dpt11 => Dpt11.decode(data).map(DptValue::Date),
        DatapointType::Dpt12 => Dpt12.decode(data).map(DptValue::U32),
        DatapointType::Dpt13 => Dpt13.decode(data).map(DptValue::I32),
        DatapointType::Dpt14 => Dpt14.decode(data).map(DptValue::Float),
        DatapointType::Dpt16 => Dpt16.decode(data).map(DptValue::Text),
        DatapointType::Dpt232 => Dpt232.decode(data).map(DptValue::Rgb),
    };

    Decoded { dpt, value }
}

/// Decode a payload for a textual type identifier (`"DPT9"`, `"9.001"`, ...).
///
/// Fails with an unknown type error if the identifier names no supported type.
pub fn decode_as_named(dpt: &str, data: &[u8]) -> Result<Decoded> {
    let dpt = dpt.parse::<DatapointType>()?;
    Ok(decode_as(dpt, data))
}

/// Guess the type of a payload from the declared length of its frame.
///
/// `declared_len` is the length field of the group socket frame (byte 1).
/// The table below is a best-effort guess used when the destination has no
/// configured type:
///
/// | declared length | type |
/// |-----------------|------|
/// | 8  | DPT 1 (value embedded in the APCI byte) |
/// | 9  | DPT 5 |
/// | 10 | DPT 9 |
/// | other | DPT 14, from the first four payload bytes |
pub fn decode(declared_len: u8, data: &[u8]) -> Decoded {
    match declared_len {
        8 => decode_as(DatapointType::Dpt1, data),
        9 => decode_as(DatapointType::Dpt5, data),
        10 => decode_as(DatapointType::Dpt9, data),
        _ => {
            let value = data
                .get(..DatapointType::Dpt14.size())
                .ok_or_else(|| KnxError::length_mismatch(DatapointType::Dpt14.size(), data.len()))
                .and_then(|raw| Dpt14.decode(raw))
                .map(DptValue::Float);
            Decoded {
                dpt: DatapointType::Dpt14,
                value,
            }
        }
    }
}

/// Encode a value for the given type.
///
/// Only DPT 1, 2, 3, 5, 7, 9, 10, 11 and 14 have encoders; the other types
/// return an unsupported encoding error. A value variant that does not belong
/// to `dpt` is a type mismatch.
pub fn encode(dpt: DatapointType, value: &DptValue) -> Result<Payload> {
    if !dpt.is_encodable() {
        return Err(KnxError::unsupported_encoding());
    }

    match (dpt, value) {
        (DatapointType::Dpt1, DptValue::Bool(v)) => Dpt1.encode(*v),
        (DatapointType::Dpt2, DptValue::Bits(v)) => Dpt2.encode(*v),
        (DatapointType::Dpt3, DptValue::Bits(v)) => Dpt3.encode(*v),
        (DatapointType::Dpt5, DptValue::U8(v)) => Dpt5.encode(*v),
        (DatapointType::Dpt7, DptValue::U16(v)) => Dpt7.encode(*v),
        (DatapointType::Dpt9, DptValue::Float(v)) => Dpt9.encode(*v),
        (DatapointType::Dpt10, DptValue::Time(v)) => Dpt10.encode(*v),
        (DatapointType::Dpt11, DptValue::Date(v)) => Dpt11.encode(*v),
        (DatapointType::Dpt14, DptValue::Float(v)) => Dpt14.encode(*v),
        _ => Err(KnxError::dpt_type_mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
        assert!((a - b).abs() < epsilon, "Expected {a} ≈ {b}, diff = {}", (a - b).abs());
    }

    fn float(decoded: &Decoded) -> f32 {
        match decoded.value() {
            Some(DptValue::Float(v)) => *v,
            other => panic!("expected float, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_identifiers() {
        assert_eq!("DPT9".parse::<DatapointType>().unwrap(), DatapointType::Dpt9);
        assert_eq!("DPT9.001".parse::<DatapointType>().unwrap(), DatapointType::Dpt9);
        assert_eq!("dpt232".parse::<DatapointType>().unwrap(), DatapointType::Dpt232);
        assert_eq!("5.001".parse::<DatapointType>().unwrap(), DatapointType::Dpt5);
        assert_eq!("16".parse::<DatapointType>().unwrap(), DatapointType::Dpt16);
    }

    #[test]
    fn test_parse_unknown_identifiers() {
        for id in ["DPT15", "DPT", "", "UNKN", "DPTx", "DPT-1", "x.001"] {
            let err = id.parse::<DatapointType>().unwrap_err();
            assert!(err.as_dpt().unwrap().is_unknown_type(), "{id}");
        }
    }

    #[test]
    fn test_name_round_trip() {
        for dpt in DatapointType::ALL {
            assert_eq!(dpt.to_string().parse::<DatapointType>().unwrap(), dpt);
            assert_eq!(DatapointType::from_number(dpt.number()), Some(dpt));
        }
    }

    #[test]
    fn test_sizes() {
        let expected = [1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 4, 4, 4, 14, 3];
        for (dpt, size) in DatapointType::ALL.iter().zip(expected) {
            assert_eq!(dpt.size(), size, "{dpt}");
        }
    }

    #[test]
    fn test_decode_as_rejects_wrong_length() {
        for dpt in DatapointType::ALL {
            for len in [0, dpt.size() + 1, dpt.size() + 3] {
                let data = vec![0u8; len];
                let decoded = decode_as(dpt, &data);
                assert_eq!(decoded.dpt, dpt);
                assert!(decoded.value().is_none());
                let err = decoded.error().unwrap().as_dpt().unwrap();
                assert!(err.is_length_mismatch(), "{dpt} len {len}");
                assert_eq!(err.lengths(), Some((dpt.size(), len)));
            }
        }
    }

    #[test]
    fn test_decode_as_named() {
        let decoded = decode_as_named("DPT7.001", &[0x13, 0x88]).unwrap();
        assert_eq!(decoded.dpt, DatapointType::Dpt7);
        assert_eq!(decoded.value, Ok(DptValue::U16(5000)));

        let err = decode_as_named("DPT99", &[0x00]).unwrap_err();
        assert!(err.as_dpt().unwrap().is_unknown_type());
    }

    #[test]
    fn test_decode_as_dpt9_reference_values() {
        assert_float_eq(float(&decode_as(DatapointType::Dpt9, &[0xA3, 0xB5])), -175.84, 0.01);
        assert_float_eq(float(&decode_as(DatapointType::Dpt9, &[0xA5, 0x8D])), -100.32, 0.01);
        assert_float_eq(float(&decode_as(DatapointType::Dpt9, &[0x97, 0x81])), -5.08, 0.01);
    }

    #[test]
    fn test_decode_as_dpt1() {
        assert_eq!(decode_as(DatapointType::Dpt1, &[65]).value, Ok(DptValue::Bool(true)));
        assert_eq!(decode_as(DatapointType::Dpt1, &[64]).value, Ok(DptValue::Bool(false)));
    }

    #[test]
    fn test_heuristic_dpt1() {
        let decoded = decode(8, &[0x81]);
        assert_eq!(decoded.dpt, DatapointType::Dpt1);
        assert_eq!(decoded.value, Ok(DptValue::Bool(true)));
    }

    #[test]
    fn test_heuristic_dpt5() {
        let decoded = decode(9, &[0xFF]);
        assert_eq!(decoded.dpt, DatapointType::Dpt5);
        assert_eq!(decoded.value, Ok(DptValue::U8(255)));

        let decoded = decode(9, &[0x01, 0x02]);
        assert_eq!(decoded.dpt, DatapointType::Dpt5);
        assert!(decoded.error().unwrap().as_dpt().unwrap().is_length_mismatch());
    }

    #[test]
    fn test_heuristic_dpt9() {
        let decoded = decode(10, &[0x0C, 0x38]);
        assert_eq!(decoded.dpt, DatapointType::Dpt9);
        assert_float_eq(float(&decoded), 21.6, 0.01);

        let decoded = decode(10, &[0x0C]);
        assert_eq!(decoded.dpt, DatapointType::Dpt9);
        assert!(decoded.error().unwrap().as_dpt().unwrap().is_length_mismatch());
    }

    #[test]
    fn test_heuristic_fallback_dpt14() {
        let bytes = 21.5f32.to_be_bytes();
        let decoded = decode(12, &bytes);
        assert_eq!(decoded.dpt, DatapointType::Dpt14);
        assert_eq!(decoded.value, Ok(DptValue::Float(21.5)));

        // Trailing bytes are ignored
        let decoded = decode(20, &[bytes[0], bytes[1], bytes[2], bytes[3], 0xAA, 0xBB]);
        assert_eq!(decoded.value, Ok(DptValue::Float(21.5)));

        // Too short to hold a float: still reported as DPT 14
        let decoded = decode(7, &[0x01]);
        assert_eq!(decoded.dpt, DatapointType::Dpt14);
        assert!(decoded.error().unwrap().as_dpt().unwrap().is_length_mismatch());
    }

    #[test]
    fn test_encode_decode_agree() {
        let cases = [
            (DatapointType::Dpt1, DptValue::Bool(true)),
            (DatapointType::Dpt2, DptValue::Bits(3)),
            (DatapointType::Dpt3, DptValue::Bits(11)),
            (DatapointType::Dpt5, DptValue::U8(200)),
            (DatapointType::Dpt7, DptValue::U16(65535)),
            (DatapointType::Dpt14, DptValue::Float(-1234.5678)),
            (
                DatapointType::Dpt11,
                DptValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
            ),
        ];
        for (dpt, value) in cases {
            let payload = encode(dpt, &value).unwrap();
            assert_eq!(payload.len(), dpt.size());
            // DPT 1 payloads travel OR-ed with the write APCI bit
            let wire: Vec<u8> = if dpt == DatapointType::Dpt1 {
                vec![0x80 | payload[0]]
            } else {
                payload.to_vec()
            };
            assert_eq!(decode_as(dpt, &wire).value, Ok(value), "{dpt}");
        }
    }

    #[test]
    fn test_encode_dpt9_within_precision() {
        for value in [0.0f32, 21.5, -5.08, 20.48, -175.84, 0.01] {
            let payload = encode(DatapointType::Dpt9, &DptValue::Float(value)).unwrap();
            assert_float_eq(float(&decode_as(DatapointType::Dpt9, &payload)), value, 0.011);
        }
    }

    #[test]
    fn test_encode_unsupported() {
        for dpt in DatapointType::ALL.into_iter().filter(|d| !d.is_encodable()) {
            let err = encode(dpt, &DptValue::U8(1)).unwrap_err();
            assert!(err.as_dpt().unwrap().is_unsupported_encoding(), "{dpt}");
        }
    }

    #[test]
    fn test_encode_type_mismatch() {
        let err = encode(DatapointType::Dpt9, &DptValue::Bool(true)).unwrap_err();
        assert!(err.as_dpt().unwrap().is_type_mismatch());
        let err = encode(DatapointType::Dpt5, &DptValue::U16(1)).unwrap_err();
        assert!(err.as_dpt().unwrap().is_type_mismatch());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(DptValue::Bool(true).to_string(), "1");
        assert_eq!(DptValue::I16(-300).to_string(), "-300");
        assert_eq!(DptValue::Text("hello".into()).to_string(), "hello");
    }

    #[test]
    fn test_value_as_f64() {
        assert_eq!(DptValue::I8(-5).as_f64(), Some(-5.0));
        assert_eq!(DptValue::U32(7).as_f64(), Some(7.0));
        assert_eq!(DptValue::Text(String::new()).as_f64(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_name() {
        let json = serde_json::to_string(&DatapointType::Dpt232).unwrap();
        assert_eq!(json, "\"DPT232\"");
        let dpt: DatapointType = serde_json::from_str("\"DPT9.001\"").unwrap();
        assert_eq!(dpt, DatapointType::Dpt9);
        assert!(serde_json::from_str::<DatapointType>("\"DPT99\"").is_err());
    }
}
