//! Individual addresses.
//!
//! The source of every telegram is the individual address of the sending
//! device, `area.line.device` packed as `AAAA LLLL DDDDDDDD`.

use core::fmt;
use core::fmt::Write as _;
use core::str::FromStr;

use crate::error::{KnxError, Result};

/// Physical address of a bus device
///
/// ```
/// use knx_groupsocket::IndividualAddress;
///
/// let addr: IndividualAddress = "1.1.5".parse()?;
/// assert_eq!(u16::from(addr), 0x1105);
/// assert_eq!(addr.device(), 5);
/// # Ok::<(), knx_groupsocket::KnxError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndividualAddress {
    raw: u16,
}

impl IndividualAddress {
    /// Largest area and line number
    pub const MAX_AREA_LINE: u8 = 15;

    /// Address `area.line.device`.
    ///
    /// # Errors
    ///
    /// Returns an out of range error for `area > 15` or `line > 15`.
    pub fn new(area: u8, line: u8, device: u8) -> Result<Self> {
        if area > Self::MAX_AREA_LINE || line > Self::MAX_AREA_LINE {
            return Err(KnxError::address_out_of_range());
        }
        Ok(Self {
            raw: (u16::from(area) << 12) | (u16::from(line) << 8) | u16::from(device),
        })
    }

    /// Address as read from a telegram
    #[inline(always)]
    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self {
            raw: u16::from_be_bytes(bytes),
        }
    }

    #[inline(always)]
    pub const fn area(self) -> u8 {
        (self.raw >> 12) as u8
    }

    #[inline(always)]
    pub const fn line(self) -> u8 {
        ((self.raw >> 8) & 0x0F) as u8
    }

    #[inline(always)]
    pub const fn device(self) -> u8 {
        (self.raw & 0xFF) as u8
    }

    /// Dotted notation in a fixed buffer
    pub fn to_heapless(self) -> heapless::String<16> {
        let mut text = heapless::String::new();
        // "15.15.255" fits
        write!(text, "{}", self).map(|()| text).unwrap_or_default()
    }
}

impl From<u16> for IndividualAddress {
    #[inline(always)]
    fn from(raw: u16) -> Self {
        Self { raw }
    }
}

impl From<IndividualAddress> for u16 {
    #[inline(always)]
    fn from(addr: IndividualAddress) -> u16 {
        addr.raw
    }
}

impl fmt::Display for IndividualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.area(), self.line(), self.device())
    }
}

impl FromStr for IndividualAddress {
    type Err = KnxError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('.').map(str::parse::<u8>);

        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(area)), Some(Ok(line)), Some(Ok(device)), None) => Self::new(area, line, device),
            _ => Err(KnxError::invalid_individual_address()),
        }
    }
}
