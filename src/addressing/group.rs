//! Group addresses.
//!
//! Every group telegram is sent to a group address, and the DPT lookup is
//! keyed by it. On the wire it is a big-endian `u16` laid out as
//! `MMMMM III SSSSSSSS` in 3-level notation (`main/middle/sub`) or
//! `MMMMM SSSSSSSSSSS` in 2-level notation (`main/sub`).

use core::fmt;
use core::fmt::Write as _;
use core::str::FromStr;

use crate::error::{KnxError, Result};

/// Destination of a group telegram.
///
/// Displays in 3-level notation; parsing accepts both notations.
///
/// ```
/// use knx_groupsocket::GroupAddress;
///
/// let addr: GroupAddress = "1/2/3".parse()?;
/// assert_eq!(u16::from(addr), 0x0A03);
/// assert_eq!(addr, "1/515".parse::<GroupAddress>()?);
/// assert_eq!(addr.to_string(), "1/2/3");
/// # Ok::<(), knx_groupsocket::KnxError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroupAddress {
    raw: u16,
}

impl GroupAddress {
    /// Largest main group
    pub const MAX_MAIN: u8 = 31;
    /// Largest middle group
    pub const MAX_MIDDLE: u8 = 7;
    /// Largest sub group in 2-level notation
    pub const MAX_SUB_2LEVEL: u16 = 0x07FF;

    /// Address `main/middle/sub`.
    ///
    /// # Errors
    ///
    /// Returns an out of range error for `main > 31` or `middle > 7`.
    pub fn new(main: u8, middle: u8, sub: u8) -> Result<Self> {
        if main > Self::MAX_MAIN || middle > Self::MAX_MIDDLE {
            return Err(KnxError::address_out_of_range());
        }
        Ok(Self {
            raw: (u16::from(main) << 11) | (u16::from(middle) << 8) | u16::from(sub),
        })
    }

    /// Address `main/sub`.
    ///
    /// # Errors
    ///
    /// Returns an out of range error for `main > 31` or `sub > 2047`.
    pub fn new_2level(main: u8, sub: u16) -> Result<Self> {
        if main > Self::MAX_MAIN || sub > Self::MAX_SUB_2LEVEL {
            return Err(KnxError::address_out_of_range());
        }
        Ok(Self {
            raw: (u16::from(main) << 11) | sub,
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
    pub const fn main(self) -> u8 {
        (self.raw >> 11) as u8
    }

    #[inline(always)]
    pub const fn middle(self) -> u8 {
        ((self.raw >> 8) & 0x07) as u8
    }

    #[inline(always)]
    pub const fn sub(self) -> u8 {
        (self.raw & 0xFF) as u8
    }

    /// Sub group in 2-level notation
    #[inline(always)]
    pub const fn sub_2level(self) -> u16 {
        self.raw & Self::MAX_SUB_2LEVEL
    }

    /// 3-level notation in a fixed buffer
    pub fn to_heapless(self) -> heapless::String<16> {
        let mut text = heapless::String::new();
        // "31/7/255" fits
        write!(text, "{}", self).map(|()| text).unwrap_or_default()
    }
}

impl From<u16> for GroupAddress {
    #[inline(always)]
    fn from(raw: u16) -> Self {
        Self { raw }
    }
}

impl From<GroupAddress> for u16 {
    #[inline(always)]
    fn from(addr: GroupAddress) -> u16 {
        addr.raw
    }
}

impl fmt::Display for GroupAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.main(), self.middle(), self.sub())
    }
}

impl FromStr for GroupAddress {
    type Err = KnxError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('/').map(str::parse::<u16>);
        let invalid = KnxError::invalid_group_address;

        let main = parts.next().and_then(|p| p.ok()).ok_or_else(invalid)?;
        let second = parts.next().and_then(|p| p.ok()).ok_or_else(invalid)?;
        let main = u8::try_from(main).map_err(|_overflow| invalid())?;

        match (parts.next(), parts.next()) {
            (None, _) => Self::new_2level(main, second),
            (Some(Ok(sub)), None) => {
                let middle = u8::try_from(second).map_err(|_overflow| invalid())?;
                let sub = u8::try_from(sub).map_err(|_overflow| invalid())?;
                Self::new(main, middle, sub)
            }
            _ => Err(invalid()),
        }
    }
}
