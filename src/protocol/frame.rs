//! Group socket frame views.
//!
//! This module provides zero-copy views over the frames a knxd/eibd group
//! socket writes into its byte stream. It handles frame boundaries,
//! classification and the field layout of group telegrams.
//!
//! ## Frame Structure
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  0  │ control                                │
//! │  1  │ declared length (bytes after this one)  │
//! ├──────────────────────────────────────────────┤
//! │  2  │ 3  │ message code                      │
//! │  4  │ 5  │ source individual address         │
//! │  6  │ 7  │ destination group address         │
//! │  8       │ TPCI                              │
//! │  9       │ APCI (action, small payloads)     │
//! │ 10..     │ payload (declared length > 8)     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The frame kind depends only on its total length (`declared + 2`):
//! 4 bytes is a confirmation, 5 bytes acknowledges an opened group socket and
//! anything from 6 bytes on is a telegram.
//!
//! ## Example
//!
//! ```rust
//! use knx_groupsocket::protocol::frame::{Frame, FrameKind};
//! use knx_groupsocket::protocol::Action;
//!
//! let data = [0x00, 0x08, 0x00, 0x27, 0x11, 0x05, 0x0A, 0x03, 0x00, 0x81];
//!
//! let frame = Frame::parse(&data)?;
//! assert_eq!(frame.total_len(), 10);
//! assert_eq!(frame.kind(), FrameKind::Telegram);
//!
//! let telegram = frame.telegram()?;
//! assert_eq!(telegram.action()?, Action::Write);
//! assert_eq!(telegram.destination().to_string(), "1/2/3");
//! assert_eq!(telegram.payload(), &[0x81]);
//! # Ok::<(), knx_groupsocket::KnxError>(())
//! ```

use crate::addressing::{GroupAddress, IndividualAddress};
use crate::error::{KnxError, Result};
use crate::protocol::Action;

/// Compiler hint for unlikely branches (error paths)
#[inline(always)]
#[cold]
const fn unlikely(b: bool) -> bool {
    b
}

/// Classification of a complete frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameKind {
    /// Too short to carry any meaning (total length below 4)
    Unknown,
    /// Confirmation of a sent telegram (total length 4)
    Confirm,
    /// Acknowledge of an opened group socket (total length 5)
    OpenGroupSocket,
    /// Group telegram (total length 6 and more)
    Telegram,
}

impl FrameKind {
    /// Classify by total frame length.
    pub const fn from_total_len(total_len: usize) -> Self {
        match total_len {
            0..=3 => Self::Unknown,
            4 => Self::Confirm,
            5 => Self::OpenGroupSocket,
            _ => Self::Telegram,
        }
    }
}

/// Zero-copy view of one complete frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Exactly the frame bytes, nothing after it
    data: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Size of the control and length bytes
    pub const HEADER_SIZE: usize = 2;

    /// Total frame length announced by the first two bytes of `buf`.
    ///
    /// `None` until the length byte is available.
    #[inline(always)]
    pub fn announced_len(buf: &[u8]) -> Option<usize> {
        buf.get(1).map(|&declared| usize::from(declared) + Self::HEADER_SIZE)
    }

    /// View a buffer that must hold exactly one frame.
    ///
    /// # Errors
    ///
    /// Returns a malformed frame error if the buffer is shorter or longer
    /// than the announced length.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        match Self::announced_len(data) {
            Some(total_len) if total_len == data.len() => Ok(Self { data }),
            _ => Err(KnxError::malformed_frame()),
        }
    }

    /// Frame length including the two header bytes
    #[inline(always)]
    pub const fn total_len(&self) -> usize {
        self.data.len()
    }

    /// Frame classification
    #[inline(always)]
    pub const fn kind(&self) -> FrameKind {
        FrameKind::from_total_len(self.data.len())
    }

    /// View the frame as a group telegram.
    ///
    /// # Errors
    ///
    /// Returns a malformed frame error if the frame is not a telegram or is
    /// too short to hold the APCI byte.
    pub fn telegram(&self) -> Result<Telegram<'a>> {
        if self.kind() != FrameKind::Telegram {
            return Err(KnxError::malformed_frame());
        }
        Telegram::parse(self.data)
    }
}

/// Zero-copy view of a group telegram frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Telegram<'a> {
    data: &'a [u8],
}

impl<'a> Telegram<'a> {
    /// Shortest telegram that still holds the APCI byte
    pub const MIN_LEN: usize = 10;

    const SOURCE_OFFSET: usize = 4;
    const DESTINATION_OFFSET: usize = 6;
    const APCI_OFFSET: usize = 9;
    const PAYLOAD_OFFSET: usize = 10;

    /// Largest declared length whose payload is embedded in the APCI byte
    pub const MAX_EMBEDDED_DECLARED_LEN: u8 = 8;

    /// Parse a telegram frame.
    ///
    /// # Errors
    ///
    /// Returns a malformed frame error if fewer than [`Self::MIN_LEN`] bytes
    /// are given.
    #[inline(always)]
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if unlikely(data.len() < Self::MIN_LEN) {
            return Err(KnxError::malformed_frame());
        }
        Ok(Self { data })
    }

    /// Length byte as found on the wire
    #[inline(always)]
    pub fn declared_len(&self) -> u8 {
        self.data[1]
    }

    /// Sending device
    #[inline(always)]
    pub fn source(&self) -> IndividualAddress {
        let at = Self::SOURCE_OFFSET;
        IndividualAddress::from_be_bytes([self.data[at], self.data[at + 1]])
    }

    /// Destination group
    #[inline(always)]
    pub fn destination(&self) -> GroupAddress {
        let at = Self::DESTINATION_OFFSET;
        GroupAddress::from_be_bytes([self.data[at], self.data[at + 1]])
    }

    /// Raw APCI byte
    #[inline(always)]
    pub fn control(&self) -> u8 {
        self.data[Self::APCI_OFFSET]
    }

    /// Group value service of the telegram.
    ///
    /// # Errors
    ///
    /// Returns an unsupported service error for APCI values that are not a
    /// group read, response or write.
    #[inline]
    pub fn action(&self) -> Result<Action> {
        Action::from_control(self.control())
    }

    /// Value bytes of the telegram.
    ///
    /// Up to a declared length of 8 the value lives in the low bits of the
    /// APCI byte and the slice is that single byte. Longer telegrams carry
    /// the value after it.
    pub fn payload(&self) -> &'a [u8] {
        if self.declared_len() <= Self::MAX_EMBEDDED_DECLARED_LEN {
            &self.data[self.data.len() - 1..]
        } else {
            &self.data[Self::PAYLOAD_OFFSET..]
        }
    }
}
