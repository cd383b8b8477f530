//! Group socket protocol implementation.
//!
//! This module contains the frame views, the stream parser that turns a
//! knxd/eibd group socket byte stream into events, the event router and the
//! builder for outgoing group messages.

pub mod codec;
pub mod event;
pub mod frame;
pub mod message;
pub mod parser;

use core::fmt;
use core::str::FromStr;

use crate::error::{KnxError, Result};

pub use codec::GroupSocketCodec;
pub use event::{EventKey, EventRouter, GroupEvent, ParsedEvent};
pub use frame::{Frame, FrameKind, Telegram};
pub use message::{create_message, Message};
pub use parser::TelegramParser;

/// Group value service carried by a telegram.
///
/// Two APCI bits of the control byte select the service. For writes and
/// responses the low six bits may hold a DPT 1/2/3 value; a read is the
/// plain `0x00` byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    /// A_GroupValue_Read (`0x00`)
    Read,
    /// A_GroupValue_Response (`0x40`)
    Response,
    /// A_GroupValue_Write (`0x80`)
    Write,
}

impl Action {
    /// Mask of the service bits in the control byte
    pub const APCI_MASK: u8 = 0xC0;

    /// Service of a control byte.
    ///
    /// The parser logs and skips telegrams whose control byte is rejected
    /// here; the frames after them are still parsed.
    ///
    /// # Errors
    ///
    /// Returns an unsupported service error for
    /// - `0x01..=0x3F`: read bits with value bits set, which no group read
    ///   carries
    /// - `0xC0..=0xFF`: not a group value service
    pub const fn from_control(control: u8) -> Result<Self> {
        match control & Self::APCI_MASK {
            0x00 if control == 0x00 => Ok(Self::Read),
            0x40 => Ok(Self::Response),
            0x80 => Ok(Self::Write),
            _ => Err(KnxError::unsupported_service()),
        }
    }

    /// Service bits for an outgoing message
    pub const fn apci(self) -> u8 {
        match self {
            Self::Read => 0x00,
            Self::Response => 0x40,
            Self::Write => 0x80,
        }
    }

    /// Lowercase name, also used as event name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Response => "response",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = KnxError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "read" => Ok(Self::Read),
            "response" => Ok(Self::Response),
            "write" => Ok(Self::Write),
            _ => Err(KnxError::unsupported_service()),
        }
    }
}
