//! KNX addressing system.
//!
//! KNX uses two types of addresses:
//! - Individual addresses for physical devices (Area.Line.Device)
//! - Group addresses for logical grouping (Main/Middle/Sub or Main/Sub)
//!
//! Both are 16 bit values on the wire; the free functions below convert
//! between the raw value and its textual notation without the caller having
//! to pick the address type first.

pub mod group;
pub mod individual;

pub use group::GroupAddress;
pub use individual::IndividualAddress;

use crate::error::{KnxError, Result};

/// Format a raw 16 bit address.
///
/// Group addresses use 3-level `"a/b/c"` notation, individual addresses
/// `"a.b.c"`.
///
/// # Examples
///
/// ```
/// use knx_groupsocket::addressing::address_to_string;
///
/// assert_eq!(address_to_string(0x0A03, true), "1/2/3");
/// assert_eq!(address_to_string(0x1105, false), "1.1.5");
/// ```
pub fn address_to_string(raw: u16, is_group: bool) -> heapless::String<16> {
    if is_group {
        GroupAddress::from(raw).to_heapless()
    } else {
        IndividualAddress::from(raw).to_heapless()
    }
}

/// Parse either address notation back to its raw 16 bit value.
///
/// Strings containing `/` are group addresses (2 or 3 level), everything else
/// is parsed as an individual address.
pub fn string_to_address(s: &str) -> Result<u16> {
    if s.contains('/') {
        s.parse::<GroupAddress>().map(u16::from)
    } else if s.contains('.') {
        s.parse::<IndividualAddress>().map(u16::from)
    } else {
        Err(KnxError::invalid_individual_address())
    }
}
