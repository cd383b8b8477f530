//! Outgoing group value messages.
//!
//! Builds the TPCI/APCI bytes plus payload that a group socket expects after
//! the destination address:
//!
//! ```text
//! read                 00 00
//! write DPT 1/2/3      00 80|value
//! write other types    00 80 payload...
//! response             00 40 ...
//! ```

use crate::dpt::{self, DatapointType, DptValue, MAX_PAYLOAD_SIZE};
use crate::error::{KnxError, Result};
use crate::protocol::Action;

/// Largest message: TPCI, APCI and the largest payload
pub const MAX_MESSAGE_SIZE: usize = 2 + MAX_PAYLOAD_SIZE;

/// Encoded group value message
pub type Message = heapless::Vec<u8, MAX_MESSAGE_SIZE>;

/// Build the message for `action` carrying `value` encoded as `dpt`.
///
/// Reads carry no value, so `dpt` and `value` are ignored for them.
///
/// # Errors
///
/// Propagates the encoding errors of [`dpt::encode`]: unsupported types,
/// values of the wrong variant and values out of range.
///
/// # Examples
///
/// ```rust
/// use knx_groupsocket::dpt::{DatapointType, DptValue};
/// use knx_groupsocket::protocol::{create_message, Action};
///
/// let msg = create_message(Action::Write, DatapointType::Dpt1, &DptValue::Bool(true))?;
/// assert_eq!(&msg[..], &[0x00, 0x81]);
///
/// let msg = create_message(Action::Response, DatapointType::Dpt5, &DptValue::U8(42))?;
/// assert_eq!(&msg[..], &[0x00, 0x40, 0x2A]);
/// # Ok::<(), knx_groupsocket::KnxError>(())
/// ```
pub fn create_message(action: Action, dpt: DatapointType, value: &DptValue) -> Result<Message> {
    if action == Action::Read {
        return read_message();
    }

    let payload = dpt::encode(dpt, value)?;
    let apci = action.apci();

    let mut msg = Message::new();
    let filled = if dpt.is_embedded() {
        let bits = payload.first().copied().unwrap_or_default();
        msg.extend_from_slice(&[0x00, apci | bits])
    } else {
        msg.extend_from_slice(&[0x00, apci])
            .and_then(|()| msg.extend_from_slice(&payload))
    };
    filled.map_err(|_full| KnxError::payload_too_large())?;

    Ok(msg)
}

/// Message of a group value read
///
/// # Errors
///
/// Returns a payload too large error if the message buffer cannot hold the
/// two header bytes.
pub fn read_message() -> Result<Message> {
    Message::from_slice(&[0x00, Action::Read.apci()]).map_err(|_full| KnxError::payload_too_large())
}
