//! Group socket stream parser.
//!
//! [`TelegramParser`] accumulates the bytes read from a group socket, cuts
//! them into frames at the boundaries announced by each frame's length byte
//! and turns group telegrams into [`ParsedEvent`]s.
//!
//! The parser is push driven and does no I/O: feed it whatever chunks the
//! transport delivers. Frames split across chunks are completed by later
//! calls, so the events do not depend on how the stream was chunked.
//!
//! ## Example
//!
//! ```rust
//! use knx_groupsocket::dpt::{DatapointType, DptValue};
//! use knx_groupsocket::protocol::{ParsedEvent, TelegramParser};
//! use knx_groupsocket::{ga, DptStore};
//!
//! let mut store = DptStore::new();
//! store.set(ga!(1/2/3), DatapointType::Dpt9);
//! let mut parser = TelegramParser::with_lookup(store);
//!
//! // 1.1.5 writes 21.6 to 1/2/3, delivered in two chunks
//! let frame = [0x00, 0x0A, 0x00, 0x27, 0x11, 0x05, 0x0A, 0x03, 0x00, 0x80, 0x0C, 0x38];
//! assert!(parser.feed(&frame[..7]).is_empty());
//! let events = parser.feed(&frame[7..]);
//!
//! assert_eq!(events.len(), 3);
//! assert_eq!(events[2].name(), "1/2/3");
//! if let ParsedEvent::Address(event) = &events[2] {
//!     let decoded = event.decoded.as_ref().unwrap();
//!     assert_eq!(decoded.dpt, DatapointType::Dpt9);
//! }
//! ```

use bytes::BytesMut;
use tokio_util::codec::Decoder;

use crate::dpt::{self, Decoded};
use crate::error::Result;
use crate::protocol::codec::GroupSocketCodec;
use crate::protocol::event::{GroupEvent, ParsedEvent};
use crate::protocol::frame::{Frame, FrameKind, Telegram};
use crate::protocol::Action;
use crate::store::{DptLookup, DptStore};

/// Frame splitter and telegram decoder for one group socket connection
#[derive(Debug, Clone, Default)]
pub struct TelegramParser<L = DptStore> {
    codec: GroupSocketCodec,
    /// Bytes of the frame not yet complete
    pending: BytesMut,
    lookup: L,
}

impl TelegramParser<DptStore> {
    /// Create a parser with an empty [`DptStore`].
    ///
    /// Every payload goes through the length heuristic until types are
    /// registered via [`lookup_mut`](Self::lookup_mut).
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: DptLookup> TelegramParser<L> {
    /// Create a parser that resolves datapoint types through `lookup`
    pub fn with_lookup(lookup: L) -> Self {
        Self {
            codec: GroupSocketCodec::new(),
            pending: BytesMut::new(),
            lookup,
        }
    }

    /// Append a chunk of the stream and parse every frame it completes.
    ///
    /// Confirmations and group socket acknowledges are consumed silently.
    /// Telegrams that cannot be parsed are logged and skipped; decode
    /// failures are reported inside the events. Either way the parser stays
    /// aligned with the frame boundaries.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<ParsedEvent> {
        self.pending.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Ok(Some(data)) = self.codec.decode(&mut self.pending) {
            match Frame::parse(&data) {
                Ok(frame) => handle_frame(&self.lookup, &frame, &mut events),
                Err(err) => knx_log!(warn, "skipping frame: {}", err),
            }
        }

        events
    }

    /// Number of buffered bytes of an incomplete frame
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop any partial frame, e.g. after the connection was re-established
    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// The datapoint type lookup
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Mutable access to the lookup, to register types while parsing
    pub fn lookup_mut(&mut self) -> &mut L {
        &mut self.lookup
    }

    /// Consume the parser, returning its lookup
    pub fn into_lookup(self) -> L {
        self.lookup
    }
}

fn handle_frame<L: DptLookup>(lookup: &L, frame: &Frame<'_>, events: &mut Vec<ParsedEvent>) {
    match frame.kind() {
        FrameKind::Confirm | FrameKind::OpenGroupSocket => {}
        FrameKind::Unknown => {
            knx_log!(warn, "skipping {} byte frame", frame.total_len());
        }
        FrameKind::Telegram => {
            if let Err(err) = frame.telegram().and_then(|telegram| handle_telegram(lookup, &telegram, events)) {
                knx_log!(warn, "skipping telegram: {}", err);
            }
        }
    }
}

fn handle_telegram<L: DptLookup>(
    lookup: &L,
    telegram: &Telegram<'_>,
    events: &mut Vec<ParsedEvent>,
) -> Result<()> {
    let action = telegram.action()?;
    let source = telegram.source();
    let destination = telegram.destination();

    if action == Action::Read {
        let event = GroupEvent {
            action,
            source,
            destination,
            decoded: None,
        };
        events.push(ParsedEvent::Action(event.clone()));
        events.push(ParsedEvent::Address(event));
        return Ok(());
    }

    let payload = telegram.payload();
    let decoded = decode_payload(lookup, telegram, payload);
    if let Err(err) = &decoded.value {
        knx_log!(debug, "cannot decode {} for {}: {}", decoded.dpt, destination, err);
    }

    let event = GroupEvent {
        action,
        source,
        destination,
        decoded: Some(decoded),
    };
    events.push(ParsedEvent::Telegram {
        action,
        source,
        destination,
        payload: payload.to_vec(),
    });
    events.push(ParsedEvent::Action(event.clone()));
    events.push(ParsedEvent::Address(event));
    Ok(())
}

fn decode_payload<L: DptLookup>(lookup: &L, telegram: &Telegram<'_>, payload: &[u8]) -> Decoded {
    match lookup.get(telegram.destination()) {
        Some(dpt) => dpt::decode_as(dpt, payload),
        None => dpt::decode(telegram.declared_len(), payload),
    }
}
