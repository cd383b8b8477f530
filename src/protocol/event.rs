//! Events produced by the telegram parser and a small router for them.
//!
//! Every write or response telegram produces three events, in this order:
//!
//! 1. [`ParsedEvent::Telegram`] with the raw payload, no type guessing
//! 2. [`ParsedEvent::Action`] keyed by the service (`"write"`, `"response"`)
//! 3. [`ParsedEvent::Address`] keyed by the destination (`"1/2/3"`)
//!
//! A read telegram produces only the last two, without a decoded value.

use core::fmt;

use crate::addressing::{GroupAddress, IndividualAddress};
use crate::dpt::Decoded;
use crate::protocol::Action;

/// Subscription key of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKey {
    /// Raw telegram events
    Telegram,
    /// Events of one service
    Action(Action),
    /// Events for one destination group
    Address(GroupAddress),
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKey::Telegram => f.write_str("telegram"),
            EventKey::Action(action) => write!(f, "{action}"),
            EventKey::Address(address) => write!(f, "{address}"),
        }
    }
}

/// Addresses, service and decoded value of one telegram
#[derive(Debug, Clone, PartialEq)]
pub struct GroupEvent {
    /// Group value service
    pub action: Action,
    /// Sending device
    pub source: IndividualAddress,
    /// Destination group
    pub destination: GroupAddress,
    /// Decode outcome; `None` for reads
    pub decoded: Option<Decoded>,
}

/// Event emitted by [`TelegramParser::feed`](crate::protocol::TelegramParser::feed)
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedEvent {
    /// Raw telegram, emitted before any decoded event
    Telegram {
        /// Group value service
        action: Action,
        /// Sending device
        source: IndividualAddress,
        /// Destination group
        destination: GroupAddress,
        /// Payload bytes as found on the wire
        payload: Vec<u8>,
    },
    /// Decoded telegram keyed by its service
    Action(GroupEvent),
    /// Decoded telegram keyed by its destination
    Address(GroupEvent),
}

impl ParsedEvent {
    /// Subscription key
    pub fn key(&self) -> EventKey {
        match self {
            ParsedEvent::Telegram { .. } => EventKey::Telegram,
            ParsedEvent::Action(event) => EventKey::Action(event.action),
            ParsedEvent::Address(event) => EventKey::Address(event.destination),
        }
    }

    /// Event name: `"telegram"`, the service name or the destination address
    pub fn name(&self) -> String {
        self.key().to_string()
    }

    /// Service of the underlying telegram
    pub fn action(&self) -> Action {
        match self {
            ParsedEvent::Telegram { action, .. } => *action,
            ParsedEvent::Action(event) | ParsedEvent::Address(event) => event.action,
        }
    }

    /// Destination of the underlying telegram
    pub fn destination(&self) -> GroupAddress {
        match self {
            ParsedEvent::Telegram { destination, .. } => *destination,
            ParsedEvent::Action(event) | ParsedEvent::Address(event) => event.destination,
        }
    }

    /// Decoded part, absent for raw telegram events
    pub fn group_event(&self) -> Option<&GroupEvent> {
        match self {
            ParsedEvent::Telegram { .. } => None,
            ParsedEvent::Action(event) | ParsedEvent::Address(event) => Some(event),
        }
    }
}

type Handler<'h> = Box<dyn FnMut(&ParsedEvent) + 'h>;

/// Routes parsed events to handlers registered per [`EventKey`].
///
/// Handlers for the same key run in registration order.
///
/// ```rust
/// use knx_groupsocket::protocol::{Action, EventKey, EventRouter, TelegramParser};
///
/// let mut writes = 0;
/// let mut parser = TelegramParser::new();
/// let events = parser.feed(&[0x00, 0x08, 0x00, 0x27, 0x11, 0x05, 0x0A, 0x03, 0x00, 0x81]);
///
/// let mut router = EventRouter::new();
/// router.on(EventKey::Action(Action::Write), |_event| writes += 1);
/// assert_eq!(router.dispatch(&events), 1);
/// drop(router);
///
/// assert_eq!(writes, 1);
/// ```
#[derive(Default)]
pub struct EventRouter<'h> {
    handlers: Vec<(EventKey, Handler<'h>)>,
}

impl<'h> EventRouter<'h> {
    /// Create a router without handlers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one key.
    pub fn on<F>(&mut self, key: EventKey, handler: F) -> &mut Self
    where
        F: FnMut(&ParsedEvent) + 'h,
    {
        self.handlers.push((key, Box::new(handler)));
        self
    }

    /// Remove every handler registered for `key`, returning how many there were.
    pub fn off(&mut self, key: EventKey) -> usize {
        let before = self.handlers.len();
        self.handlers.retain(|(registered, _)| *registered != key);
        before - self.handlers.len()
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Pass every event to the handlers of its key.
    ///
    /// Returns the number of handler invocations.
    pub fn dispatch(&mut self, events: &[ParsedEvent]) -> usize {
        let mut calls = 0;
        for event in events {
            let key = event.key();
            for (_, handler) in self.handlers.iter_mut().filter(|(registered, _)| *registered == key) {
                handler(event);
                calls += 1;
            }
        }
        calls
    }
}

impl fmt::Debug for EventRouter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRouter")
            .field("keys", &self.handlers.iter().map(|(key, _)| key).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dpt::{DatapointType, DptValue};

    fn write_event(destination: u16, value: DptValue) -> GroupEvent {
        GroupEvent {
            action: Action::Write,
            source: IndividualAddress::from(0x1105),
            destination: GroupAddress::from(destination),
            decoded: Some(Decoded {
                dpt: DatapointType::Dpt5,
                value: Ok(value),
            }),
        }
    }

    #[test]
    fn test_keys_and_names() {
        let event = write_event(0x0A03, DptValue::U8(1));
        let telegram = ParsedEvent::Telegram {
            action: Action::Response,
            source: event.source,
            destination: event.destination,
            payload: vec![0x01],
        };

        assert_eq!(telegram.key(), EventKey::Telegram);
        assert_eq!(telegram.name(), "telegram");
        assert_eq!(ParsedEvent::Action(event.clone()).name(), "write");
        assert_eq!(ParsedEvent::Address(event.clone()).name(), "1/2/3");
        assert_eq!(
            ParsedEvent::Address(event).key(),
            EventKey::Address(GroupAddress::from(0x0A03))
        );
        assert_eq!(telegram.action(), Action::Response);
        assert!(telegram.group_event().is_none());
    }

    #[test]
    fn test_router_dispatch_by_key() {
        let events = [
            ParsedEvent::Action(write_event(0x0A03, DptValue::U8(1))),
            ParsedEvent::Address(write_event(0x0A03, DptValue::U8(1))),
            ParsedEvent::Address(write_event(0x0A04, DptValue::U8(2))),
        ];

        let mut seen = Vec::new();
        let mut writes = 0;
        {
            let mut router = EventRouter::new();
            router
                .on(EventKey::Address(GroupAddress::from(0x0A04)), |event| {
                    seen.push(event.group_event().and_then(|e| e.decoded.clone()));
                })
                .on(EventKey::Action(Action::Write), |_| writes += 1);

            assert_eq!(router.len(), 2);
            assert_eq!(router.dispatch(&events), 2);
        }

        assert_eq!(writes, 1);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].as_ref().unwrap().value, Ok(DptValue::U8(2)));
    }

    #[test]
    fn test_router_off() {
        let mut router = EventRouter::new();
        router.on(EventKey::Telegram, |_| {}).on(EventKey::Telegram, |_| {});
        assert_eq!(router.off(EventKey::Telegram), 2);
        assert!(router.is_empty());
        assert_eq!(router.dispatch(&[]), 0);
    }
}
