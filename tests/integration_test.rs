//! Integration tests for knx-groupsocket
//!
//! These tests replay recorded group socket streams through the public API:
//! chunking independence of the frame splitter, type lookup against the
//! length heuristic, and the round trip from outgoing message bytes back to
//! parsed events.

use std::collections::HashMap;

// Only import types from the library crate
use knx_groupsocket::dpt::{DatapointType, DptValue, TimeOfDay};
use knx_groupsocket::protocol::{create_message, Action, EventKey, EventRouter, ParsedEvent, TelegramParser};
use knx_groupsocket::{ga, ia, DptStore, GroupAddress, IndividualAddress};

/// Wrap a message from `create_message` into an incoming telegram frame.
fn incoming(source: IndividualAddress, destination: GroupAddress, message: &[u8]) -> Vec<u8> {
    let mut frame = vec![0x00, 0x00, 0x00, 0x27];
    frame.extend_from_slice(&u16::from(source).to_be_bytes());
    frame.extend_from_slice(&u16::from(destination).to_be_bytes());
    frame.extend_from_slice(message);
    frame[1] = (frame.len() - 2) as u8;
    frame
}

/// A session as knxd delivers it: socket acknowledge, a burst of telegrams
/// and a confirm for a telegram we sent.
fn recorded_session() -> Vec<u8> {
    let mut stream = vec![0x00, 0x03, 0x00, 0x26, 0x00];

    let write_bool = create_message(Action::Write, DatapointType::Dpt1, &DptValue::Bool(true)).unwrap();
    stream.extend(incoming(ia!(1, 1, 5), ga!(0 / 0 / 1), &write_bool));

    let read = create_message(Action::Read, DatapointType::Dpt9, &DptValue::Float(0.0)).unwrap();
    stream.extend(incoming(ia!(1, 1, 7), ga!(1 / 2 / 3), &read));

    let temp = create_message(Action::Response, DatapointType::Dpt9, &DptValue::Float(21.6)).unwrap();
    stream.extend(incoming(ia!(1, 1, 20), ga!(1 / 2 / 3), &temp));

    stream.extend([0x00, 0x02, 0x00, 0x27]);

    let percent = create_message(Action::Write, DatapointType::Dpt5, &DptValue::U8(128)).unwrap();
    stream.extend(incoming(ia!(1, 1, 5), ga!(2 / 1 / 10), &percent));

    let counter = 1_000_000.0f32.to_be_bytes();
    let mut energy = vec![0x00, 0x80];
    energy.extend_from_slice(&counter);
    stream.extend(incoming(ia!(1, 2, 1), ga!(3 / 0 / 0), &energy));

    stream
}

#[test]
fn test_events_independent_of_chunking() {
    let stream = recorded_session();

    let mut whole = TelegramParser::new();
    let expected = whole.feed(&stream);
    assert_eq!(expected.len(), 2 + 3 * 4);

    for chunk_size in [1, 2, 3, 7, 11, 64] {
        let mut parser = TelegramParser::new();
        let events: Vec<ParsedEvent> = stream.chunks(chunk_size).flat_map(|chunk| parser.feed(chunk)).collect();
        assert_eq!(events, expected, "chunk size {chunk_size}");
        assert_eq!(parser.pending_len(), 0);
    }
}

#[test]
fn test_heuristic_types_of_recorded_session() {
    let mut parser = TelegramParser::new();
    let events = parser.feed(&recorded_session());

    let decoded: Vec<_> = events
        .iter()
        .filter(|event| matches!(event.key(), EventKey::Address(_)))
        .map(|event| {
            let group = event.group_event().unwrap();
            (group.destination.to_string(), group.decoded.as_ref().map(|d| (d.dpt, d.value.clone())))
        })
        .collect();

    assert_eq!(decoded.len(), 5);
    assert_eq!(
        decoded[0],
        ("0/0/1".to_string(), Some((DatapointType::Dpt1, Ok(DptValue::Bool(true)))))
    );
    assert_eq!(decoded[1], ("1/2/3".to_string(), None));
    assert_eq!(decoded[2].1.as_ref().unwrap().0, DatapointType::Dpt9);
    assert_eq!(
        decoded[3],
        ("2/1/10".to_string(), Some((DatapointType::Dpt5, Ok(DptValue::U8(128)))))
    );
    assert_eq!(
        decoded[4],
        ("3/0/0".to_string(), Some((DatapointType::Dpt14, Ok(DptValue::Float(1_000_000.0)))))
    );
}

#[test]
fn test_store_overrides_heuristic() {
    let mut store = DptStore::new();
    // 0x8000 is -20.48 as DPT 9 but -32768 as DPT 8
    store.set(ga!(4 / 0 / 1), DatapointType::Dpt8);

    let mut parser = TelegramParser::with_lookup(store);
    let events = parser.feed(&incoming(ia!(1, 1, 1), ga!(4 / 0 / 1), &[0x00, 0x80, 0x80, 0x00]));

    let group = events[1].group_event().unwrap();
    let decoded = group.decoded.as_ref().unwrap();
    assert_eq!(decoded.dpt, DatapointType::Dpt8);
    assert_eq!(decoded.value, Ok(DptValue::I16(-32768)));

    // without the entry the length picks DPT 9
    parser.lookup_mut().remove(ga!(4 / 0 / 1));
    let events = parser.feed(&incoming(ia!(1, 1, 1), ga!(4 / 0 / 1), &[0x00, 0x80, 0x80, 0x00]));
    let decoded = events[1].group_event().unwrap().decoded.as_ref().unwrap();
    assert_eq!(decoded.dpt, DatapointType::Dpt9);
}

#[test]
fn test_outgoing_messages_parse_back() {
    let time = TimeOfDay::new(2, 7, 45, 30).unwrap();
    let cases = [
        (DatapointType::Dpt1, DptValue::Bool(false)),
        (DatapointType::Dpt3, DptValue::Bits(0x09)),
        (DatapointType::Dpt7, DptValue::U16(1234)),
        (DatapointType::Dpt10, DptValue::Time(time)),
        (DatapointType::Dpt14, DptValue::Float(-0.5)),
    ];

    let mut lookup = HashMap::new();
    for (i, (dpt, _)) in cases.iter().enumerate() {
        lookup.insert(GroupAddress::from(i as u16), *dpt);
    }
    let mut parser = TelegramParser::with_lookup(lookup);

    for (i, (dpt, value)) in cases.into_iter().enumerate() {
        let message = create_message(Action::Write, dpt, &value).unwrap();
        let events = parser.feed(&incoming(ia!(1, 1, 1), GroupAddress::from(i as u16), &message));

        assert_eq!(events.len(), 3, "{dpt}");
        let decoded = events[2].group_event().unwrap().decoded.clone().unwrap();
        assert_eq!(decoded.dpt, dpt);
        assert_eq!(decoded.value, Ok(value), "{dpt}");
    }
}

#[test]
fn test_router_over_session() {
    let events = TelegramParser::new().feed(&recorded_session());

    let mut telegrams = 0;
    let mut reads = Vec::new();
    let mut on_1_2_3 = Vec::new();
    {
        let mut router = EventRouter::new();
        router
            .on(EventKey::Telegram, |_| telegrams += 1)
            .on(EventKey::Action(Action::Read), |event| reads.push(event.destination()))
            .on(EventKey::Address(ga!(1 / 2 / 3)), |event| on_1_2_3.push(event.action()));
        router.dispatch(&events);
    }

    // reads produce no raw telegram event
    assert_eq!(telegrams, 4);
    assert_eq!(reads, [ga!(1 / 2 / 3)]);
    assert_eq!(on_1_2_3, [Action::Read, Action::Response]);
}

#[cfg(feature = "serde")]
#[test]
fn test_store_loaded_from_json() {
    let mut store = DptStore::new();
    store.fill(r#"{"1/2/3": "DPT9.001", "2/1/10": "DPT6"}"#).unwrap();

    let mut parser = TelegramParser::with_lookup(store);
    let events = parser.feed(&recorded_session());

    let on_2_1_10 = events
        .iter()
        .find(|event| event.key() == EventKey::Address(ga!(2 / 1 / 10)))
        .and_then(|event| event.group_event())
        .and_then(|group| group.decoded.clone())
        .unwrap();
    assert_eq!(on_2_1_10.value, Ok(DptValue::I8(-128)));
}
