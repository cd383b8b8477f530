#![doc = include_str!("../README.md")]

//! # knx-groupsocket
//!
//! KNX/EIB group socket stream parser and datapoint type codec.
//!
//! This crate turns the byte stream of a knxd/eibd group socket into typed
//! group events and converts datapoint type (DPT) payloads to and from
//! native values. It does no I/O: bring your own socket, serial port or
//! tunnel and feed its bytes into a [`TelegramParser`].
//!
//! ## Features
//!
//! - Frame splitting independent of read chunk sizes
//! - Read / write / response telegrams with source and destination
//! - DPT 1-14, 16 and 232 decoding, encoding for the common types
//! - Address to type lookup with JSON load/save (`serde` feature)
//! - Outgoing message builder
//!
//! ## Example
//!
//! ```rust
//! use knx_groupsocket::{ga, DatapointType, DptStore, TelegramParser};
//!
//! let mut store = DptStore::new();
//! store.set(ga!(0/0/7), DatapointType::Dpt5);
//!
//! let mut parser = TelegramParser::with_lookup(store);
//! for event in parser.feed(&[0x00, 0x09, 0x00, 0x27, 0x11, 0x05, 0x00, 0x07, 0x00, 0x80, 0x2A]) {
//!     println!("{}: {:?}", event.name(), event);
//! }
//! ```

// Macro modules (must be declared before use)
#[macro_use]
pub mod logging;
#[macro_use]
pub mod macros;

pub mod addressing;
pub mod dpt;
pub mod error;
pub mod protocol;
pub mod store;

// Re-export commonly used types
#[doc(inline)]
pub use addressing::{GroupAddress, IndividualAddress};
#[doc(inline)]
pub use dpt::{DatapointType, Decoded, DptDecode, DptEncode, DptValue};
#[doc(inline)]
pub use error::{KnxError, Result};
#[doc(inline)]
pub use protocol::{Action, ParsedEvent, TelegramParser};
#[doc(inline)]
pub use store::{DptLookup, DptStore};
