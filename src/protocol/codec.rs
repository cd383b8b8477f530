//! Frame splitting codec for the group socket byte stream.
//!
//! Every frame starts with a control byte and a length byte counting the
//! bytes that follow it. [`GroupSocketCodec`] cuts complete frames off the
//! front of a buffer and leaves partial ones in place, so it can sit behind
//! a `tokio_util::codec::FramedRead` or be driven by hand as
//! [`TelegramParser`](crate::protocol::TelegramParser) does.

use bytes::{Bytes, BytesMut};
use tokio_util::codec::Decoder;

use crate::protocol::frame::Frame;

/// Splits a group socket stream into frames
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupSocketCodec;

impl GroupSocketCodec {
    /// Create a codec
    pub const fn new() -> Self {
        Self
    }
}

impl Decoder for GroupSocketCodec {
    type Item = Bytes;
    type Error = std::io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Some(total_len) = Frame::announced_len(src.as_ref()) else {
            return Ok(None);
        };

        if src.len() < total_len {
            src.reserve(total_len - src.len());
            return Ok(None);
        }

        knx_log!(trace, "split {} byte frame", total_len);
        Ok(Some(src.split_to(total_len).freeze()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_for_length_byte() {
        let mut codec = GroupSocketCodec::new();
        let mut buf = BytesMut::from(&[0x00][..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn test_waits_for_announced_length() {
        let mut codec = GroupSocketCodec::new();
        let mut buf = BytesMut::from(&[0x00, 0x08, 0x00, 0x27, 0x11][..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn test_splits_consecutive_frames() {
        let mut codec = GroupSocketCodec::new();
        // confirm, open group socket acknowledge, then the start of a telegram
        let mut buf = BytesMut::from(&[0x00, 0x02, 0x00, 0x27, 0x00, 0x03, 0x00, 0x26, 0x00, 0x00, 0x08][..]);

        let first = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&first[..], &[0x00, 0x02, 0x00, 0x27]);

        let second = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&second[..], &[0x00, 0x03, 0x00, 0x26, 0x00]);

        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        assert_eq!(&buf[..], &[0x00, 0x08]);
    }

    #[test]
    fn test_short_frames_are_split_too() {
        let mut codec = GroupSocketCodec::new();
        let mut buf = BytesMut::from(&[0x00, 0x00, 0x00, 0x01, 0xAA][..]);

        assert_eq!(codec.decode(&mut buf).unwrap().unwrap().len(), 2);
        assert_eq!(codec.decode(&mut buf).unwrap().unwrap().len(), 3);
        assert!(buf.is_empty());
    }
}
