//! DPT 16.xxx - Character String (14 bytes)
//!
//! Fixed 14-byte string, one character per byte (ASCII for 16.000,
//! ISO 8859-1 for 16.001). Shorter texts are padded with NUL bytes, which
//! are kept in the decoded string.

use crate::dpt::{expect_len, DptDecode};
use crate::error::Result;

/// DPT 16.xxx string codec (decode only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt16;

impl Dpt16 {
    /// Payload length in bytes
    pub const LEN: usize = 14;
}

impl DptDecode<String> for Dpt16 {
    fn decode(&self, data: &[u8]) -> Result<String> {
        expect_len(data, Self::LEN)?;
        Ok(data.iter().copied().map(char::from).collect())
    }
}
