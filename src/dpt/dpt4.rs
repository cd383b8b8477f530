//! DPT 4.xxx - Character (1 byte)
//!
//! A single character, either 7-bit ASCII (4.001) or ISO 8859-1 (4.002).
//! Bytes up to 127 decode as ASCII; anything higher goes through a lossy
//! UTF-8 conversion, which yields U+FFFD for a lone high byte.

use crate::dpt::{expect_len, DptDecode};
use crate::error::Result;

/// DPT 4.xxx character codec (decode only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt4;

impl DptDecode<String> for Dpt4 {
    fn decode(&self, data: &[u8]) -> Result<String> {
        expect_len(data, 1)?;

        if data[0] <= 127 {
            Ok(char::from(data[0]).to_string())
        } else {
            Ok(String::from_utf8_lossy(data).into_owned())
        }
    }
}
