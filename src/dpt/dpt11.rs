//! DPT 11.001 - Date (3 bytes)
//!
//! ## Format
//!
//! ```text
//! Byte 0: 000D DDDD   day (1-31)
//! Byte 1: 0000 MMMM   month (1-12)
//! Byte 2: 0YYY YYYY   year (0-99)
//! ```
//!
//! Two-digit years below 90 belong to the 2000s, the rest to the 1900s, so
//! only 1990-2089 can be represented.

use chrono::{Datelike, NaiveDate};

use crate::dpt::{expect_len, payload, DptDecode, DptEncode, Payload};
use crate::error::{KnxError, Result};

/// DPT 11.001 date codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt11;

impl Dpt11 {
    const FIRST_YEAR: i32 = 1990;
    const LAST_YEAR: i32 = 2089;
}

impl DptEncode<NaiveDate> for Dpt11 {
    fn encode(&self, value: NaiveDate) -> Result<Payload> {
        let year = value.year();
        if !(Self::FIRST_YEAR..=Self::LAST_YEAR).contains(&year) {
            return Err(KnxError::dpt_value_out_of_range());
        }

        payload(&[value.day() as u8, value.month() as u8, (year % 100) as u8])
    }
}

impl DptDecode<NaiveDate> for Dpt11 {
    fn decode(&self, data: &[u8]) -> Result<NaiveDate> {
        expect_len(data, 3)?;

        let day = u32::from(data[0] & 0x1F);
        let month = u32::from(data[1] & 0x0F);
        let year = i32::from(data[2] & 0x7F);
        let year = if year < 90 { 2000 + year } else { 1900 + year };

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(KnxError::dpt_value_out_of_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_century_fold() {
        assert_eq!(
            Dpt11.decode(&[0x0F, 0x06, 0x18]).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert_eq!(
            Dpt11.decode(&[0x01, 0x01, 0x5A]).unwrap(),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
        );
        assert_eq!(
            Dpt11.decode(&[0x1F, 0x0C, 0x59]).unwrap(),
            NaiveDate::from_ymd_opt(2089, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_decode_impossible_date() {
        // 30 February
        let err = Dpt11.decode(&[0x1E, 0x02, 0x18]).unwrap_err();
        assert!(err.as_dpt().unwrap().is_out_of_range());
        // month 0
        assert!(Dpt11.decode(&[0x01, 0x00, 0x18]).is_err());
    }

    #[test]
    fn test_encode() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(&Dpt11.encode(date).unwrap()[..], &[31, 12, 99]);
    }

    #[test]
    fn test_encode_year_outside_window() {
        for year in [1989, 2090] {
            let date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
            assert!(Dpt11.encode(date).unwrap_err().as_dpt().unwrap().is_out_of_range());
        }
    }

    #[test]
    fn test_decode_wrong_length() {
        assert!(Dpt11.decode(&[0x01, 0x01]).is_err());
    }
}
