//! DPT 10.001 - Time of Day (3 bytes)
//!
//! ## Format
//!
//! ```text
//! Byte 0: DDDH HHHH   D = weekday (0 = no day, 1 = Monday ... 7 = Sunday)
//!                     H = hour (0-23)
//! Byte 1: 00MM MMMM   M = minutes (0-59)
//! Byte 2: 00SS SSSS   S = seconds (0-59)
//! ```
//!
//! The wire value carries no date. [`TimeOfDay::resolve_against`] places it
//! on the calendar relative to a reference day.
//!
//! ## Example
//!
//! ```rust
//! use knx_groupsocket::dpt::{Dpt10, DptEncode, DptDecode, TimeOfDay};
//!
//! let time = TimeOfDay::new(3, 14, 30, 0)?;
//! let bytes = Dpt10.encode(time)?;
//! assert_eq!(&bytes[..], &[0x6E, 0x1E, 0x00]);
//! assert_eq!(Dpt10.decode(&bytes)?, time);
//! # Ok::<(), knx_groupsocket::KnxError>(())
//! ```

use core::fmt;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::dpt::{expect_len, payload, DptDecode, DptEncode, Payload};
use crate::error::{KnxError, Result};

/// DPT 10.001 time of day codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dpt10;

/// Decoded DPT 10 value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    /// 0 = no day, 1 = Monday ... 7 = Sunday
    pub weekday: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

impl TimeOfDay {
    /// Create a validated time of day.
    pub const fn new(weekday: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        if weekday > 7 || hour > 23 || minute > 59 || second > 59 {
            return Err(KnxError::dpt_value_out_of_range());
        }
        Ok(Self {
            weekday,
            hour,
            minute,
            second,
        })
    }

    /// Weekday, or `None` when the telegram carries no day.
    pub fn weekday(&self) -> Option<Weekday> {
        match self.weekday {
            1..=7 => Weekday::try_from(self.weekday - 1).ok(),
            _ => None,
        }
    }

    /// Wall-clock part as a [`NaiveTime`].
    pub fn time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
    }

    /// Place the time on the date with the matching weekday nearest to
    /// `reference`, at most three days before or after it.
    ///
    /// Without a weekday the reference date is kept. Returns `None` if the
    /// fields do not form a valid clock time.
    pub fn resolve_against(&self, reference: NaiveDate) -> Option<NaiveDateTime> {
        let time = self.time()?;

        let date = match self.weekday() {
            None => reference,
            Some(target) => {
                let current = i64::from(reference.weekday().number_from_monday());
                let mut diff = i64::from(target.number_from_monday()) - current;
                if diff > 3 {
                    diff -= 7;
                } else if diff < -3 {
                    diff += 7;
                }

                if diff >= 0 {
                    reference.checked_add_days(Days::new(diff.unsigned_abs()))?
                } else {
                    reference.checked_sub_days(Days::new(diff.unsigned_abs()))?
                }
            }
        };

        Some(date.and_time(time))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(day) = self.weekday() {
            write!(f, "{day} ")?;
        }
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl DptEncode<TimeOfDay> for Dpt10 {
    fn encode(&self, value: TimeOfDay) -> Result<Payload> {
        let TimeOfDay {
            weekday,
            hour,
            minute,
            second,
        } = TimeOfDay::new(value.weekday, value.hour, value.minute, value.second)?;

        payload(&[(weekday << 5) | hour, minute, second])
    }
}

impl DptDecode<TimeOfDay> for Dpt10 {
    fn decode(&self, data: &[u8]) -> Result<TimeOfDay> {
        expect_len(data, 3)?;

        Ok(TimeOfDay {
            weekday: (data[0] & 0xE0) >> 5,
            hour: data[0] & 0x1F,
            minute: data[1] & 0x3F,
            second: data[2] & 0x3F,
        })
    }
}
