//! Wall-clock time-of-day values in strict `HH:MM` form.
//!
//! Schedules and bookings store times as zero-padded 24-hour strings. Those
//! strings only order correctly when every value is padded, so parsing rejects
//! anything that is not exactly `HH:MM` (`"9:00"`, `"24:00"`, `"09:00:00"`).

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision, stored as minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Constant constructor for literals known to be in range.
    pub(crate) const fn hm(hour: u16, minute: u16) -> Self {
        TimeOfDay(hour * 60 + minute)
    }

    /// Build from hour and minute; `None` when either is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(TimeOfDay((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Parse a strict zero-padded `HH:MM` string.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimeFormat` for anything else.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || SlotError::InvalidTimeFormat(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digit = |i: usize| -> Result<u32> {
            let b = bytes[i];
            if b.is_ascii_digit() {
                Ok(u32::from(b - b'0'))
            } else {
                Err(invalid())
            }
        };

        let hour = digit(0)? * 10 + digit(1)?;
        let minute = digit(3)? * 10 + digit(4)?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }

    /// Truncate a `NaiveTime` to minute precision.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        TimeOfDay((time.hour() * 60 + time.minute()) as u16)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::default() + Duration::minutes(i64::from(self.0))
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0) / 60
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0) % 60
    }

    /// `hour * 60 + minute`.
    pub fn minute_of_day(self) -> u32 {
        u32::from(self.0)
    }

    /// Advance by `minutes`. Returns `None` when the result would reach or
    /// pass midnight, since a day's slots never wrap into the next day.
    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        let total = self.minute_of_day().checked_add(minutes)?;
        if total < MINUTES_PER_DAY {
            Some(TimeOfDay(total as u16))
        } else {
            None
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TimeOfDay {
    type Error = SlotError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SlotError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}
