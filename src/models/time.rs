use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::*;

use super::error::InputError;

/// Wall-clock time of day (hour and minute, no date component).
/// Hour arithmetic wraps modulo 24 hours; the day carry is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Create a new time of day. Returns `None` when the hour or minute is
    /// out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse an "HH:mm" string with HH in 00-23 and mm in 00-59.
    pub fn parse(s: &str) -> Result<Self, InputError> {
        if s.is_empty() {
            return Err(InputError::MissingTime);
        }
        NaiveTime::parse_from_str(s, "%H:%M")
            .map(Self)
            .map_err(|_| InputError::MalformedTime(s.to_string()))
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute of hour, 0-59.
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Add a number of hours, wrapping past midnight. Only the resulting
    /// time of day is kept; how many days were rolled over is not reported.
    /// Reduced modulo 24 up front, so any `i64` offset is accepted.
    pub fn add_hours(&self, hours: i64) -> Self {
        let (time, _days) = self
            .0
            .overflowing_add_signed(TimeDelta::hours(hours.rem_euclid(24)));
        Self(time)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
