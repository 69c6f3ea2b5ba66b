//! Time handling for transport offers.
//!
//! Offers carry their times in one of two shapes: a bare time of day
//! ("HH:MM", local transport) or a calendar date plus time of day
//! ("YYYY-MM-DD HH:MM", flights). Both are compared on a single
//! minutes-since-midnight scale; dated values also keep their date.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

const MINUTES_PER_HOUR: u32 = 60;

/// A time of day, in minutes since midnight.
///
/// Parsed values always lie within a single day. A clock advanced by a
/// flexible leg may run past midnight (e.g. `24:10`); such values are
/// never wrapped back to the start of the day.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::ClockTime;
///
/// let t = ClockTime::parse_hhmm("05:30").unwrap();
/// assert_eq!(t.minutes(), 330);
/// assert_eq!(t.to_string(), "05:30");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    /// The start of the day.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Create a time from a raw minutes-since-midnight value.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Create a time from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(hour * MINUTES_PER_HOUR + minute))
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// ```
    /// use trip_planner::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("0530").is_err());
    /// assert!(ClockTime::parse_hhmm("5:30").is_err());
    /// assert!(ClockTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();
        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute).ok_or_else(|| {
            TimeError::new(if hour > 23 {
                "hour must be 0-23"
            } else {
                "minute must be 0-59"
            })
        })
    }

    /// Returns the number of minutes since midnight.
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Returns this time moved `minutes` later.
    pub const fn plus_minutes(self, minutes: u32) -> Self {
        Self(self.0.saturating_add(minutes))
    }

    /// Minutes to wait from `self` until `later`; zero if `later` has passed.
    pub const fn minutes_until(self, later: ClockTime) -> u32 {
        later.0.saturating_sub(self.0)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({self})")
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}",
            self.0 / MINUTES_PER_HOUR,
            self.0 % MINUTES_PER_HOUR
        )
    }
}

/// Parse a dated instant in "YYYY-MM-DD HH:MM" format.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .map_err(|_| TimeError::new("expected YYYY-MM-DD HH:MM format"))
}

/// Time-of-day component of a dated instant.
pub fn time_value(instant: &NaiveDateTime) -> ClockTime {
    ClockTime(instant.hour() * MINUTES_PER_HOUR + instant.minute())
}

/// A scheduled time as written on an offer: dated or time-of-day only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePoint {
    /// A calendar date and time (flights).
    Dated(NaiveDateTime),
    /// A time of day with no date (local transport).
    Clock(ClockTime),
}

impl TimePoint {
    /// Parse either "YYYY-MM-DD HH:MM" or "HH:MM".
    ///
    /// ```
    /// use trip_planner::domain::TimePoint;
    ///
    /// let flight = TimePoint::parse("2024-05-01 08:15").unwrap();
    /// assert!(flight.date().is_some());
    ///
    /// let bus = TimePoint::parse("08:15").unwrap();
    /// assert_eq!(bus.date(), None);
    /// assert_eq!(flight.time_value(), bus.time_value());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        match parse_datetime(s) {
            Ok(dt) => Ok(TimePoint::Dated(dt)),
            Err(_) => ClockTime::parse_hhmm(s).map(TimePoint::Clock),
        }
    }

    /// Normalise to minutes since midnight.
    pub fn time_value(&self) -> ClockTime {
        match self {
            TimePoint::Dated(dt) => time_value(dt),
            TimePoint::Clock(t) => *t,
        }
    }

    /// Calendar date, if this is a dated instant.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            TimePoint::Dated(dt) => Some(dt.date()),
            TimePoint::Clock(_) => None,
        }
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePoint::Dated(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
            TimePoint::Clock(t) => write!(f, "{t}"),
        }
    }
}

impl Serialize for TimePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
