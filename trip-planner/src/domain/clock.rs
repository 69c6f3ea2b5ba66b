//! Simulated traveller clock.

use chrono::NaiveDate;

use super::ClockTime;

/// Where a traveller is in time while a route is being explored.
///
/// A fresh clock starts at midnight with no date. The date is only set
/// once a dated (flight) leg has been taken, after which it tracks the
/// date of the last dated arrival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimulatedClock {
    /// Time of day of the last arrival.
    pub time: ClockTime,
    /// Date of the last dated arrival, if any.
    pub date: Option<NaiveDate>,
}

impl SimulatedClock {
    /// A clock at midnight with no date, used at the start of every leg search.
    pub fn start_of_day() -> Self {
        Self::default()
    }

    /// Create a clock at a given time and date.
    pub fn new(time: ClockTime, date: Option<NaiveDate>) -> Self {
        Self { time, date }
    }
}
