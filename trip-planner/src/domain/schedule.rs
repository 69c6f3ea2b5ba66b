//! Flexible service schedules.
//!
//! A flexible offer runs repeatedly within a daily window, e.g. a shuttle
//! every 15 minutes between 05:00 and 11:00.

use std::fmt;

use super::{ClockTime, EdgeError};

/// A periodic service window: runs at `start`, `start + frequency`, ...
/// up to and including `end`.
///
/// # Invariants
///
/// - `start <= end`
/// - `frequency > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Schedule {
    start: ClockTime,
    end: ClockTime,
    frequency_mins: u32,
}

impl Schedule {
    /// Construct a schedule, validating the window and frequency.
    pub fn new(start: ClockTime, end: ClockTime, frequency_mins: u32) -> Result<Self, EdgeError> {
        if frequency_mins == 0 {
            return Err(EdgeError::MalformedSchedule("frequency must be positive"));
        }
        if start > end {
            return Err(EdgeError::MalformedSchedule(
                "window start must not be after its end",
            ));
        }
        Ok(Self {
            start,
            end,
            frequency_mins,
        })
    }

    /// Parse a schedule written as `HH:MM-HH:MM/Nm`.
    ///
    /// ```
    /// use trip_planner::domain::Schedule;
    ///
    /// let shuttle = Schedule::parse("05:00-11:00/15m").unwrap();
    /// assert_eq!(shuttle.frequency_mins(), 15);
    ///
    /// assert!(Schedule::parse("05:00-11:00").is_err());
    /// assert!(Schedule::parse("11:00-05:00/15m").is_err());
    /// assert!(Schedule::parse("05:00-11:00/0m").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, EdgeError> {
        let (window, frequency) = s
            .split_once('/')
            .ok_or(EdgeError::MalformedSchedule("expected HH:MM-HH:MM/Nm"))?;
        let (start, end) = window
            .split_once('-')
            .ok_or(EdgeError::MalformedSchedule("expected HH:MM-HH:MM window"))?;
        let frequency_mins = frequency
            .strip_suffix('m')
            .and_then(|n| n.parse::<u32>().ok())
            .ok_or(EdgeError::MalformedSchedule(
                "frequency must be a whole number of minutes, e.g. 15m",
            ))?;

        Self::new(
            ClockTime::parse_hhmm(start)?,
            ClockTime::parse_hhmm(end)?,
            frequency_mins,
        )
    }

    /// First run of the day.
    pub fn start(&self) -> ClockTime {
        self.start
    }

    /// Latest time a run may leave.
    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Minutes between runs.
    pub fn frequency_mins(&self) -> u32 {
        self.frequency_mins
    }

    /// The run a traveller arriving at `arrival` can catch.
    ///
    /// Arriving before the window opens means taking the first run.
    /// Otherwise the traveller waits for the next run strictly after
    /// `arrival`, even when arriving exactly on a run boundary. Returns
    /// `None` once the service is exhausted for the day.
    ///
    /// ```
    /// use trip_planner::domain::{ClockTime, Schedule};
    ///
    /// let shuttle = Schedule::parse("05:00-11:00/15m").unwrap();
    /// let at = |m| ClockTime::from_minutes(m);
    ///
    /// assert_eq!(shuttle.next_departure(at(200)), Some(at(300)));
    /// assert_eq!(shuttle.next_departure(at(320)), Some(at(330)));
    /// assert_eq!(shuttle.next_departure(at(330)), Some(at(345)));
    /// assert_eq!(shuttle.next_departure(at(660)), None);
    /// ```
    pub fn next_departure(&self, arrival: ClockTime) -> Option<ClockTime> {
        if arrival < self.start {
            return Some(self.start);
        }
        if arrival >= self.end {
            return None;
        }

        let since_start = arrival.minutes() - self.start.minutes();
        let periods_passed = since_start / self.frequency_mins + 1;
        let candidate = self.start.plus_minutes(periods_passed * self.frequency_mins);

        (candidate <= self.end).then_some(candidate)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}/{}m", self.start, self.end, self.frequency_mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(minutes: u32) -> ClockTime {
        ClockTime::from_minutes(minutes)
    }

    fn shuttle() -> Schedule {
        // 05:00-11:00 every 15 minutes
        Schedule::new(at(300), at(660), 15).unwrap()
    }

    #[test]
    fn before_window_takes_first_run() {
        assert_eq!(shuttle().next_departure(at(0)), Some(at(300)));
        assert_eq!(shuttle().next_departure(at(299)), Some(at(300)));
    }

    #[test]
    fn waits_for_next_boundary() {
        assert_eq!(shuttle().next_departure(at(320)), Some(at(330)));
    }

    #[test]
    fn on_boundary_waits_for_following_run() {
        assert_eq!(shuttle().next_departure(at(300)), Some(at(315)));
        assert_eq!(shuttle().next_departure(at(330)), Some(at(345)));
    }

    #[test]
    fn last_run_may_leave_at_window_end() {
        assert_eq!(shuttle().next_departure(at(650)), Some(at(660)));
    }

    #[test]
    fn exhausted_at_or_after_window_end() {
        assert_eq!(shuttle().next_departure(at(660)), None);
        assert_eq!(shuttle().next_departure(at(900)), None);
    }

    #[test]
    fn candidate_beyond_unaligned_end_is_rejected() {
        // Runs at 05:00, 05:40; the next would be 06:20, past 06:00.
        let schedule = Schedule::new(at(300), at(360), 40).unwrap();
        assert_eq!(schedule.next_departure(at(330)), Some(at(340)));
        assert_eq!(schedule.next_departure(at(345)), None);
    }

    #[test]
    fn zero_width_window() {
        let schedule = Schedule::new(at(600), at(600), 10).unwrap();
        assert_eq!(schedule.next_departure(at(599)), Some(at(600)));
        assert_eq!(schedule.next_departure(at(600)), None);
    }

    #[test]
    fn rejects_zero_frequency() {
        assert_eq!(
            Schedule::new(at(300), at(660), 0),
            Err(EdgeError::MalformedSchedule("frequency must be positive"))
        );
    }

    #[test]
    fn rejects_inverted_window() {
        assert!(matches!(
            Schedule::new(at(660), at(300), 15),
            Err(EdgeError::MalformedSchedule(_))
        ));
    }

    #[test]
    fn parse_and_display() {
        let schedule = Schedule::parse("05:00-11:00/15m").unwrap();
        assert_eq!(schedule, shuttle());
        assert_eq!(schedule.to_string(), "05:00-11:00/15m");
    }

    #[test]
    fn parse_rejects_bad_times() {
        assert!(matches!(
            Schedule::parse("5:00-11:00/15m"),
            Err(EdgeError::Time(_))
        ));
        assert!(matches!(
            Schedule::parse("05:00-11:00/15"),
            Err(EdgeError::MalformedSchedule(_))
        ));
    }
}
