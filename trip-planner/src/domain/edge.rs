//! Graph edges: individual transport offers.
//!
//! Every offer is one of three timing variants, decided once when the
//! edge is built:
//!
//! - dated fixed legs (flights), bound to a calendar date
//! - undated fixed legs (local transport), bound only to a time of day
//! - flexible legs that run periodically within a daily window

use chrono::{Duration, NaiveDateTime};

use super::{ClockTime, EdgeError, Schedule, SimulatedClock, TimePoint, time_value};

/// Whether an edge runs to a timetable or repeatedly within a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Fixed,
    Flexible,
}

/// When an edge can be used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Timing {
    /// Fixed leg with calendar dates (flights).
    Dated {
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    },
    /// Fixed leg with times of day only (local transport).
    Undated {
        departure: ClockTime,
        arrival: ClockTime,
    },
    /// Periodic service; arrival is derived as departure plus duration.
    Flexible(Schedule),
}

impl Timing {
    /// Build fixed timing from two scheduled times of the same shape.
    pub fn fixed(departure: TimePoint, arrival: TimePoint) -> Result<Self, EdgeError> {
        match (departure, arrival) {
            (TimePoint::Dated(departure), TimePoint::Dated(arrival)) => {
                Ok(Timing::Dated { departure, arrival })
            }
            (TimePoint::Clock(departure), TimePoint::Clock(arrival)) => {
                Ok(Timing::Undated { departure, arrival })
            }
            _ => Err(EdgeError::MixedTiming),
        }
    }

    /// Returns the kind of this timing.
    pub fn kind(&self) -> EdgeKind {
        match self {
            Timing::Dated { .. } | Timing::Undated { .. } => EdgeKind::Fixed,
            Timing::Flexible(_) => EdgeKind::Flexible,
        }
    }
}

/// The outcome of taking an edge from a given clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    /// When the traveller leaves.
    pub departure: TimePoint,
    /// Minutes spent waiting before departure.
    pub wait_mins: u32,
    /// Clock on arrival at the edge's destination.
    pub arrival: SimulatedClock,
}

/// A directed transport offer to `to`.
///
/// Edges are immutable once built. Construction guarantees a positive
/// duration and a finite, non-negative cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    to: String,
    cost: f64,
    duration_mins: u32,
    transport: String,
    timing: Timing,
}

impl Edge {
    /// Construct an edge, validating cost and duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_planner::domain::{ClockTime, Edge, Timing};
    ///
    /// let bus = Edge::new(
    ///     "Airport",
    ///     4.5,
    ///     40,
    ///     "bus",
    ///     Timing::Undated {
    ///         departure: ClockTime::parse_hhmm("06:00").unwrap(),
    ///         arrival: ClockTime::parse_hhmm("06:40").unwrap(),
    ///     },
    /// )
    /// .unwrap();
    /// assert_eq!(bus.to(), "Airport");
    ///
    /// assert!(Edge::new("Airport", -1.0, 40, "bus", bus.timing().clone()).is_err());
    /// ```
    pub fn new(
        to: impl Into<String>,
        cost: f64,
        duration_mins: u32,
        transport: impl Into<String>,
        timing: Timing,
    ) -> Result<Self, EdgeError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(EdgeError::InvalidCost(cost));
        }
        if duration_mins == 0 {
            return Err(EdgeError::NonPositiveDuration);
        }
        Ok(Self {
            to: to.into(),
            cost,
            duration_mins,
            transport: transport.into(),
            timing,
        })
    }

    /// Destination node.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Price of the offer.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Transit time once departed, in minutes.
    pub fn duration_mins(&self) -> u32 {
        self.duration_mins
    }

    /// Transit time once departed.
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_mins))
    }

    /// Descriptive transport tag (e.g. "flight", "train").
    pub fn transport(&self) -> &str {
        &self.transport
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn kind(&self) -> EdgeKind {
        self.timing.kind()
    }

    /// Take this edge from `clock`, if it can still be caught.
    ///
    /// - Flexible: leaves on the next run of its schedule; infeasible once
    ///   the service is exhausted. The date is carried over unchanged.
    /// - Dated: infeasible when it departs on a date before the clock's
    ///   date. Always feasible while the clock has no date. The clock
    ///   moves to the scheduled arrival, date included.
    /// - Undated: always feasible. The clock moves to the scheduled
    ///   arrival time and keeps its date.
    ///
    /// Waiting for a fixed departure is counted only when the clock is
    /// earlier in the day than the scheduled departure.
    pub fn traverse(&self, clock: SimulatedClock) -> Option<Traversal> {
        match &self.timing {
            Timing::Flexible(schedule) => {
                let departure = schedule.next_departure(clock.time)?;
                Some(Traversal {
                    departure: TimePoint::Clock(departure),
                    wait_mins: clock.time.minutes_until(departure),
                    arrival: SimulatedClock::new(
                        departure.plus_minutes(self.duration_mins),
                        clock.date,
                    ),
                })
            }
            Timing::Dated { departure, arrival } => {
                if clock.date.is_some_and(|date| departure.date() < date) {
                    return None;
                }
                Some(Traversal {
                    departure: TimePoint::Dated(*departure),
                    wait_mins: clock.time.minutes_until(time_value(departure)),
                    arrival: SimulatedClock::new(time_value(arrival), Some(arrival.date())),
                })
            }
            Timing::Undated { departure, arrival } => Some(Traversal {
                departure: TimePoint::Clock(*departure),
                wait_mins: clock.time.minutes_until(*departure),
                arrival: SimulatedClock::new(*arrival, clock.date),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_datetime;
    use chrono::NaiveDate;

    fn at(minutes: u32) -> ClockTime {
        ClockTime::from_minutes(minutes)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn flight(dep: &str, arr: &str) -> Edge {
        let timing = Timing::Dated {
            departure: parse_datetime(dep).unwrap(),
            arrival: parse_datetime(arr).unwrap(),
        };
        Edge::new("Rome", 80.0, 120, "flight", timing).unwrap()
    }

    fn bus(dep: u32, arr: u32) -> Edge {
        let timing = Timing::Undated {
            departure: at(dep),
            arrival: at(arr),
        };
        Edge::new("Centre", 3.0, arr - dep, "bus", timing).unwrap()
    }

    fn shuttle() -> Edge {
        let schedule = Schedule::new(at(300), at(660), 15).unwrap();
        Edge::new("Terminal", 2.0, 10, "shuttle", Timing::Flexible(schedule)).unwrap()
    }

    #[test]
    fn rejects_invalid_cost() {
        let timing = Timing::Undated {
            departure: at(0),
            arrival: at(10),
        };
        assert_eq!(
            Edge::new("X", -0.5, 10, "bus", timing.clone()),
            Err(EdgeError::InvalidCost(-0.5))
        );
        assert!(matches!(
            Edge::new("X", f64::NAN, 10, "bus", timing.clone()),
            Err(EdgeError::InvalidCost(_))
        ));
        assert!(Edge::new("X", 0.0, 10, "bus", timing).is_ok());
    }

    #[test]
    fn rejects_zero_duration() {
        let timing = Timing::Undated {
            departure: at(0),
            arrival: at(0),
        };
        assert_eq!(
            Edge::new("X", 1.0, 0, "bus", timing),
            Err(EdgeError::NonPositiveDuration)
        );
    }

    #[test]
    fn fixed_timing_requires_matching_shapes() {
        let dated = TimePoint::parse("2024-05-01 08:00").unwrap();
        let clock = TimePoint::parse("09:00").unwrap();
        assert_eq!(Timing::fixed(dated, clock), Err(EdgeError::MixedTiming));
        assert_eq!(Timing::fixed(clock, dated), Err(EdgeError::MixedTiming));
        assert_eq!(Timing::fixed(dated, dated).unwrap().kind(), EdgeKind::Fixed);
        assert_eq!(Timing::fixed(clock, clock).unwrap().kind(), EdgeKind::Fixed);
    }

    #[test]
    fn flexible_waits_for_next_run() {
        let step = shuttle().traverse(SimulatedClock::new(at(320), None)).unwrap();
        assert_eq!(step.departure, TimePoint::Clock(at(330)));
        assert_eq!(step.wait_mins, 10);
        assert_eq!(step.arrival, SimulatedClock::new(at(340), None));
    }

    #[test]
    fn flexible_keeps_date() {
        let d = Some(date(2024, 5, 1));
        let step = shuttle().traverse(SimulatedClock::new(at(0), d)).unwrap();
        assert_eq!(step.arrival, SimulatedClock::new(at(310), d));
        assert_eq!(step.wait_mins, 300);
    }

    #[test]
    fn flexible_exhausted() {
        assert!(shuttle().traverse(SimulatedClock::new(at(660), None)).is_none());
    }

    #[test]
    fn dated_without_clock_date_is_feasible() {
        let edge = flight("2024-05-01 10:00", "2024-05-01 12:00");
        let step = edge.traverse(SimulatedClock::new(at(480), None)).unwrap();
        assert_eq!(step.wait_mins, 120);
        assert_eq!(step.arrival, SimulatedClock::new(at(720), Some(date(2024, 5, 1))));
    }

    #[test]
    fn dated_before_clock_date_is_infeasible() {
        let edge = flight("2024-05-01 23:00", "2024-05-02 01:00");
        let clock = SimulatedClock::new(at(0), Some(date(2024, 5, 2)));
        assert!(edge.traverse(clock).is_none());
    }

    #[test]
    fn dated_same_or_later_date_is_feasible_regardless_of_time() {
        let edge = flight("2024-05-02 06:00", "2024-05-02 08:00");
        let clock = SimulatedClock::new(at(900), Some(date(2024, 5, 2)));
        let step = edge.traverse(clock).unwrap();
        assert_eq!(step.wait_mins, 0);

        let edge = flight("2024-05-03 06:00", "2024-05-03 08:00");
        assert!(edge.traverse(clock).is_some());
    }

    #[test]
    fn dated_arrival_sets_clock_date() {
        let edge = flight("2024-05-01 23:00", "2024-05-02 01:00");
        let step = edge.traverse(SimulatedClock::start_of_day()).unwrap();
        assert_eq!(step.arrival.date, Some(date(2024, 5, 2)));
        assert_eq!(step.arrival.time, at(60));
    }

    #[test]
    fn undated_always_feasible_and_keeps_date() {
        let d = Some(date(2024, 5, 1));
        let step = bus(480, 510).traverse(SimulatedClock::new(at(900), d)).unwrap();
        assert_eq!(step.wait_mins, 0);
        assert_eq!(step.arrival, SimulatedClock::new(at(510), d));

        let step = bus(480, 510).traverse(SimulatedClock::new(at(450), None)).unwrap();
        assert_eq!(step.wait_mins, 30);
    }

    #[test]
    fn kind_and_duration() {
        assert_eq!(shuttle().kind(), EdgeKind::Flexible);
        assert_eq!(bus(480, 510).kind(), EdgeKind::Fixed);
        assert_eq!(bus(480, 510).duration(), Duration::minutes(30));
    }
}
