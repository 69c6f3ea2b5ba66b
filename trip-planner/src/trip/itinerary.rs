//! Itinerary rendering: a path with the departure time at each stop.

use std::fmt;

use serde::Serialize;

use crate::domain::{Graph, SimulatedClock, TimePoint};

/// When the traveller leaves a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "time", rename_all = "snake_case")]
pub enum Departure {
    /// Leaves at this time.
    Scheduled(TimePoint),
    /// The offer can no longer be caught.
    NoService,
    /// No offer connects this stop to the next.
    Unavailable,
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Departure::Scheduled(time) => write!(f, "{time}"),
            Departure::NoService => f.write_str("no service"),
            Departure::Unavailable => f.write_str("N/A"),
        }
    }
}

/// A node on an itinerary; the final stop has no departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub node: String,
    pub departure: Option<Departure>,
}

/// A path annotated with departure times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    pub stops: Vec<Stop>,
}

/// Annotate `path` with the departure taken at each stop.
///
/// Replays the path from a fresh clock through the cheapest edge of each
/// hop. A hop that cannot be taken is marked and leaves the clock where
/// it was.
///
/// ```
/// use trip_planner::domain::{Edge, Graph, Schedule, Timing};
/// use trip_planner::trip::describe_path;
///
/// let mut graph = Graph::new();
/// let shuttle = Timing::Flexible(Schedule::parse("05:00-11:00/15m").unwrap());
/// graph.add_edge("Home", Edge::new("Airport", 2.0, 20, "shuttle", shuttle).unwrap());
///
/// let itinerary = describe_path(&graph, &["Home", "Airport"]);
/// assert_eq!(itinerary.to_string(), "Home (05:00) -> Airport");
/// ```
pub fn describe_path<S: AsRef<str>>(graph: &Graph, path: &[S]) -> Itinerary {
    let mut clock = SimulatedClock::start_of_day();
    let mut stops = Vec::with_capacity(path.len());

    for hop in path.windows(2) {
        let (from, to) = (hop[0].as_ref(), hop[1].as_ref());
        let departure = match graph.cheapest_edge(from, to) {
            None => Departure::Unavailable,
            Some(edge) => match edge.traverse(clock) {
                Some(step) => {
                    clock = step.arrival;
                    Departure::Scheduled(step.departure)
                }
                None => Departure::NoService,
            },
        };
        stops.push(Stop {
            node: from.to_string(),
            departure: Some(departure),
        });
    }

    if let Some(last) = path.last() {
        stops.push(Stop {
            node: last.as_ref().to_string(),
            departure: None,
        });
    }

    Itinerary { stops }
}

impl Itinerary {
    /// Append `next`, which must start where this itinerary ends.
    ///
    /// The shared stop keeps the departure from `next`.
    pub fn join(&mut self, next: Itinerary) {
        if self.stops.last().is_some_and(|last| last.departure.is_none()) {
            self.stops.pop();
        }
        self.stops.extend(next.stops);
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, stop) in self.stops.iter().enumerate() {
            if idx > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(&stop.node)?;
            if let Some(departure) = &stop.departure {
                write!(f, " ({departure})")?;
            }
        }
        Ok(())
    }
}
