//! Domain types for the trip planner.
//!
//! Times, schedules, edges and the graph they form. All types enforce
//! their invariants at construction time, so the search can trust its
//! input without re-validating it.

mod clock;
mod edge;
mod error;
mod graph;
mod schedule;
mod time;

pub use clock::SimulatedClock;
pub use edge::{Edge, EdgeKind, Timing, Traversal};
pub use error::EdgeError;
pub use graph::Graph;
pub use schedule::Schedule;
pub use time::{ClockTime, TimeError, TimePoint, parse_datetime, time_value};
