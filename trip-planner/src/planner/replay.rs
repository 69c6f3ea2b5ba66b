//! Cost and duration of a given path.
//!
//! Replays a path edge by edge from a fresh clock, applying the same
//! feasibility rules as the search. Works on any path, not just ones the
//! search produced.

use chrono::Duration;

use crate::domain::{Graph, SimulatedClock};

/// Totals for a feasible path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathTotals {
    /// Sum of edge costs.
    pub cost: f64,
    /// Transit plus waiting time.
    pub duration: Duration,
}

/// Cost and elapsed time of `path`, starting at midnight with no date.
///
/// Each hop uses the cheapest edge between its two nodes. The origin is
/// untimed, so the elapsed time runs from the first departure: waiting
/// before the first hop is not counted, waiting between hops is.
///
/// Returns `None` if a hop has no edge or cannot be caught at replay
/// time. Paths with fewer than two nodes cost nothing and take no time.
pub fn path_totals<S: AsRef<str>>(graph: &Graph, path: &[S]) -> Option<PathTotals> {
    let mut clock = SimulatedClock::start_of_day();
    let mut cost = 0.0;
    let mut duration = Duration::zero();

    for (idx, hop) in path.windows(2).enumerate() {
        let edge = graph.cheapest_edge(hop[0].as_ref(), hop[1].as_ref())?;
        let step = edge.traverse(clock)?;

        if idx > 0 {
            duration += Duration::minutes(i64::from(step.wait_mins));
        }
        duration += edge.duration();
        cost += edge.cost();
        clock = step.arrival;
    }

    Some(PathTotals { cost, duration })
}

/// Elapsed time of `path` including waits; `None` if infeasible.
pub fn path_duration<S: AsRef<str>>(graph: &Graph, path: &[S]) -> Option<Duration> {
    path_totals(graph, path).map(|totals| totals.duration)
}
