//! Time-aware cheapest-path search.
//!
//! A label-setting (Dijkstra-style) search where the relaxed distance is
//! cost, but every frontier entry also carries a simulated clock. Edges are
//! only relaxed when they can still be caught from that clock.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use chrono::Duration;
use tracing::{debug, trace};

use super::replay::path_duration;
use crate::domain::{Graph, SimulatedClock};

/// Error from journey search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// No destination was given
    #[error("destination node must be specified")]
    MissingDestination,
}

/// Result of a single-leg search.
///
/// An unreachable destination is reported as a route with an empty path,
/// infinite cost and no duration. Check [`Route::is_reachable`] before
/// using the figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    path: Vec<String>,
    cost: f64,
    duration: Option<Duration>,
}

impl Route {
    /// The sentinel for "no feasible path".
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            cost: f64::INFINITY,
            duration: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Nodes visited, start and end included. Empty if unreachable.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Total cost; infinite if unreachable.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Elapsed time including waits; `None` if unreachable.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

/// Frontier entry: a partial path and where it leaves the traveller.
#[derive(Debug, Clone)]
struct Frontier<'g> {
    cost: f64,
    clock: SimulatedClock,
    path: Vec<&'g str>,
}

impl<'g> Frontier<'g> {
    fn node(&self) -> &'g str {
        // Paths always start with the origin.
        self.path[self.path.len() - 1]
    }
}

// BinaryHeap is a max-heap: the cheapest entry must compare greatest, and
// among equal costs the lexicographically smallest path.
impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier<'_> {}

/// Find the cheapest time-feasible acyclic path from `start` to `end`.
///
/// The traveller starts at midnight with no date. Each node is settled
/// the first time it is popped at its lowest cost; later, equal or
/// costlier entries for it are discarded. A path never revisits a node.
/// Between any pair of nodes only the cheapest parallel edge is
/// considered, even if a costlier one would have better timing.
///
/// Settling is per node, not per node and arrival time. A cheap arrival
/// that comes too late to catch onward offers still settles the node, and
/// a costlier but earlier arrival there is then dropped. The result is
/// optimal when timing never blocks an onward edge; otherwise a feasible
/// path may be missed.
///
/// Equal-cost candidates are ordered by their node sequence, so the
/// lexicographically smallest of several equally cheap paths is returned.
///
/// The returned duration is recomputed from the chosen path and includes
/// waiting time.
///
/// # Errors
///
/// Returns [`SearchError::MissingDestination`] if `end` is `None`.
/// An unreachable destination is not an error: see [`Route::unreachable`].
///
/// # Examples
///
/// ```
/// use trip_planner::domain::{ClockTime, Edge, Graph, Timing};
/// use trip_planner::planner::find_best_path;
///
/// let at = |s| ClockTime::parse_hhmm(s).unwrap();
/// let mut graph = Graph::new();
/// graph.add_edge("Home", Edge::new("A", 10.0, 30, "bus", Timing::Undated {
///     departure: at("08:00"),
///     arrival: at("08:30"),
/// }).unwrap());
/// graph.add_edge("A", Edge::new("B", 5.0, 20, "train", Timing::Undated {
///     departure: at("09:00"),
///     arrival: at("09:20"),
/// }).unwrap());
///
/// let route = find_best_path(&graph, "Home", Some("B")).unwrap();
/// assert_eq!(route.path(), ["Home", "A", "B"]);
/// assert_eq!(route.cost(), 15.0);
/// assert_eq!(route.duration().unwrap().num_minutes(), 80);
/// ```
pub fn find_best_path(graph: &Graph, start: &str, end: Option<&str>) -> Result<Route, SearchError> {
    let end = end.ok_or(SearchError::MissingDestination)?;

    let mut queue = BinaryHeap::new();
    queue.push(Frontier {
        cost: 0.0,
        clock: SimulatedClock::start_of_day(),
        path: vec![start],
    });

    let mut settled: HashMap<&str, f64> = HashMap::new();
    let mut best: Option<Frontier<'_>> = None;
    let mut popped = 0usize;

    while let Some(entry) = queue.pop() {
        popped += 1;
        let node = entry.node();

        if settled.get(node).is_some_and(|&cost| cost <= entry.cost) {
            continue;
        }
        settled.insert(node, entry.cost);

        if node == end {
            if best.as_ref().is_none_or(|b| entry.cost < b.cost) {
                trace!(cost = entry.cost, hops = entry.path.len() - 1, "destination reached");
                best = Some(entry);
            }
            continue;
        }

        for edge in graph.cheapest_edges_from(node) {
            if entry.path.contains(&edge.to()) {
                continue;
            }

            let Some(step) = edge.traverse(entry.clock) else {
                trace!(
                    from = node,
                    to = edge.to(),
                    time = %entry.clock.time,
                    "edge cannot be caught"
                );
                continue;
            };

            let mut path = entry.path.clone();
            path.push(edge.to());
            queue.push(Frontier {
                cost: entry.cost + edge.cost(),
                clock: step.arrival,
                path,
            });
        }
    }

    let Some(best) = best else {
        debug!(start, end, popped, "destination unreachable");
        return Ok(Route::unreachable());
    };

    let duration = path_duration(graph, &best.path);
    debug!(
        start,
        end,
        cost = best.cost,
        duration_mins = duration.map(|d| d.num_minutes()),
        popped,
        "search complete"
    );

    Ok(Route {
        path: best.path.into_iter().map(str::to_owned).collect(),
        cost: best.cost,
        duration,
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
