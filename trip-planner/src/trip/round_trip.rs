//! Round-trip composition.
//!
//! A round trip leaves home, visits every configured stop once and comes
//! back. Each ordering of the stops is an option; each option is a chain
//! of independent single-leg searches.

use chrono::Duration;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, warn};

use super::TripConfig;
use crate::domain::Graph;
use crate::planner::{Route, SearchError, find_best_path};

/// Error from round-trip planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripError {
    /// The trip configuration is unusable
    #[error("invalid trip: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// One ordering of the stops, with the best route for each leg.
#[derive(Debug, Clone, PartialEq)]
pub struct TripOption {
    waypoints: Vec<String>,
    legs: Vec<Route>,
}

impl TripOption {
    /// Home, each stop in visiting order, then home again.
    pub fn waypoints(&self) -> &[String] {
        &self.waypoints
    }

    /// One route per consecutive pair of waypoints.
    pub fn legs(&self) -> &[Route] {
        &self.legs
    }

    /// Whether every leg can be travelled.
    pub fn is_reachable(&self) -> bool {
        self.legs.iter().all(Route::is_reachable)
    }

    /// Sum of leg costs; infinite if any leg is unreachable.
    pub fn total_cost(&self) -> f64 {
        self.legs.iter().map(Route::cost).sum()
    }

    /// Sum of leg durations; `None` if any leg is unreachable.
    pub fn total_duration(&self) -> Option<Duration> {
        self.legs
            .iter()
            .map(Route::duration)
            .try_fold(Duration::zero(), |total, leg| Some(total + leg?))
    }

    /// The whole trip as one node sequence; empty if unreachable.
    pub fn full_path(&self) -> Vec<String> {
        if !self.is_reachable() {
            return Vec::new();
        }

        let mut path: Vec<String> = Vec::new();
        for leg in &self.legs {
            let skip = usize::from(!path.is_empty());
            path.extend(leg.path().iter().skip(skip).cloned());
        }
        path
    }

    /// Waypoints joined for display, e.g. `Home -> Rome -> Home`.
    pub fn label(&self) -> String {
        self.waypoints.join(" -> ")
    }
}

/// Which option to take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// Index of the strictly cheapest option.
    Best(usize),
    /// Indices of options sharing the lowest cost.
    Tie(Vec<usize>),
    /// No option can be completed.
    Unreachable,
}

/// All round-trip options and the recommended one.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripPlan {
    pub options: Vec<TripOption>,
    pub recommendation: Recommendation,
}

/// Plan every ordering of the configured stops.
///
/// Options are listed in lexicographic order of the stop permutation,
/// starting from the configured order. Each leg is searched from a fresh
/// clock, so legs are independent and options are evaluated in parallel.
pub fn plan_round_trip(graph: &Graph, config: &TripConfig) -> Result<RoundTripPlan, TripError> {
    config.validate()?;

    for node in config.stops.iter().chain(std::iter::once(&config.home)) {
        if !graph.contains_node(node) {
            warn!(node = %node, "no offers leave this node");
        }
    }

    let orders: Vec<Vec<&String>> = config
        .stops
        .iter()
        .permutations(config.stops.len())
        .collect();

    let options = orders
        .into_par_iter()
        .map(|order| evaluate(graph, &config.home, &order))
        .collect::<Result<Vec<_>, _>>()?;

    let recommendation = recommend(&options);
    debug!(
        options = options.len(),
        ?recommendation,
        "round trip planned"
    );

    Ok(RoundTripPlan {
        options,
        recommendation,
    })
}

fn evaluate(graph: &Graph, home: &str, order: &[&String]) -> Result<TripOption, SearchError> {
    let waypoints: Vec<String> = std::iter::once(home)
        .chain(order.iter().map(|stop| stop.as_str()))
        .chain(std::iter::once(home))
        .map(str::to_owned)
        .collect();

    let legs = waypoints
        .iter()
        .tuple_windows()
        .map(|(from, to)| find_best_path(graph, from, Some(to.as_str())))
        .collect::<Result<Vec<_>, _>>()?;

    let option = TripOption { waypoints, legs };
    debug!(
        trip = %option.label(),
        cost = option.total_cost(),
        path = ?option.full_path(),
        "option evaluated"
    );
    Ok(option)
}

fn recommend(options: &[TripOption]) -> Recommendation {
    let cheapest = options
        .iter()
        .map(TripOption::total_cost)
        .fold(f64::INFINITY, f64::min);
    if cheapest.is_infinite() {
        return Recommendation::Unreachable;
    }

    let winners: Vec<usize> = options
        .iter()
        .positions(|option| option.total_cost() == cheapest)
        .collect();
    match winners.as_slice() {
        [only] => Recommendation::Best(*only),
        _ => Recommendation::Tie(winners),
    }
}
