//! Round-trip planning on top of the single-leg search.
//!
//! Chains leg searches into round trips over a set of must-visit stops,
//! picks the cheapest ordering and renders the result.

mod config;
mod itinerary;
mod report;
mod round_trip;

pub use config::TripConfig;
pub use itinerary::{Departure, Itinerary, Stop, describe_path};
pub use report::{LegReport, OptionReport, PlanReport, RecommendationReport};
pub use round_trip::{Recommendation, RoundTripPlan, TripError, TripOption, plan_round_trip};
