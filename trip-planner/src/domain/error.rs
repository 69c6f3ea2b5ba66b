//! Domain error types.
//!
//! These errors represent offers that cannot be modelled: they are raised
//! when an edge is constructed, never during search.

use super::TimeError;

/// Validation failures when building schedules and edges.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EdgeError {
    /// Flexible schedule with a zero frequency, an inverted window, or bad syntax
    #[error("malformed schedule: {0}")]
    MalformedSchedule(&'static str),

    /// Transit duration of zero minutes
    #[error("duration must be positive")]
    NonPositiveDuration,

    /// Negative or non-finite cost
    #[error("cost must be a non-negative number, got {0}")]
    InvalidCost(f64),

    /// Fixed offer with one dated and one time-of-day endpoint
    #[error("fixed departure and arrival must both be dated or both be times of day")]
    MixedTiming,

    /// Unparseable time in a schedule
    #[error(transparent)]
    Time(#[from] TimeError),
}
