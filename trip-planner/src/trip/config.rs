//! Round-trip configuration.

use std::collections::HashSet;

use super::TripError;

/// Which round trip to plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripConfig {
    /// Node the trip starts and ends at.
    pub home: String,

    /// Nodes that must each be visited once, in any order.
    pub stops: Vec<String>,
}

impl TripConfig {
    /// Create a new configuration.
    pub fn new(home: impl Into<String>, stops: Vec<String>) -> Self {
        Self {
            home: home.into(),
            stops,
        }
    }

    /// Check that the trip is well formed.
    ///
    /// The home node must be named, and stops must be distinct and
    /// different from home.
    ///
    /// # Errors
    ///
    /// Returns [`TripError::InvalidConfig`] describing the first problem.
    pub fn validate(&self) -> Result<(), TripError> {
        let invalid = |reason: String| Err(TripError::InvalidConfig(reason));

        if self.home.is_empty() {
            return invalid("home node must not be empty".to_string());
        }

        let mut seen = HashSet::new();
        for stop in &self.stops {
            if stop.is_empty() {
                return invalid("stop names must not be empty".to_string());
            }
            if *stop == self.home {
                return invalid(format!("stop {stop:?} is the home node"));
            }
            if !seen.insert(stop.as_str()) {
                return invalid(format!("stop {stop:?} is listed twice"));
            }
        }

        Ok(())
    }
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            home: "Home".to_string(),
            stops: vec!["Florence".to_string(), "Rome".to_string()],
        }
    }
}
