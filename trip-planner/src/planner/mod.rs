//! Time-aware route search.
//!
//! Finds the cheapest path between two nodes that can actually be
//! travelled, given when each offer runs, and recomputes the elapsed
//! time (waits included) along any path.

mod replay;
mod search;

pub use replay::{PathTotals, path_duration, path_totals};
pub use search::{Route, SearchError, find_best_path};
