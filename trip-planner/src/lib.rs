//! Cheapest time-feasible trip planning.
//!
//! Finds the cheapest route through a small transport network whose
//! offers run on different clocks: dated flights, daily local transport,
//! and shuttles that run at a fixed frequency within a window. The search
//! tracks the traveller's time of day (and date, once a flight is taken)
//! and only uses offers that can still be caught.

pub mod domain;
pub mod ingest;
pub mod planner;
pub mod trip;
