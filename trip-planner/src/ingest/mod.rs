//! Graph ingestion from text descriptions.

mod error;
mod loader;
mod parse;

pub use error::{LoadError, ParseError};
pub use loader::{load_graph, parse_graph};
pub use parse::{parse_cost, parse_duration};
