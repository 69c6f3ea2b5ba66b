//! Line-oriented graph description loader.
//!
//! Each non-blank, non-comment line describes one offer as seven
//! `|`-separated fields:
//!
//! ```text
//! Home -> Airport | £4.50 | 40m | bus | fixed | 06:00 | 06:40
//! Airport <-> Pisa | 79 | 2h | flight | fixed | 2024-05-01 08:00 | 2024-05-01 10:00
//! Pisa -> Florence | 9 | 1h | train | flexible | 06:00-22:00/30m | -
//! ```
//!
//! `->` and `<-` give the direction; `<->` adds the same offer both ways.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::parse::{parse_cost, parse_duration};
use super::{LoadError, ParseError};
use crate::domain::{Edge, Graph, Schedule, TimePoint, Timing};

const FIELD_COUNT: usize = 7;

/// Direction of an offer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Both,
}

/// Load a graph from a file.
pub fn load_graph(path: &Path) -> Result<Graph, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(&text)
}

/// Build a graph from description text.
///
/// Lines with the wrong number of fields are skipped with a warning;
/// any other malformed line fails the whole load.
///
/// ```
/// use trip_planner::ingest::parse_graph;
///
/// let graph = parse_graph("Home <-> Station | 2 | 15m | bus | fixed | 07:00 | 07:15").unwrap();
/// assert_eq!(graph.cheapest_edge("Station", "Home").unwrap().cost(), 2.0);
/// ```
pub fn parse_graph(text: &str) -> Result<Graph, LoadError> {
    let mut graph = Graph::new();
    let mut skipped = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split('|').map(str::trim).collect();
        let &[route, cost, duration, transport, kind, departure, arrival] = fields.as_slice() else {
            warn!(line, fields = fields.len(), expected = FIELD_COUNT, "skipping malformed line");
            skipped += 1;
            continue;
        };

        let (from, to, direction) = split_route(route).ok_or(LoadError::MissingArrow { line })?;
        let offer = Offer {
            cost,
            duration,
            transport,
            kind,
            departure,
            arrival,
        };

        graph.add_edge(from, offer.to_edge(to, line)?);
        if direction == Direction::Both {
            graph.add_edge(to, offer.to_edge(from, line)?);
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped,
        "graph loaded"
    );
    Ok(graph)
}

/// Split `A -> B`, `B <- A` or `A <-> B` into `(from, to, direction)`.
fn split_route(route: &str) -> Option<(&str, &str, Direction)> {
    let (from, to, direction) = if let Some((a, b)) = route.split_once("<->") {
        (a, b, Direction::Both)
    } else if let Some((a, b)) = route.split_once("->") {
        (a, b, Direction::Forward)
    } else if let Some((b, a)) = route.split_once("<-") {
        (a, b, Direction::Forward)
    } else {
        return None;
    };

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return None;
    }
    Some((from, to, direction))
}

/// The non-route fields of an offer line.
struct Offer<'a> {
    cost: &'a str,
    duration: &'a str,
    transport: &'a str,
    kind: &'a str,
    departure: &'a str,
    arrival: &'a str,
}

impl Offer<'_> {
    fn to_edge(&self, to: &str, line: usize) -> Result<Edge, LoadError> {
        let parse_err = |source: ParseError| LoadError::Parse { line, source };
        let edge_err = |source| LoadError::Edge { line, source };

        let cost = parse_cost(self.cost).map_err(parse_err)?;
        let duration = parse_duration(self.duration).map_err(parse_err)?;

        let timing = match self.kind.to_ascii_lowercase().as_str() {
            "fixed" => {
                let departure = TimePoint::parse(self.departure)
                    .map_err(|e| parse_err(e.into()))?;
                let arrival = TimePoint::parse(self.arrival).map_err(|e| parse_err(e.into()))?;
                Timing::fixed(departure, arrival).map_err(edge_err)?
            }
            "flexible" => Timing::Flexible(Schedule::parse(self.departure).map_err(edge_err)?),
            _ => return Err(parse_err(ParseError::EdgeType(self.kind.to_string()))),
        };

        Edge::new(to, cost, duration, self.transport, timing).map_err(edge_err)
    }
}
