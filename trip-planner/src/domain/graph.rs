//! The transport graph.

use std::collections::HashMap;

use super::Edge;

/// A directed multigraph from node name to outgoing offers.
///
/// Outgoing edges keep their insertion order. Several edges may connect
/// the same ordered pair of nodes; wherever a path crosses such a pair,
/// the cheapest of them is the one used (see [`Graph::cheapest_edge`]).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an outgoing edge from `from`.
    pub fn add_edge(&mut self, from: impl Into<String>, edge: Edge) {
        self.adjacency.entry(from.into()).or_default().push(edge);
    }

    /// All edges leaving `node`, in insertion order.
    pub fn edges_from(&self, node: &str) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// The cheapest edge from `from` to `to`.
    ///
    /// Among equally cheap parallel edges the first inserted wins. Search,
    /// path replay and itinerary rendering all select edges through here.
    ///
    /// ```
    /// use trip_planner::domain::{ClockTime, Edge, Graph, Timing};
    ///
    /// let timing = Timing::Undated {
    ///     departure: ClockTime::from_minutes(600),
    ///     arrival: ClockTime::from_minutes(630),
    /// };
    /// let mut graph = Graph::new();
    /// graph.add_edge("X", Edge::new("Y", 7.0, 30, "train", timing.clone()).unwrap());
    /// graph.add_edge("X", Edge::new("Y", 3.0, 30, "bus", timing).unwrap());
    ///
    /// assert_eq!(graph.cheapest_edge("X", "Y").unwrap().transport(), "bus");
    /// assert!(graph.cheapest_edge("Y", "X").is_none());
    /// ```
    pub fn cheapest_edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.edges_from(from)
            .iter()
            .filter(|edge| edge.to() == to)
            .min_by(|a, b| a.cost().total_cmp(&b.cost()))
    }

    /// One edge per distinct neighbour of `from`: the cheapest, in the
    /// order each neighbour first appears.
    pub fn cheapest_edges_from<'a>(&'a self, from: &'a str) -> impl Iterator<Item = &'a Edge> {
        let edges = self.edges_from(from);
        edges.iter().enumerate().filter_map(move |(idx, edge)| {
            let first_seen = !edges[..idx].iter().any(|e| e.to() == edge.to());
            if first_seen {
                self.cheapest_edge(from, edge.to())
            } else {
                None
            }
        })
    }

    /// Whether `node` has any outgoing edges.
    pub fn contains_node(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of nodes with outgoing edges.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges, counting parallel offers separately.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
