//! Round-trip plan presentation, as text or JSON.

use std::fmt;

use serde::Serialize;

use super::{Itinerary, Recommendation, RoundTripPlan, TripOption, describe_path};
use crate::domain::Graph;
use crate::planner::Route;

/// A planned round trip, ready for display.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    /// Options in the order they were planned
    pub options: Vec<OptionReport>,

    /// Which option to take
    pub recommendation: RecommendationReport,
}

/// One ordering of the stops.
#[derive(Debug, Serialize)]
pub struct OptionReport {
    /// 1-based option number
    pub number: usize,

    /// Waypoints, e.g. "Home -> Rome -> Home"
    pub label: String,

    /// The whole trip with departure times; empty if unreachable
    pub itinerary: Itinerary,

    /// Total cost, absent if unreachable
    pub total_cost: Option<f64>,

    /// Total duration in minutes, absent if unreachable
    pub duration_mins: Option<i64>,

    /// Per-leg results
    pub legs: Vec<LegReport>,
}

/// One leg between consecutive waypoints.
#[derive(Debug, Serialize)]
pub struct LegReport {
    pub from: String,
    pub to: String,

    /// Nodes on the leg; empty if unreachable
    pub path: Vec<String>,

    pub cost: Option<f64>,
    pub duration_mins: Option<i64>,
}

/// Recommendation for display.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationReport {
    Best { option: usize, label: String },
    Tie { options: Vec<usize> },
    Unreachable,
}

impl PlanReport {
    /// Create from a plan over `graph`.
    pub fn from_plan(graph: &Graph, plan: &RoundTripPlan) -> Self {
        let options: Vec<OptionReport> = plan
            .options
            .iter()
            .enumerate()
            .map(|(idx, option)| OptionReport::from_option(graph, idx + 1, option))
            .collect();

        let recommendation = match &plan.recommendation {
            Recommendation::Best(idx) => RecommendationReport::Best {
                option: idx + 1,
                label: plan.options[*idx].label(),
            },
            Recommendation::Tie(indices) => RecommendationReport::Tie {
                options: indices.iter().map(|idx| idx + 1).collect(),
            },
            Recommendation::Unreachable => RecommendationReport::Unreachable,
        };

        Self {
            options,
            recommendation,
        }
    }
}

impl OptionReport {
    fn from_option(graph: &Graph, number: usize, option: &TripOption) -> Self {
        let legs = option
            .waypoints()
            .windows(2)
            .zip(option.legs())
            .map(|(pair, route)| LegReport::from_route(&pair[0], &pair[1], route))
            .collect();

        Self {
            number,
            label: option.label(),
            itinerary: itinerary(graph, option),
            total_cost: option.is_reachable().then(|| option.total_cost()),
            duration_mins: option.total_duration().map(|d| d.num_minutes()),
            legs,
        }
    }
}

/// Legs described one by one, each from a fresh clock as it was searched.
fn itinerary(graph: &Graph, option: &TripOption) -> Itinerary {
    if !option.is_reachable() {
        return Itinerary::default();
    }

    option
        .legs()
        .iter()
        .fold(Itinerary::default(), |mut trip, leg| {
            trip.join(describe_path(graph, leg.path()));
            trip
        })
}

impl LegReport {
    fn from_route(from: &str, to: &str, route: &Route) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            path: route.path().to_vec(),
            cost: route.is_reachable().then(|| route.cost()),
            duration_mins: route.duration().map(|d| d.num_minutes()),
        }
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Round Trip Options ---")?;
        for option in &self.options {
            writeln!(f, "Option {}: {}", option.number, option.label)?;
            match (option.total_cost, option.duration_mins) {
                (Some(cost), Some(mins)) => {
                    writeln!(f, "   Path: {}", option.itinerary)?;
                    writeln!(f, "   Total cost: £{cost:.2}, duration: {mins} minutes")?;
                }
                _ => {
                    let missing: Vec<String> = option
                        .legs
                        .iter()
                        .filter(|leg| leg.path.is_empty())
                        .map(|leg| format!("{} -> {}", leg.from, leg.to))
                        .collect();
                    writeln!(f, "   Unreachable: no feasible route for {}", missing.join(", "))?;
                }
            }
        }

        writeln!(f)?;
        match &self.recommendation {
            RecommendationReport::Best { option, label } => {
                writeln!(f, "Recommended: Option {option} ({label})")
            }
            RecommendationReport::Tie { options } => {
                let numbers: Vec<String> = options.iter().map(usize::to_string).collect();
                writeln!(
                    f,
                    "Options {} have the same total cost. Choose based on duration or preference.",
                    numbers.join(", ")
                )
            }
            RecommendationReport::Unreachable => {
                writeln!(f, "No round trip can be completed with the available offers.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, Edge, Schedule, Timing};
    use crate::trip::{TripConfig, plan_round_trip};

    fn link(graph: &mut Graph, from: &str, to: &str, cost: f64, dep: u32) {
        let timing = Timing::Undated {
            departure: ClockTime::from_minutes(dep),
            arrival: ClockTime::from_minutes(dep + 60),
        };
        graph.add_edge(from, Edge::new(to, cost, 60, "train", timing).unwrap());
    }

    fn plan_for(graph: &Graph) -> PlanReport {
        let config = TripConfig::new("Home", vec!["Florence".into(), "Rome".into()]);
        let plan = plan_round_trip(graph, &config).unwrap();
        PlanReport::from_plan(graph, &plan)
    }

    #[test]
    fn renders_text_report() {
        let mut graph = Graph::new();
        link(&mut graph, "Home", "Florence", 10.0, 480);
        link(&mut graph, "Florence", "Rome", 12.5, 600);
        link(&mut graph, "Rome", "Home", 20.0, 720);

        let report = plan_for(&graph);
        let text = report.to_string();

        assert!(text.starts_with("--- Round Trip Options ---\n"));
        assert!(text.contains("Option 1: Home -> Florence -> Rome -> Home\n"));
        assert!(text.contains(
            "   Path: Home (08:00) -> Florence (10:00) -> Rome (12:00) -> Home\n"
        ));
        assert!(text.contains("   Total cost: £42.50, duration: 180 minutes\n"));
        assert!(text.contains("Option 2: Home -> Rome -> Florence -> Home\n"));
        // Every leg of the reverse order has to go round the loop.
        assert!(text.contains("   Total cost: £85.00, duration: 480 minutes\n"));
        assert!(text.ends_with("Recommended: Option 1 (Home -> Florence -> Rome -> Home)\n"));
    }

    #[test]
    fn each_leg_departs_on_its_own_clock() {
        // Replayed in one go, Florence would be reached at 21:00 and miss
        // the morning shuttle; searched per leg it departs at 06:00.
        let mut graph = Graph::new();
        link(&mut graph, "Home", "Florence", 10.0, 1200);
        let shuttle = Timing::Flexible(Schedule::parse("06:00-07:00/30m").unwrap());
        graph.add_edge("Florence", Edge::new("Rome", 5.0, 60, "shuttle", shuttle).unwrap());
        link(&mut graph, "Rome", "Home", 20.0, 720);

        let report = plan_for(&graph);
        let first = &report.options[0];
        assert_eq!(first.total_cost, Some(35.0));
        assert_eq!(
            first.itinerary.to_string(),
            "Home (20:00) -> Florence (06:00) -> Rome (12:00) -> Home"
        );
        assert!(!report.to_string().contains("no service"));
    }

    #[test]
    fn leg_reports() {
        let mut graph = Graph::new();
        link(&mut graph, "Home", "Florence", 10.0, 480);

        let report = plan_for(&graph);
        let legs = &report.options[0].legs;
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[0].path, ["Home", "Florence"]);
        assert_eq!(legs[0].cost, Some(10.0));
        assert_eq!(legs[0].duration_mins, Some(60));
        assert!(legs[1].path.is_empty());
        assert_eq!(legs[1].cost, None);
        assert_eq!(report.options[0].total_cost, None);
        assert!(report.options[0].itinerary.stops.is_empty());
        assert!(report.to_string().contains(
            "   Unreachable: no feasible route for Florence -> Rome, Rome -> Home\n"
        ));
    }

    #[test]
    fn unreachable_recommendation() {
        let report = plan_for(&Graph::new());
        assert!(matches!(report.recommendation, RecommendationReport::Unreachable));
        assert!(report.to_string().ends_with("No round trip can be completed with the available offers.\n"));
    }

    #[test]
    fn tie_recommendation() {
        let mut graph = Graph::new();
        for (from, to) in [
            ("Home", "Florence"),
            ("Florence", "Rome"),
            ("Rome", "Home"),
            ("Home", "Rome"),
            ("Rome", "Florence"),
            ("Florence", "Home"),
        ] {
            link(&mut graph, from, to, 10.0, 480);
        }

        let text = plan_for(&graph).to_string();
        assert!(text.contains("Options 1, 2 have the same total cost."));
    }

    #[test]
    fn json_shape() {
        let mut graph = Graph::new();
        link(&mut graph, "Home", "Florence", 10.0, 480);
        link(&mut graph, "Florence", "Rome", 10.0, 600);
        link(&mut graph, "Rome", "Home", 10.0, 720);

        let json = serde_json::to_value(plan_for(&graph)).unwrap();
        assert_eq!(json["recommendation"]["kind"], "best");
        assert_eq!(json["recommendation"]["option"], 1);
        assert_eq!(json["options"][0]["total_cost"], 30.0);
        assert_eq!(json["options"][0]["duration_mins"], 180);
        assert_eq!(json["options"][1]["total_cost"], 60.0);
        assert_eq!(json["options"][0]["itinerary"]["stops"][0]["node"], "Home");
        assert_eq!(json["options"][0]["legs"][2]["from"], "Rome");
    }
}
