use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_planner::ingest::load_graph;
use trip_planner::trip::{PlanReport, TripConfig, plan_round_trip};

/// Plan the cheapest round trip through a transport network.
#[derive(Debug, Parser)]
#[command(name = "trip-planner", version)]
struct Cli {
    /// Edge description file, one offer per line.
    edges: PathBuf,

    /// Node the trip starts and ends at.
    #[arg(long, default_value = "Home")]
    home: String,

    /// Stop to visit; repeat for several. Defaults to Florence and Rome.
    #[arg(long = "visit", value_name = "NODE")]
    visits: Vec<String>,

    /// Print the plan as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = if cli.visits.is_empty() {
        TripConfig {
            home: cli.home,
            ..TripConfig::default()
        }
    } else {
        TripConfig::new(cli.home, cli.visits)
    };

    let graph = match load_graph(&cli.edges) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let plan = match plan_round_trip(&graph, &config) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let report = PlanReport::from_plan(&graph, &plan);
    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to encode plan: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{report}");
    }

    ExitCode::SUCCESS
}
