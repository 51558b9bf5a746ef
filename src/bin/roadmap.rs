use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tollroad::{RoadMap, SearchOutcome, Trip};

#[derive(Parser)]
#[command(name = "roadmap")]
#[command(about = "Find a toll-affordable route through a road map", long_about = None)]
struct Cli {
    /// Road map description file
    map: PathBuf,

    /// Start node (defaults to the map header)
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Destination node (defaults to the map header)
    #[arg(long)]
    destination: Option<i64>,

    /// Initial budget (defaults to the map header)
    #[arg(long)]
    budget: Option<i64>,

    /// Print the outcome as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    println!("{}", run(&cli)?);
    Ok(())
}

/// Loads the map, runs the trip and renders the outcome. Any `Err` reaches
/// `main` and ends the process with a non-zero status.
fn run(cli: &Cli) -> Result<String> {
    let map = RoadMap::from_path(&cli.map)
        .with_context(|| format!("failed to load road map {}", cli.map.display()))?;

    let header = map.trip();
    let trip = Trip::new(
        cli.start.unwrap_or(header.start),
        cli.destination.unwrap_or(header.destination),
        cli.budget.unwrap_or(header.budget),
    );

    let outcome = map
        .path_finder()
        .find_trip(&trip)
        .with_context(|| format!("route search from {} to {} failed", trip.start, trip.destination))?;

    render(&outcome, cli.json)
}

fn render(outcome: &SearchOutcome, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(outcome)?);
    }

    Ok(match outcome {
        SearchOutcome::Found(route) => {
            let hops: Vec<String> = route.nodes().iter().map(ToString::to_string).collect();
            format!("{}\nbudget left: {}", hops.join(" -> "), route.final_budget())
        }
        SearchOutcome::NotFound => "no path found".to_owned(),
    })
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
