//! Command-line front end: parse a coordinate file, anneal, report.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tsp_anneal::io::{input, output, plot};
use tsp_anneal::sa::{AnnealConfig, CoolingSchedule};
use tsp_anneal::tsp::{solve, TourProblem};

#[derive(Parser, Debug)]
#[command(name = "tsp-anneal")]
#[command(about = "Approximate a shortest closed tour with simulated annealing", long_about = None)]
struct Args {
    /// Coordinate file: one "x y" pair per line
    input: PathBuf,

    /// Where to write the best visiting order
    #[arg(short, long, default_value = "best_route.txt")]
    output: PathBuf,

    /// Optional SVG plot of the best tour
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Optional starting route file (one city index per line)
    #[arg(long)]
    route: Option<PathBuf>,

    /// Initial temperature
    #[arg(short = 't', long, default_value_t = 100.0)]
    initial_temperature: f64,

    /// Geometric decay rate per iteration, in (0, 1)
    #[arg(short = 'd', long, default_value_t = 0.995)]
    decay_rate: f64,

    /// Stop once the temperature falls below this floor
    #[arg(long, default_value_t = 1e-3)]
    min_temperature: f64,

    /// Hard iteration cap
    #[arg(short = 'n', long, default_value_t = 50_000)]
    max_iterations: usize,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let cities = input::read_cities(&args.input)
        .with_context(|| format!("failed to read cities from {}", args.input.display()))?;
    info!(cities = cities.len(), "loaded instance");

    let mut config = AnnealConfig::default()
        .with_initial_temperature(args.initial_temperature)
        .with_min_temperature(args.min_temperature)
        .with_cooling(CoolingSchedule::Geometric {
            rate: args.decay_rate,
        })
        .with_max_iterations(args.max_iterations);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut problem = TourProblem::new(&cities)?;
    if let Some(route_path) = &args.route {
        let start = input::read_route(route_path)
            .with_context(|| format!("failed to read route from {}", route_path.display()))?;
        problem = problem.with_starting_tour(start)?;
    }

    let started = Instant::now();
    let result = solve(&problem, &config)?;
    let elapsed = started.elapsed();

    info!(
        iterations = result.iterations,
        accepted = result.accepted_moves,
        improving = result.improving_moves,
        final_temperature = result.final_temperature,
        stop_reason = ?result.stop_reason,
        "annealing finished"
    );

    println!("{}", output::run_summary(&result.best, result.best_cost, elapsed));

    output::write_route(&args.output, &result.best)
        .with_context(|| format!("failed to write route to {}", args.output.display()))?;

    if let Some(svg_path) = &args.svg {
        plot::write_svg(svg_path, &cities, &result.best)
            .with_context(|| format!("failed to write plot to {}", svg_path.display()))?;
    }

    Ok(())
}
