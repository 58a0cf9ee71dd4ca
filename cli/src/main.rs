//! Airport Simulator CLI - interactive front end
//!
//! Binary: airport-sim
//!
//! Commands: tick, add, status, help, exit

use airport_simulator_core::{Orchestrator, OrchestratorConfig};
use clap::Parser;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod render;
mod session;

use render::Renderer;

/// Airport passenger-flow simulation
#[derive(Parser)]
#[command(name = "airport-sim")]
#[command(about = "Discrete-tick simulation of an airport terminal", long_about = None)]
struct Cli {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Print status snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Disable coloured flight status
    #[arg(long)]
    no_color: bool,

    /// Log filter, e.g. "info" or "airport_simulator_core=debug"
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with rendered output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&cli.log_level)?)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let seed = match cli.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64,
    };
    info!(seed, "starting simulation");

    let mut orchestrator = Orchestrator::new(OrchestratorConfig {
        rng_seed: seed,
        ..OrchestratorConfig::default()
    })?;

    let renderer = Renderer {
        color: !cli.no_color,
        json: cli.json,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session::run(&mut orchestrator, stdin.lock(), &mut stdout, renderer)?;

    Ok(())
}
