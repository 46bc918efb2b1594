//! Warehouse robot simulator entry point.
//!
//! Orchestrates the full pipeline: configuration, reading the command file,
//! running the move engine, and reporting the outcome. Any failure in the
//! pipeline is logged at error level and swallowed; the process never
//! crashes on bad input.
mod config;
mod input;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use config::SimConfig;
use warehouse_core::Position;

/// Simulates a warehouse robot following cardinal-direction commands.
#[derive(Parser)]
#[command(name = "warehouse")]
#[command(about = "Simulates a warehouse robot on a bounded grid", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the command file, overriding the configured default.
    input_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SimConfig::from_env();
    let input_file = cli.input_file.unwrap_or_else(|| config.input_file.clone());

    tracing::info!(
        "starting position: {}, warehouse dimensions: {}",
        config.start,
        config.grid
    );
    tracing::info!("fetching input directions from {}", input_file.display());

    match simulate(&config, &input_file).await {
        Ok(position) => {
            tracing::info!("the robot's final position is {position}");
            println!("{position}");
        }
        Err(error) => {
            tracing::error!("simulation failed: {error:#}");
        }
    }

    Ok(())
}

/// Runs the read -> parse -> move pipeline and returns the final position.
async fn simulate(config: &SimConfig, input_file: &Path) -> Result<Position> {
    let raw_input = input::read_directions(input_file).await?;
    let position = warehouse_core::run(config.start, config.grid, &raw_input)?;
    Ok(position)
}
