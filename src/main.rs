//! ccbench-viz CLI
//!
//! Renders scaling figures from a CSV of benchmark measurements.

use anyhow::Result;
use ccbench_viz::cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    cli.run()
}
