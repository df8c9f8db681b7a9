//! CLI argument parsing and command handling

use crate::dataset::Dataset;
use crate::output::{CsvExporter, JsonExporter};
use crate::visualization::{
    ComparisonPlotter, EfficiencyPlotter, SpeedupPlotter, TimePlotter, COMPARISON_FIGURE,
    EFFICIENCY_FIGURE, SPEEDUP_FIGURE, TIME_FIGURE,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Thread count the comparison chart picks for the parallel variants unless
/// overridden with `--comparison-threads`.
pub const DEFAULT_COMPARISON_THREADS: u32 = 4;

/// Render scaling figures from parallel connected-components benchmark results
#[derive(Parser, Debug)]
#[command(name = "ccbench-viz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the benchmark results CSV
    pub input: Option<PathBuf>,

    /// Graph to use for the single-graph figures; defaults to the graph of
    /// the first record in the file
    #[arg(short, long)]
    pub graph: Option<String>,

    /// Thread count the comparison chart picks for the parallel variants
    #[arg(long, default_value_t = DEFAULT_COMPARISON_THREADS)]
    pub comparison_threads: u32,

    /// Directory the figures are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Also export the derived per-record scaling table as CSV
    #[arg(long)]
    pub csv: bool,

    /// Also export a per-graph scaling summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Load the dataset and render all four figures
    pub fn run(&self) -> Result<()> {
        let Some(input) = self.input.as_deref() else {
            println!("Usage: ccbench-viz <performance_data.csv>");
            std::process::exit(1);
        };

        let dataset = Dataset::from_path(input)?;
        println!("Loaded {} data points", dataset.len());
        tracing::info!(records = dataset.len(), "dataset loaded");

        let graph = match &self.graph {
            Some(name) => name.clone(),
            None => dataset.default_graph()?.to_string(),
        };
        tracing::info!(%graph, threads = self.comparison_threads, "generating figures");

        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "failed to create output directory: {}",
                self.output_dir.display()
            )
        })?;

        println!("\nGenerating figures...");

        let path = self.output_dir.join(SPEEDUP_FIGURE);
        SpeedupPlotter::plot(&dataset, &graph, &path)
            .with_context(|| format!("failed to render {SPEEDUP_FIGURE}"))?;
        println!("Saved: {}", path.display());

        let path = self.output_dir.join(TIME_FIGURE);
        TimePlotter::plot(&dataset, &graph, &path)
            .with_context(|| format!("failed to render {TIME_FIGURE}"))?;
        println!("Saved: {}", path.display());

        let path = self.output_dir.join(EFFICIENCY_FIGURE);
        EfficiencyPlotter::plot(&dataset, &graph, &path)
            .with_context(|| format!("failed to render {EFFICIENCY_FIGURE}"))?;
        println!("Saved: {}", path.display());

        let path = self.output_dir.join(COMPARISON_FIGURE);
        ComparisonPlotter::plot(&dataset, self.comparison_threads, &path)
            .with_context(|| format!("failed to render {COMPARISON_FIGURE}"))?;
        println!("Saved: {}", path.display());

        if self.csv {
            let path = self.output_dir.join("scaling_metrics.csv");
            CsvExporter::export(&dataset, &path)
                .with_context(|| format!("failed to export CSV to: {}", path.display()))?;
            println!("Saved: {}", path.display());
        }

        if self.json {
            let path = self.output_dir.join("scaling_summary.json");
            JsonExporter::export(&dataset, &path)
                .with_context(|| format!("failed to export JSON to: {}", path.display()))?;
            println!("Saved: {}", path.display());
        }

        println!("\nAll figures generated!");
        Ok(())
    }
}
