//! ccbench-viz - Scaling figures for parallel connected-components benchmarks
//!
//! Reads a CSV of benchmark measurements (one row per graph, implementation
//! variant and thread count) and renders four charts summarizing
//! parallel-speedup behavior.
//!
//! # Architecture
//!
//! - **Dataset**: CSV loading and row selection
//! - **Metrics**: speedup and efficiency ratios derived per row
//! - **Visualization**: the four figure renderers
//! - **Output**: optional CSV/JSON export of the derived metrics
//!
//! # Example
//!
//! ```rust,no_run
//! use ccbench_viz::{Dataset, SpeedupPlotter};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let dataset = Dataset::from_path(Path::new("performance_data.csv"))?;
//!     let graph = dataset.default_graph()?.to_string();
//!     SpeedupPlotter::plot(&dataset, &graph, Path::new("figure1_speedup_vs_threads.png"))?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod dataset;
pub mod metrics;
pub mod output;
pub mod visualization;

// Re-export commonly used types
pub use dataset::{Dataset, DatasetError, Implementation, Measurement};
pub use metrics::{efficiency, speedup, MetricsError, ScalingPoint};
pub use output::{CsvExporter, JsonExporter};
pub use visualization::{ComparisonPlotter, EfficiencyPlotter, SpeedupPlotter, TimePlotter};
