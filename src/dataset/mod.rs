//! Benchmark dataset loading and selection
//!
//! A dataset is the full table of measurements produced by the benchmark
//! harness, one row per (graph, implementation, thread count) run. Rows are
//! immutable once loaded; everything downstream only filters and reads them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or querying a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The input file could not be opened
    #[error("could not read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row failed to parse into a [`Measurement`]
    #[error("malformed record in {path}")]
    Parse {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// The graph has no `sequential` row to serve as the speedup divisor
    #[error("no sequential baseline for graph {0}")]
    MissingBaseline(String),

    /// The dataset holds no rows at all
    #[error("dataset is empty")]
    Empty,
}

/// Implementation variant under test
///
/// The benchmark harness emits these as lowercase strings in the `impl`
/// column; anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Implementation {
    Sequential,
    OpenMp,
    OpenCilk,
    Pthreads,
}

/// Parallel variants shown in the thread-scaling figures, in legend order.
pub const PARALLEL_IMPLEMENTATIONS: [Implementation; 3] = [
    Implementation::OpenMp,
    Implementation::OpenCilk,
    Implementation::Pthreads,
];

/// Every variant, in the order the comparison chart stacks its bars.
pub const ALL_IMPLEMENTATIONS: [Implementation; 4] = [
    Implementation::Sequential,
    Implementation::OpenMp,
    Implementation::OpenCilk,
    Implementation::Pthreads,
];

impl Implementation {
    /// Uppercase name used in chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Implementation::Sequential => "SEQUENTIAL",
            Implementation::OpenMp => "OPENMP",
            Implementation::OpenCilk => "OPENCILK",
            Implementation::Pthreads => "PTHREADS",
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Implementation::Sequential => "sequential",
            Implementation::OpenMp => "openmp",
            Implementation::OpenCilk => "opencilk",
            Implementation::Pthreads => "pthreads",
        })
    }
}

/// One benchmark measurement row
///
/// `vertices`, `edges`, `components` and `iterations` describe the run but
/// are not consumed by any chart. `threads` is nominal (typically 1) for
/// sequential rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub graph: String,
    pub vertices: u64,
    pub edges: u64,
    pub components: u64,
    #[serde(rename = "impl")]
    pub implementation: Implementation,
    pub threads: u32,
    pub time: f64,
    pub iterations: u64,
}

/// The loaded measurement table
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Measurement>,
}

impl Dataset {
    /// Load a dataset from a CSV file with a header row
    ///
    /// Column order is not significant; columns are matched by name. A
    /// header-only file yields an empty dataset.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: Measurement = row.map_err(|source| DatasetError::Parse {
                path: path.display().to_string(),
                source,
            })?;
            records.push(record);
        }

        Ok(Self { records })
    }

    /// Build a dataset from already-parsed rows
    pub fn from_records(records: Vec<Measurement>) -> Self {
        Self { records }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all rows in file order
    pub fn iter(&self) -> impl Iterator<Item = &Measurement> {
        self.records.iter()
    }

    /// Distinct graph names in first-appearance order
    pub fn graphs(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for record in &self.records {
            if !names.contains(&record.graph.as_str()) {
                names.push(record.graph.as_str());
            }
        }
        names
    }

    /// Graph used when the caller does not name one: the graph of the first
    /// row in the file. Deliberately order-dependent so the dataset's
    /// leading graph drives the single-graph figures.
    pub fn default_graph(&self) -> Result<&str, DatasetError> {
        self.records
            .first()
            .map(|record| record.graph.as_str())
            .ok_or(DatasetError::Empty)
    }

    /// All rows for one graph, in file order
    pub fn for_graph(&self, graph: &str) -> Vec<&Measurement> {
        self.records
            .iter()
            .filter(|record| record.graph == graph)
            .collect()
    }

    /// Rows matching both graph and implementation, sorted by ascending
    /// thread count (stable, so ties keep file order)
    pub fn select(&self, graph: &str, implementation: Implementation) -> Vec<&Measurement> {
        let mut rows: Vec<&Measurement> = self
            .records
            .iter()
            .filter(|record| record.graph == graph && record.implementation == implementation)
            .collect();
        rows.sort_by_key(|record| record.threads);
        rows
    }

    /// Largest thread count observed for a graph, across all variants
    pub fn max_threads(&self, graph: &str) -> Option<u32> {
        self.records
            .iter()
            .filter(|record| record.graph == graph)
            .map(|record| record.threads)
            .max()
    }

    /// The sequential time for a graph, used as the speedup divisor
    ///
    /// Takes the first sequential row if the file carries more than one.
    pub fn baseline_time(&self, graph: &str) -> Result<f64, DatasetError> {
        self.records
            .iter()
            .find(|record| {
                record.graph == graph && record.implementation == Implementation::Sequential
            })
            .map(|record| record.time)
            .ok_or_else(|| DatasetError::MissingBaseline(graph.to_string()))
    }
}
