//! CSV export of the derived scaling table

use crate::dataset::Dataset;
use crate::metrics;
use anyhow::Result;
use csv::Writer;
use std::fs::File;
use std::path::Path;

pub struct CsvExporter;

impl CsvExporter {
    /// Export every measurement row extended with its derived speedup and
    /// efficiency. Rows of graphs without a sequential baseline get blank
    /// derived columns.
    pub fn export(dataset: &Dataset, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut wtr = Writer::from_writer(file);

        wtr.write_record([
            "graph",
            "impl",
            "threads",
            "time",
            "speedup",
            "efficiency",
        ])?;

        for record in dataset.iter() {
            let (speedup, efficiency) = match dataset.baseline_time(&record.graph) {
                Ok(baseline) => {
                    let speedup = metrics::speedup(baseline, record.time)?;
                    let efficiency = metrics::efficiency(speedup, record.threads)?;
                    (format!("{speedup:.4}"), format!("{efficiency:.4}"))
                }
                Err(_) => (String::new(), String::new()),
            };

            wtr.write_record([
                record.graph.clone(),
                record.implementation.to_string(),
                record.threads.to_string(),
                record.time.to_string(),
                speedup,
                efficiency,
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Implementation, Measurement};
    use tempfile::tempdir;

    fn measurement(graph: &str, implementation: Implementation, threads: u32, time: f64) -> Measurement {
        Measurement {
            graph: graph.to_string(),
            vertices: 1000,
            edges: 5000,
            components: 3,
            implementation,
            threads,
            time,
            iterations: 10,
        }
    }

    #[test]
    fn test_export_derived_columns() {
        let dataset = Dataset::from_records(vec![
            measurement("g1", Implementation::Sequential, 1, 10.0),
            measurement("g1", Implementation::OpenMp, 4, 2.5),
            measurement("orphan", Implementation::OpenMp, 4, 1.0),
        ]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaling_metrics.csv");
        CsvExporter::export(&dataset, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "graph,impl,threads,time,speedup,efficiency");
        assert_eq!(lines[1], "g1,sequential,1,10,1.0000,1.0000");
        assert_eq!(lines[2], "g1,openmp,4,2.5,4.0000,1.0000");
        // No baseline for "orphan": derived columns stay blank.
        assert_eq!(lines[3], "orphan,openmp,4,1,,");
    }
}
