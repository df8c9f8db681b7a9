//! JSON export of per-graph scaling summaries

use crate::dataset::{Dataset, PARALLEL_IMPLEMENTATIONS};
use crate::metrics;
use anyhow::Result;
use serde_json::json;
use std::fs::File;
use std::path::Path;

pub struct JsonExporter;

impl JsonExporter {
    /// Export the baseline time and per-variant scaling points for every
    /// graph. Graphs without a sequential baseline carry a null baseline
    /// and empty point lists.
    pub fn export(dataset: &Dataset, path: &Path) -> Result<()> {
        let mut graphs = Vec::new();
        for graph in dataset.graphs() {
            let baseline = dataset.baseline_time(graph).ok();

            let mut implementations = Vec::new();
            for implementation in PARALLEL_IMPLEMENTATIONS {
                let points = match baseline {
                    Some(baseline) => {
                        metrics::scaling_series(dataset, graph, implementation, baseline)?
                    }
                    None => Vec::new(),
                };
                implementations.push(json!({
                    "impl": implementation.to_string(),
                    "points": points,
                }));
            }

            graphs.push(json!({
                "graph": graph,
                "baseline_time": baseline,
                "implementations": implementations,
            }));
        }

        let output = json!({
            "measurements": dataset.len(),
            "graphs": graphs,
        });

        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &output)?;
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
    fn test_export_summary() {
        let dataset = Dataset::from_records(vec![
            measurement("g1", Implementation::Sequential, 1, 10.0),
            measurement("g1", Implementation::OpenMp, 2, 5.0),
            measurement("g1", Implementation::OpenMp, 4, 2.5),
            measurement("orphan", Implementation::OpenMp, 4, 1.0),
        ]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaling_summary.json");
        JsonExporter::export(&dataset, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["measurements"], 4);
        assert_eq!(value["graphs"].as_array().unwrap().len(), 2);

        let g1 = &value["graphs"][0];
        assert_eq!(g1["graph"], "g1");
        assert_eq!(g1["baseline_time"], 10.0);
        let openmp = &g1["implementations"][0];
        assert_eq!(openmp["impl"], "openmp");
        assert_eq!(openmp["points"].as_array().unwrap().len(), 2);
        assert_eq!(openmp["points"][1]["speedup"], 4.0);

        let orphan = &value["graphs"][1];
        assert!(orphan["baseline_time"].is_null());
        assert_eq!(orphan["implementations"][0]["points"].as_array().unwrap().len(), 0);
    }
}
