//! Cross-graph comparison bar chart (figure 4)

use super::{implementation_color, AXIS_DESC_FONT, CAPTION_FONT, COMPARISON_SIZE, LABEL_FONT};
use crate::dataset::{Dataset, Implementation, ALL_IMPLEMENTATIONS};
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

const BAR_WIDTH: f64 = 0.2;

/// One cluster per graph: the measured time for each of the four variants,
/// in [`ALL_IMPLEMENTATIONS`] order. Parallel variants are pinned to the
/// configured comparison thread count; the sequential row is taken as-is.
/// A missing combination contributes 0.0 so every cluster keeps four bars.
pub(crate) fn comparison_matrix(
    dataset: &Dataset,
    comparison_threads: u32,
) -> Vec<(String, [f64; 4])> {
    dataset
        .graphs()
        .into_iter()
        .map(|graph| {
            let mut times = [0.0f64; 4];
            for (i, implementation) in ALL_IMPLEMENTATIONS.into_iter().enumerate() {
                let rows = dataset.select(graph, implementation);
                let row = if implementation == Implementation::Sequential {
                    rows.first().copied()
                } else {
                    rows.into_iter()
                        .find(|record| record.threads == comparison_threads)
                };
                times[i] = row.map(|record| record.time).unwrap_or(0.0);
            }
            (graph.to_string(), times)
        })
        .collect()
}

fn cluster_label(clusters: &[(String, [f64; 4])], x: f64) -> String {
    let nearest = x.round();
    if (x - nearest).abs() < 0.25 && nearest >= 0.0 && (nearest as usize) < clusters.len() {
        clusters[nearest as usize].0.clone()
    } else {
        String::new()
    }
}

pub struct ComparisonPlotter;

impl ComparisonPlotter {
    /// Plot execution times for every graph in the table, one cluster of
    /// four bars per graph.
    pub fn plot(dataset: &Dataset, comparison_threads: u32, path: &Path) -> Result<()> {
        let clusters = comparison_matrix(dataset, comparison_threads);
        if clusters.is_empty() {
            anyhow::bail!("no data to compare");
        }

        let max_time = clusters
            .iter()
            .flat_map(|(_, times)| times.iter().copied())
            .fold(0.0, f64::max);
        if max_time <= 0.0 {
            anyhow::bail!("no measurements to compare at {comparison_threads} threads");
        }

        let root = BitMapBackend::new(path, COMPARISON_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let cluster_count = clusters.len() as f64;
        let mut chart = ChartBuilder::on(&root)
            .caption("Performance Comparison Across Test Cases", CAPTION_FONT)
            .margin(30)
            .x_label_area_size(100)
            .y_label_area_size(120)
            .build_cartesian_2d(-0.5f64..(cluster_count - 0.5), 0f64..(max_time * 1.1))?;

        chart
            .configure_mesh()
            .x_desc("Test Graph")
            .y_desc("Execution Time (seconds)")
            .label_style(LABEL_FONT)
            .axis_desc_style(AXIS_DESC_FONT)
            .x_labels(clusters.len())
            .x_label_formatter(&|x| cluster_label(&clusters, *x))
            .y_label_formatter(&|y| format!("{y:.2}"))
            .disable_x_mesh()
            .draw()?;

        for (i, implementation) in ALL_IMPLEMENTATIONS.into_iter().enumerate() {
            let color = implementation_color(implementation);
            chart
                .draw_series(clusters.iter().enumerate().map(|(cluster, (_, times))| {
                    // Four bars centered on the cluster's integer position.
                    let x0 = cluster as f64 + (i as f64 - 2.0) * BAR_WIDTH;
                    Rectangle::new(
                        [(x0, 0.0), (x0 + BAR_WIDTH, times[i])],
                        color.mix(0.8).filled(),
                    )
                }))?
                .label(implementation.label())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 10), (x + 30, y + 10)], color.mix(0.8).filled())
                });
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(LABEL_FONT)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Measurement;

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
    fn test_every_cluster_has_four_bars() {
        // g2 only has an openmp row; the other three bars must be zero,
        // not absent.
        let dataset = Dataset::from_records(vec![
            measurement("g1", Implementation::Sequential, 1, 10.0),
            measurement("g1", Implementation::OpenMp, 4, 2.5),
            measurement("g1", Implementation::OpenCilk, 4, 2.8),
            measurement("g1", Implementation::Pthreads, 4, 3.0),
            measurement("g2", Implementation::OpenMp, 4, 1.0),
        ]);

        let clusters = comparison_matrix(&dataset, 4);
        assert_eq!(clusters.len(), 2);

        let (graph, times) = &clusters[0];
        assert_eq!(graph, "g1");
        assert_eq!(*times, [10.0, 2.5, 2.8, 3.0]);

        let (graph, times) = &clusters[1];
        assert_eq!(graph, "g2");
        assert_eq!(*times, [0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_parallel_bars_pinned_to_comparison_threads() {
        let dataset = Dataset::from_records(vec![
            measurement("g1", Implementation::OpenMp, 2, 5.0),
            measurement("g1", Implementation::OpenMp, 4, 2.5),
            measurement("g1", Implementation::OpenMp, 8, 1.5),
        ]);

        let clusters = comparison_matrix(&dataset, 4);
        assert_eq!(clusters[0].1[1], 2.5);

        let clusters = comparison_matrix(&dataset, 8);
        assert_eq!(clusters[0].1[1], 1.5);

        // No run at the requested thread count: zero bar.
        let clusters = comparison_matrix(&dataset, 16);
        assert_eq!(clusters[0].1[1], 0.0);
    }

    #[test]
    fn test_sequential_bar_ignores_thread_count() {
        let dataset = Dataset::from_records(vec![measurement(
            "g1",
            Implementation::Sequential,
            1,
            10.0,
        )]);

        let clusters = comparison_matrix(&dataset, 4);
        assert_eq!(clusters[0].1[0], 10.0);
    }

    #[test]
    fn test_cluster_label_snaps_to_integers() {
        let clusters = vec![
            ("g1".to_string(), [0.0; 4]),
            ("g2".to_string(), [0.0; 4]),
        ];

        assert_eq!(cluster_label(&clusters, 0.0), "g1");
        assert_eq!(cluster_label(&clusters, 1.1), "g2");
        assert_eq!(cluster_label(&clusters, 0.5), "");
        assert_eq!(cluster_label(&clusters, 2.0), "");
        assert_eq!(cluster_label(&clusters, -1.0), "");
    }
}
