//! Raw execution time vs thread count (figure 2)

use super::{implementation_color, AXIS_DESC_FONT, CAPTION_FONT, FIGURE_SIZE, LABEL_FONT};
use crate::dataset::{Dataset, PARALLEL_IMPLEMENTATIONS};
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

pub struct TimePlotter;

impl TimePlotter {
    /// Plot measured time against thread count for every parallel variant
    /// of one graph. No baseline is needed, so this figure renders even for
    /// graphs without a sequential row.
    pub fn plot(dataset: &Dataset, graph: &str, path: &Path) -> Result<()> {
        if dataset.for_graph(graph).is_empty() {
            anyhow::bail!("no data for graph {graph}");
        }

        let mut series: Vec<(_, Vec<(f64, f64)>)> = Vec::new();
        for implementation in PARALLEL_IMPLEMENTATIONS {
            let rows = dataset.select(graph, implementation);
            if rows.is_empty() {
                continue;
            }
            let points = rows
                .iter()
                .map(|record| (f64::from(record.threads), record.time))
                .collect();
            series.push((implementation, points));
        }
        if series.is_empty() {
            anyhow::bail!("no parallel measurements for graph {graph}");
        }

        let max_threads = series
            .iter()
            .flat_map(|(_, points)| points.iter().map(|(threads, _)| *threads))
            .fold(1.0, f64::max);
        let max_time = series
            .iter()
            .flat_map(|(_, points)| points.iter().map(|(_, time)| *time))
            .fold(0.0, f64::max);

        let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Execution Time vs Thread Count (Graph: {graph})"),
                CAPTION_FONT,
            )
            .margin(30)
            .x_label_area_size(100)
            .y_label_area_size(120)
            .build_cartesian_2d(0f64..(max_threads * 1.05), 0f64..(max_time * 1.1))?;

        chart
            .configure_mesh()
            .x_desc("Number of Threads")
            .y_desc("Execution Time (seconds)")
            .label_style(LABEL_FONT)
            .axis_desc_style(AXIS_DESC_FONT)
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|y| format!("{y:.2}"))
            .draw()?;

        for (implementation, points) in &series {
            let color = implementation_color(*implementation);
            chart
                .draw_series(LineSeries::new(points.clone(), color.stroke_width(4)))?
                .label(implementation.label())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 40, y)], color.stroke_width(4))
                });

            chart.draw_series(
                points
                    .iter()
                    .map(|point| Circle::new(*point, 8, color.filled())),
            )?;
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
