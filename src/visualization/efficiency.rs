//! Parallel efficiency vs thread count (figure 3)

use super::{implementation_color, AXIS_DESC_FONT, CAPTION_FONT, FIGURE_SIZE, LABEL_FONT};
use crate::dataset::{Dataset, PARALLEL_IMPLEMENTATIONS};
use crate::metrics;
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// Display range of the vertical axis. Efficiency is expected in [0, 1];
/// the headroom keeps mildly superlinear points visible.
const EFFICIENCY_RANGE: (f64, f64) = (0.0, 1.2);

pub struct EfficiencyPlotter;

impl EfficiencyPlotter {
    /// Plot parallel efficiency (speedup / threads) against thread count
    /// for every parallel variant of one graph, with a dashed reference
    /// line at perfect efficiency.
    pub fn plot(dataset: &Dataset, graph: &str, path: &Path) -> Result<()> {
        if dataset.for_graph(graph).is_empty() {
            anyhow::bail!("no data for graph {graph}");
        }

        let baseline = dataset.baseline_time(graph)?;

        let mut series = Vec::new();
        for implementation in PARALLEL_IMPLEMENTATIONS {
            let points = metrics::scaling_series(dataset, graph, implementation, baseline)?;
            if !points.is_empty() {
                series.push((implementation, points));
            }
        }
        if series.is_empty() {
            anyhow::bail!("no parallel measurements for graph {graph}");
        }

        let max_threads = dataset.max_threads(graph).unwrap_or(1).max(1);
        let x_max = f64::from(max_threads) * 1.05;

        let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Efficiency vs Thread Count (Graph: {graph})"),
                CAPTION_FONT,
            )
            .margin(30)
            .x_label_area_size(100)
            .y_label_area_size(120)
            .build_cartesian_2d(0f64..x_max, EFFICIENCY_RANGE.0..EFFICIENCY_RANGE.1)?;

        chart
            .configure_mesh()
            .x_desc("Number of Threads")
            .y_desc("Efficiency (Speedup/Threads)")
            .label_style(LABEL_FONT)
            .axis_desc_style(AXIS_DESC_FONT)
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|y| format!("{y:.1}"))
            .draw()?;

        for (implementation, points) in &series {
            let color = implementation_color(*implementation);
            chart
                .draw_series(LineSeries::new(
                    points.iter().map(|p| (f64::from(p.threads), p.efficiency)),
                    color.stroke_width(4),
                ))?
                .label(implementation.label())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 40, y)], color.stroke_width(4))
                });

            chart.draw_series(points.iter().map(|p| {
                Circle::new((f64::from(p.threads), p.efficiency), 8, color.filled())
            }))?;
        }

        // Perfect efficiency reference
        chart
            .draw_series(DashedLineSeries::new(
                vec![(0.0, 1.0), (x_max, 1.0)],
                12,
                8,
                BLACK.stroke_width(4),
            ))?
            .label("Perfect Efficiency")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], BLACK.stroke_width(4)));

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
