//! Figure rendering
//!
//! Each plotter writes one PNG with a fixed name. The figures are rendered
//! at 300-dpi geometry (10x6 in for the scaling figures, 12x6 in for the
//! comparison chart) and silently overwrite any previous file.

pub mod comparison;
pub mod efficiency;
pub mod speedup;
pub mod timing;

pub use comparison::ComparisonPlotter;
pub use efficiency::EfficiencyPlotter;
pub use speedup::SpeedupPlotter;
pub use timing::TimePlotter;

use crate::dataset::Implementation;
use plotters::prelude::{BLUE, GREEN, MAGENTA, RED};
use plotters::style::RGBColor;

/// Fixed output file names
pub const SPEEDUP_FIGURE: &str = "figure1_speedup_vs_threads.png";
pub const TIME_FIGURE: &str = "figure2_time_vs_threads.png";
pub const EFFICIENCY_FIGURE: &str = "figure3_efficiency_vs_threads.png";
pub const COMPARISON_FIGURE: &str = "figure4_comparison_bar_chart.png";

/// 10x6 inches at 300 dpi
pub(crate) const FIGURE_SIZE: (u32, u32) = (3000, 1800);
/// 12x6 inches at 300 dpi
pub(crate) const COMPARISON_SIZE: (u32, u32) = (3600, 1800);

pub(crate) const CAPTION_FONT: (&str, u32) = ("sans-serif", 60);
pub(crate) const LABEL_FONT: (&str, u32) = ("sans-serif", 30);
pub(crate) const AXIS_DESC_FONT: (&str, u32) = ("sans-serif", 36);

/// Fixed per-variant series color, shared by all four figures
pub(crate) fn implementation_color(implementation: Implementation) -> RGBColor {
    match implementation {
        Implementation::Sequential => MAGENTA,
        Implementation::OpenMp => BLUE,
        Implementation::OpenCilk => GREEN,
        Implementation::Pthreads => RED,
    }
}
