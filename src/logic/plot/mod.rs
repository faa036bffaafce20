//! Plot Module - Importance Chart
//!
//! - `chart`: pure layout (top-N rows, colors, labels)
//! - `render`: plotters drawing + file output
//! - `colormap`: RdYlGn diverging colormap

pub mod colormap;
pub mod chart;
pub mod render;

use std::path::PathBuf;

use crate::logic::config::PlotConfig;
use crate::logic::error::RiskResult;
use crate::logic::explain::ImportanceTable;

pub use chart::{format_percent, ChartBar, ImportanceChart};
pub use render::save;

/// Chart the first `config.top_n` rows and write the image; returns the written path
pub fn plot_importance(table: &ImportanceTable, config: &PlotConfig) -> RiskResult<PathBuf> {
    let chart = ImportanceChart::from_table(table, config.top_n)?;
    save(&chart, config)
}
