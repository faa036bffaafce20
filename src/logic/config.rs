//! Plot Configuration
//!
//! Output destination and figure geometry for the importance chart.
//! Built from defaults or from environment variables (see `constants`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;
use super::error::{RiskError, RiskResult};

// ============================================================================
// PLOT CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Destination file; `.svg` selects the SVG backend, anything else PNG
    pub output_path: PathBuf,
    /// Number of rows charted
    pub top_n: usize,
    /// Figure width in inches
    pub width_in: f64,
    /// Figure height in inches
    pub height_in: f64,
    /// Dots per inch
    pub dpi: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        let (width_in, height_in) = constants::DEFAULT_FIGURE_SIZE;
        Self {
            output_path: PathBuf::from(constants::DEFAULT_PLOT_OUTPUT),
            top_n: constants::DEFAULT_TOP_N,
            width_in,
            height_in,
            dpi: constants::DEFAULT_DPI,
        }
    }
}

impl PlotConfig {
    /// Load overrides from environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            output_path: PathBuf::from(constants::get_plot_output()),
            top_n: constants::get_top_n(),
            dpi: constants::get_dpi(),
            ..Default::default()
        }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Canvas size in pixels (inches * dpi)
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }

    /// Point-to-pixel factor for fonts and strokes
    pub fn scale(&self) -> f64 {
        self.dpi as f64 / 72.0
    }

    pub fn is_svg(&self) -> bool {
        self.output_path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("svg"))
            .unwrap_or(false)
    }

    pub fn validate(&self) -> RiskResult<()> {
        if self.dpi == 0 {
            return Err(RiskError::InvalidConfig("dpi must be > 0".to_string()));
        }
        if !(self.width_in > 0.0 && self.height_in > 0.0) {
            return Err(RiskError::InvalidConfig(format!(
                "figure size must be positive, got {}x{} in",
                self.width_in, self.height_in
            )));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(RiskError::InvalidConfig("output path is empty".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
