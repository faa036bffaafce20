//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Every value can be overridden through an environment variable.

/// Default output file for the importance chart (relative to the working directory)
pub const DEFAULT_PLOT_OUTPUT: &str = "feature_importance.png";

/// Default number of features shown in the chart
pub const DEFAULT_TOP_N: usize = 5;

/// Default render resolution (dots per inch)
pub const DEFAULT_DPI: u32 = 300;

/// Default figure size in inches (width, height)
pub const DEFAULT_FIGURE_SIZE: (f64, f64) = (6.0, 4.0);

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Student Risk Analyzer";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get chart output path from environment or use default
pub fn get_plot_output() -> String {
    std::env::var("RISK_PLOT_OUTPUT")
        .unwrap_or_else(|_| DEFAULT_PLOT_OUTPUT.to_string())
}

/// Get number of charted features from environment or use default
pub fn get_top_n() -> usize {
    std::env::var("RISK_PLOT_TOP_N")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TOP_N)
}

/// Get render resolution from environment or use default
pub fn get_dpi() -> u32 {
    std::env::var("RISK_PLOT_DPI")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DPI)
}
