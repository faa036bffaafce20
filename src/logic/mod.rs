//! Logic Module - Business Logic & Engines
//!
//! ## Structure
//! - `risk/` - Threshold rules and the templated risk explanation
//! - `explain/` - Feature importance extraction from an external model
//! - `plot/` - Importance chart (pure layout + plotters rendering)
//! - `analyzer` - `RiskAnalyzer` facade over the three engines

pub mod analyzer;
pub mod config;
pub mod error;
pub mod explain;
pub mod plot;
pub mod risk;

#[cfg(test)]
mod tests;

// Re-export common types
pub use analyzer::RiskAnalyzer;
pub use config::PlotConfig;
pub use error::{RiskError, RiskResult};
pub use explain::{FeatureImportance, FixedImportances, ImportanceSource, ImportanceTable};
pub use risk::{RiskAssessment, RiskFactor, RiskLevel, StudentMetrics};
