//! Student Risk Analyzer - Core Library
//!
//! Turns a handful of student metrics into a readable risk explanation and
//! charts the feature importances reported by an externally trained model.

pub mod constants;
pub mod logic;

pub use logic::{
    FeatureImportance, FixedImportances, ImportanceSource, ImportanceTable, PlotConfig,
    RiskAnalyzer, RiskAssessment, RiskError, RiskFactor, RiskLevel, RiskResult, StudentMetrics,
};
