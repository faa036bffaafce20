//! Risk Analyzer
//!
//! Facade over the risk, explain and plot engines. Holds only the feature
//! names used as labels; every call is stateless.

use std::path::PathBuf;

use super::config::PlotConfig;
use super::error::RiskResult;
use super::explain::{self, ImportanceSource, ImportanceTable};
use super::plot;
use super::risk::{self, RiskAssessment, StudentMetrics};

#[derive(Debug, Clone, PartialEq)]
pub struct RiskAnalyzer {
    feature_names: Vec<String>,
}

impl RiskAnalyzer {
    pub fn new(feature_names: Vec<String>) -> Self {
        Self { feature_names }
    }

    pub fn from_names(names: &[&str]) -> Self {
        Self::new(names.iter().map(|s| s.to_string()).collect())
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Ranked (feature, importance) table from an external model
    pub fn get_feature_importance<M>(&self, model: &M) -> ImportanceTable
    where
        M: ImportanceSource + ?Sized,
    {
        explain::get_feature_importance(&self.feature_names, model)
    }

    /// Structured result of the threshold checks
    pub fn assess(&self, metrics: &StudentMetrics) -> RiskAssessment {
        risk::assess(metrics)
    }

    /// Human-readable risk explanation
    pub fn rule_based_risk_analysis(&self, metrics: &StudentMetrics) -> String {
        risk::rule_based_risk_analysis(metrics)
    }

    /// Chart the top `top_n` rows into the default output file
    pub fn plot_importance(&self, table: &ImportanceTable, top_n: usize) -> RiskResult<PathBuf> {
        self.plot_importance_with(table, &PlotConfig::default().with_top_n(top_n))
    }

    pub fn plot_importance_with(
        &self,
        table: &ImportanceTable,
        config: &PlotConfig,
    ) -> RiskResult<PathBuf> {
        plot::plot_importance(table, config)
    }
}

impl From<Vec<String>> for RiskAnalyzer {
    fn from(feature_names: Vec<String>) -> Self {
        Self::new(feature_names)
    }
}
