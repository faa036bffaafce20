//! Student Risk Analyzer - Demo Entry Point
//!
//! Walks through rule-based analysis, importance extraction and chart output
//! for a sample student and a sample importance vector.

use std::process::ExitCode;

use student_risk_core::constants::{APP_NAME, APP_VERSION};
use student_risk_core::{FixedImportances, PlotConfig, RiskAnalyzer, RiskResult, StudentMetrics};

const RULE: &str = "============================================================";

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> RiskResult<()> {
    let sample_student = StudentMetrics {
        attendance: Some(80.0),
        assignment_completion: Some(82.0),
        study_hours: Some(2.5),
        test_score: Some(48.0),
    };

    let analyzer = RiskAnalyzer::from_names(&[
        "attendance",
        "study_hours",
        "assignment_completion",
        "test_score",
        "participation",
    ]);

    println!("STUDENT RISK ANALYZER");
    println!("{}", RULE);

    println!("\n1. RULE-BASED RISK ANALYSIS:");
    println!("{}", analyzer.rule_based_risk_analysis(&sample_student));
    println!("\n{}", RULE);

    // Stand-in for a trained random forest's importances
    let model = FixedImportances(vec![0.35, 0.25, 0.20, 0.15, 0.05]);
    let table = analyzer.get_feature_importance(&model);

    println!("\n2. FEATURE IMPORTANCE (Model Output):");
    print!("{}", table);
    println!("\n{}", RULE);

    println!("3. GENERATING VISUALIZATION...");
    let config = PlotConfig::from_env();
    let path = analyzer.plot_importance_with(&table, &config)?;
    println!("{} saved", path.display());

    Ok(())
}
