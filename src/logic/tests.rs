//! Integration Tests for the Risk Analyzer
//!
//! Tests the engines working together through the `RiskAnalyzer` facade.

#[cfg(test)]
mod integration_tests {
    use std::collections::HashMap;

    use crate::logic::{
        plot::ImportanceChart,
        risk::LOW_RISK_MESSAGE,
        FixedImportances, PlotConfig, RiskAnalyzer, RiskError, RiskLevel, StudentMetrics,
    };

    fn analyzer() -> RiskAnalyzer {
        RiskAnalyzer::from_names(&[
            "attendance",
            "study_hours",
            "assignment_completion",
            "test_score",
            "participation",
        ])
    }

    /// Sample student from the demo: every metric clears its threshold
    #[test]
    fn test_demo_student_is_low_risk() {
        let metrics = StudentMetrics::from_json(
            r#"{"attendance": 80, "assignment_completion": 82, "study_hours": 2.5, "test_score": 48}"#,
        )
        .unwrap();

        assert_eq!(analyzer().rule_based_risk_analysis(&metrics), LOW_RISK_MESSAGE);
    }

    #[test]
    fn test_map_input_with_defaults() {
        let map = HashMap::from([
            ("attendance".to_string(), 60.0),
            ("test_score".to_string(), 30.0),
        ]);
        let metrics = StudentMetrics::from_map(&map);
        let assessment = analyzer().assess(&metrics);

        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(
            analyzer().rule_based_risk_analysis(&metrics),
            assessment.explanation()
        );
        assert!(assessment
            .explanation()
            .contains("Low attendance and low test performance are"));
    }

    #[test]
    fn test_importance_to_chart_pipeline() {
        let analyzer = analyzer();
        let model = FixedImportances(vec![0.05, 0.25, 0.20, 0.15, 0.35]);
        let table = analyzer.get_feature_importance(&model);

        assert!(table.is_sorted_desc());
        assert_eq!(table.rows()[0].feature, "participation");

        let chart = ImportanceChart::from_table(&table, 3).unwrap();
        let labels: Vec<&str> = chart.bars().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["participation", "study_hours", "assignment_completion"]);
        assert_eq!(chart.label_for_slot(2), Some("participation"));
    }

    /// Both output formats through the facade, top_n past the table length
    #[test]
    fn test_plot_writes_png_and_svg() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = analyzer();
        let table = analyzer.get_feature_importance(&vec![0.35, 0.25, 0.20, 0.15, 0.05]);

        for name in ["importance.png", "importance.svg"] {
            let output = dir.path().join(name);
            let config = PlotConfig {
                dpi: 72,
                ..PlotConfig::default().with_output(&output).with_top_n(10)
            };

            let path = analyzer.plot_importance_with(&table, &config).unwrap();
            assert_eq!(path, output);
            assert!(std::fs::metadata(&path).unwrap().len() > 0, "{} is empty", name);
        }
    }

    #[test]
    fn test_plot_rejects_zero_top_n_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("feature_importance.png");
        let analyzer = analyzer();
        let table = analyzer.get_feature_importance(&vec![0.35, 0.25, 0.20, 0.15, 0.05]);

        let config = PlotConfig::default().with_output(&output).with_top_n(0);
        let result = analyzer.plot_importance_with(&table, &config);

        assert!(matches!(result, Err(RiskError::EmptyChart)));
        assert!(!output.exists());
    }

    #[test]
    fn test_feature_names_are_fixed_labels() {
        let analyzer = analyzer();
        assert_eq!(analyzer.feature_names().len(), 5);

        // Extra importances beyond the label list are dropped
        let table = analyzer.get_feature_importance(&vec![0.1, 0.1, 0.1, 0.1, 0.1, 0.5]);
        assert_eq!(table.len(), 5);
        assert!(table.iter().all(|row| row.importance == 0.1));
    }
}
