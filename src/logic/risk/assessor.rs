//! Risk Assessor
//!
//! Evaluation logic only - no types, no thresholds.
//! Input: StudentMetrics
//! Output: RiskAssessment / explanation text

use super::rules::RiskThresholds;
use super::types::{RiskAssessment, RiskFactor, StudentMetrics};

/// Run every rule against the default thresholds
pub fn assess(metrics: &StudentMetrics) -> RiskAssessment {
    assess_with_thresholds(metrics, &RiskThresholds::default())
}

/// Run every rule; checks are independent and never short-circuit
pub fn assess_with_thresholds(
    metrics: &StudentMetrics,
    thresholds: &RiskThresholds,
) -> RiskAssessment {
    let checks = [
        (
            RiskFactor::LowAttendance,
            metrics.attendance_or_default() < thresholds.attendance_min,
        ),
        (
            RiskFactor::PoorAssignmentCompletion,
            metrics.assignment_completion_or_default() < thresholds.assignment_completion_min,
        ),
        (
            RiskFactor::InsufficientStudyHours,
            metrics.study_hours_or_default() < thresholds.study_hours_min,
        ),
        (
            RiskFactor::LowTestPerformance,
            metrics.test_score_or_default() < thresholds.test_score_min,
        ),
    ];

    let factors: Vec<RiskFactor> = checks
        .into_iter()
        .filter(|(_, triggered)| *triggered)
        .map(|(factor, _)| factor)
        .collect();

    for factor in &factors {
        log::debug!("Risk factor triggered: {}", factor);
    }

    RiskAssessment::from_factors(factors)
}

/// Human-readable explanation for a student's metrics
pub fn rule_based_risk_analysis(metrics: &StudentMetrics) -> String {
    assess(metrics).explanation()
}

// ============================================================================
// TESTS
// ============================================================================
