//! Risk Rules & Thresholds
//!
//! Thresholds for each risk factor and the defaults used for missing metrics.
//! No evaluation logic here - only constants and config.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS (a metric strictly below its threshold is a risk)
// ============================================================================

/// Attendance percent below this = "low attendance"
pub const ATTENDANCE_MIN: f64 = 75.0;

/// Assignment completion percent below this = "poor assignment completion"
pub const ASSIGNMENT_COMPLETION_MIN: f64 = 60.0;

/// Weekly study hours below this = "insufficient study hours"
pub const STUDY_HOURS_MIN: f64 = 2.0;

/// Test score below this = "low test performance"
pub const TEST_SCORE_MIN: f64 = 40.0;

// ============================================================================
// DEFAULTS (used when a metric is missing - never trigger a flag)
// ============================================================================

pub const DEFAULT_ATTENDANCE: f64 = 100.0;
pub const DEFAULT_ASSIGNMENT_COMPLETION: f64 = 100.0;
pub const DEFAULT_STUDY_HOURS: f64 = 10.0;
pub const DEFAULT_TEST_SCORE: f64 = 100.0;

// ============================================================================
// CONFIGURABLE THRESHOLDS (for runtime adjustment)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub attendance_min: f64,
    pub assignment_completion_min: f64,
    pub study_hours_min: f64,
    pub test_score_min: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            attendance_min: ATTENDANCE_MIN,
            assignment_completion_min: ASSIGNMENT_COMPLETION_MIN,
            study_hours_min: STUDY_HOURS_MIN,
            test_score_min: TEST_SCORE_MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_clear_thresholds() {
        let t = RiskThresholds::default();
        assert!(DEFAULT_ATTENDANCE >= t.attendance_min);
        assert!(DEFAULT_ASSIGNMENT_COMPLETION >= t.assignment_completion_min);
        assert!(DEFAULT_STUDY_HOURS >= t.study_hours_min);
        assert!(DEFAULT_TEST_SCORE >= t.test_score_min);
    }
}
