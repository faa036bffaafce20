//! Risk Types
//!
//! Input metrics, risk factors and the assessment result.
//! Only data structures and their text rendering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::logic::error::RiskResult;
use super::rules::{
    DEFAULT_ASSIGNMENT_COMPLETION, DEFAULT_ATTENDANCE, DEFAULT_STUDY_HOURS, DEFAULT_TEST_SCORE,
};

pub const LOW_RISK_MESSAGE: &str = "Risk Level: Low\n\
    Explanation: No major learning risks detected.\n\
    Student performance appears stable.\n";

const HIGH_RISK_PREFIX: &str = "Risk Level: High\nExplanation: ";
const HIGH_RISK_SUFFIX: &str = " are the primary contributors to the student's learning risk.";

// ============================================================================
// STUDENT METRICS
// ============================================================================

/// Metrics for one student. Missing fields fall back to non-risky defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentMetrics {
    #[serde(default)]
    pub attendance: Option<f64>,
    #[serde(default)]
    pub assignment_completion: Option<f64>,
    #[serde(default)]
    pub study_hours: Option<f64>,
    #[serde(default)]
    pub test_score: Option<f64>,
}

impl StudentMetrics {
    /// Build from a name -> value map; unrecognized keys are ignored
    pub fn from_map(map: &HashMap<String, f64>) -> Self {
        Self {
            attendance: map.get("attendance").copied(),
            assignment_completion: map.get("assignment_completion").copied(),
            study_hours: map.get("study_hours").copied(),
            test_score: map.get("test_score").copied(),
        }
    }

    /// Parse a JSON object such as `{"attendance": 80, "test_score": 48}`
    pub fn from_json(input: &str) -> RiskResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn attendance_or_default(&self) -> f64 {
        self.attendance.unwrap_or(DEFAULT_ATTENDANCE)
    }

    pub fn assignment_completion_or_default(&self) -> f64 {
        self.assignment_completion.unwrap_or(DEFAULT_ASSIGNMENT_COMPLETION)
    }

    pub fn study_hours_or_default(&self) -> f64 {
        self.study_hours.unwrap_or(DEFAULT_STUDY_HOURS)
    }

    pub fn test_score_or_default(&self) -> f64 {
        self.test_score.unwrap_or(DEFAULT_TEST_SCORE)
    }
}

// ============================================================================
// RISK FACTOR
// ============================================================================

/// One triggered threshold check. Declaration order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    LowAttendance,
    PoorAssignmentCompletion,
    InsufficientStudyHours,
    LowTestPerformance,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 4] = [
        RiskFactor::LowAttendance,
        RiskFactor::PoorAssignmentCompletion,
        RiskFactor::InsufficientStudyHours,
        RiskFactor::LowTestPerformance,
    ];

    pub fn flag_text(&self) -> &'static str {
        match self {
            RiskFactor::LowAttendance => "low attendance",
            RiskFactor::PoorAssignmentCompletion => "poor assignment completion",
            RiskFactor::InsufficientStudyHours => "insufficient study hours",
            RiskFactor::LowTestPerformance => "low test performance",
        }
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.flag_text())
    }
}

// ============================================================================
// RISK LEVEL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ASSESSMENT RESULT
// ============================================================================

/// Outcome of the rule checks: presence/absence only, no score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub factors: Vec<RiskFactor>,
}

impl RiskAssessment {
    pub fn from_factors(factors: Vec<RiskFactor>) -> Self {
        let level = if factors.is_empty() { RiskLevel::Low } else { RiskLevel::High };
        Self { level, factors }
    }

    pub fn is_high(&self) -> bool {
        self.level == RiskLevel::High
    }

    /// Human-readable explanation (fixed low-risk text or the high-risk template)
    pub fn explanation(&self) -> String {
        if self.factors.is_empty() {
            return LOW_RISK_MESSAGE.to_string();
        }

        let joined = self
            .factors
            .iter()
            .map(RiskFactor::flag_text)
            .collect::<Vec<_>>()
            .join(" and ");

        format!("{}{}{}", HIGH_RISK_PREFIX, capitalize(&joined), HIGH_RISK_SUFFIX)
    }
}

impl std::fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.explanation())
    }
}

/// First character upper-cased, the rest lower-cased
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
