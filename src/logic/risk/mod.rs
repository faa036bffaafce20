//! Risk Module
//!
//! Rule-based learning risk analysis from a handful of student metrics.
//!
//! ## Structure
//! - `types`: StudentMetrics, RiskFactor, RiskLevel, RiskAssessment
//! - `rules`: Thresholds and missing-metric defaults
//! - `assessor`: Rule evaluation
//!
//! ## Usage
//! ```ignore
//! use student_risk_core::logic::risk::{assess, StudentMetrics};
//!
//! let result = assess(&metrics);
//! println!("{}", result.explanation());
//! ```

pub mod types;
pub mod rules;
pub mod assessor;

pub use types::{RiskAssessment, RiskFactor, RiskLevel, StudentMetrics, LOW_RISK_MESSAGE};

pub use rules::{
    RiskThresholds,
    ASSIGNMENT_COMPLETION_MIN,
    ATTENDANCE_MIN,
    STUDY_HOURS_MIN,
    TEST_SCORE_MIN,
};

pub use assessor::{assess, assess_with_thresholds, rule_based_risk_analysis};
