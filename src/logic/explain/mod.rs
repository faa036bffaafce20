//! Explain Module - Feature Importance
//!
//! Reformats an external model's importance vector into a ranked table.
//! No inference here; the model is a black box behind `ImportanceSource`.

pub mod types;
pub mod engine;

pub use types::{FeatureImportance, ImportanceTable};
pub use engine::{get_feature_importance, rank, FixedImportances, ImportanceSource};
