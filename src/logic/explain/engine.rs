use std::cmp::Ordering;

use super::types::{FeatureImportance, ImportanceTable};

// ============================================================================
// IMPORTANCE SOURCE (external trained model)
// ============================================================================

/// Anything that can report per-feature importances, ordered like the
/// analyzer's feature names (e.g. a tree ensemble's impurity importances).
pub trait ImportanceSource {
    fn feature_importances(&self) -> &[f64];
}

/// Importances supplied directly, e.g. exported from a training run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedImportances(pub Vec<f64>);

impl ImportanceSource for FixedImportances {
    fn feature_importances(&self) -> &[f64] {
        &self.0
    }
}

impl ImportanceSource for Vec<f64> {
    fn feature_importances(&self) -> &[f64] {
        self
    }
}

impl ImportanceSource for [f64] {
    fn feature_importances(&self) -> &[f64] {
        self
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Pair names with the model's importances and rank them DESC.
///
/// Pairing stops at the shorter of the two inputs.
pub fn get_feature_importance<M>(feature_names: &[String], model: &M) -> ImportanceTable
where
    M: ImportanceSource + ?Sized,
{
    let importances = model.feature_importances();

    if importances.len() != feature_names.len() {
        log::warn!(
            "Importance vector has {} values for {} feature names; truncating to {}",
            importances.len(),
            feature_names.len(),
            importances.len().min(feature_names.len())
        );
    }

    let rows = feature_names
        .iter()
        .zip(importances.iter())
        .map(|(name, &importance)| FeatureImportance::new(name.clone(), importance))
        .collect();

    rank(rows)
}

/// Stable sort by importance DESC, NaN rows last
pub fn rank(mut rows: Vec<FeatureImportance>) -> ImportanceTable {
    rows.sort_by(|a, b| compare_desc(a.importance, b.importance));
    ImportanceTable::from_ranked(rows)
}

/// Total order: finite/infinite values DESC, then NaN. `-0.0 == 0.0` keeps input order.
fn compare_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    }
}
