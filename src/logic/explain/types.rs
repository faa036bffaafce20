use serde::{Deserialize, Serialize};

/// One (feature, importance) row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

impl FeatureImportance {
    pub fn new(feature: impl Into<String>, importance: f64) -> Self {
        Self {
            feature: feature.into(),
            importance,
        }
    }
}

/// Rows sorted by importance DESC (see `engine::rank`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportanceTable {
    rows: Vec<FeatureImportance>,
}

impl ImportanceTable {
    /// Caller guarantees `rows` are already ranked
    pub(crate) fn from_ranked(rows: Vec<FeatureImportance>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[FeatureImportance] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureImportance> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows; asking past the end returns every row
    pub fn head(&self, n: usize) -> &[FeatureImportance] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Non-increasing importances with any NaN rows at the end
    pub fn is_sorted_desc(&self) -> bool {
        self.rows.windows(2).all(|pair| {
            let (a, b) = (pair[0].importance, pair[1].importance);
            !(a < b) && !(a.is_nan() && !b.is_nan())
        })
    }
}

impl<'a> IntoIterator for &'a ImportanceTable {
    type Item = &'a FeatureImportance;
    type IntoIter = std::slice::Iter<'a, FeatureImportance>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl std::fmt::Display for ImportanceTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|row| row.feature.chars().count())
            .max()
            .unwrap_or(0)
            .max("Feature".len());

        writeln!(f, "{:<width$}  {:>10}", "Feature", "Importance", width = width)?;
        for row in &self.rows {
            writeln!(f, "{:<width$}  {:>10.3}", row.feature, row.importance, width = width)?;
        }
        Ok(())
    }
}
