//! Importance Chart Layout
//!
//! Pure step: decides what gets drawn (rows, colors, labels, axis range)
//! without touching a backend. `render` turns it into pixels.

use plotters::style::RGBColor;

use crate::logic::error::{RiskError, RiskResult};
use crate::logic::explain::ImportanceTable;
use super::colormap::rd_yl_gn_r;

pub const CHART_TITLE: &str = "Top Student Risk Factors";
pub const X_AXIS_LABEL: &str = "Importance (%)";

/// Gap between a bar's end and its percentage label (data units)
pub const LABEL_OFFSET: f64 = 0.01;

/// Extra room right of the longest bar for its label (data units)
const X_HEADROOM: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub color: RGBColor,
    /// e.g. "35.0%"
    pub annotation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportanceChart {
    title: String,
    x_label: String,
    /// Ranked bars, index 0 = most important (drawn at the top); never empty
    bars: Vec<ChartBar>,
}

impl ImportanceChart {
    /// Take the first `top_n` rows of an already-ranked table
    pub fn from_table(table: &ImportanceTable, top_n: usize) -> RiskResult<Self> {
        let rows = table.head(top_n);
        if rows.is_empty() {
            return Err(RiskError::EmptyChart);
        }

        let bars = rows
            .iter()
            .map(|row| ChartBar {
                label: row.feature.clone(),
                value: row.importance,
                color: rd_yl_gn_r(row.importance),
                annotation: format_percent(row.importance),
            })
            .collect();

        Ok(Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            bars,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn bars(&self) -> &[ChartBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Vertical slot for the bar at `rank`; the y axis is inverted so rank 0 sits on top.
    /// `None` when `rank` is out of range.
    pub fn slot(&self, rank: usize) -> Option<i32> {
        let from_bottom = self.bars.len().checked_sub(rank)?.checked_sub(1)?;
        Some(from_bottom as i32)
    }

    /// Label for a vertical slot (inverse of `slot`)
    pub fn label_for_slot(&self, slot: i32) -> Option<&str> {
        let n = self.bars.len() as i32;
        if slot < 0 || slot >= n {
            return None;
        }
        self.bars
            .get((n - 1 - slot) as usize)
            .map(|bar| bar.label.as_str())
    }

    /// X axis span: starts at 0 (or the smallest negative value), leaves room for labels
    pub fn x_range(&self) -> (f64, f64) {
        let finite = || self.bars.iter().map(|b| b.value).filter(|v| v.is_finite());
        let max = finite().fold(0.0_f64, f64::max);
        let min = finite().fold(0.0_f64, f64::min);
        (min, max + LABEL_OFFSET + X_HEADROOM)
    }
}

/// `0.35` -> `"35.0%"`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
