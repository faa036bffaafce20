//! Chart Rendering - plotters backends
//!
//! Effectful step: draws an `ImportanceChart` and writes it to
//! `PlotConfig::output_path` (PNG by default, SVG for `.svg` paths).

use std::path::PathBuf;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::logic::config::PlotConfig;
use crate::logic::error::{RiskError, RiskResult};
use super::chart::{ChartBar, ImportanceChart, LABEL_OFFSET};

const FONT_FAMILY: &str = "sans-serif";

// Sizes in points; scaled to pixels by dpi / 72
const TITLE_PT: f64 = 14.0;
const AXIS_DESC_PT: f64 = 10.0;
const TICK_PT: f64 = 9.0;
const ANNOTATION_PT: f64 = 9.0;
const EDGE_PT: f64 = 1.2;
const MARGIN_PT: f64 = 10.0;

/// Draw the chart and write it to the configured destination
pub fn save(chart: &ImportanceChart, config: &PlotConfig) -> RiskResult<PathBuf> {
    config.validate()?;
    if chart.is_empty() {
        return Err(RiskError::EmptyChart);
    }

    let path = config.output_path.as_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let size = config.pixel_size();
    let scale = config.scale();

    if config.is_svg() {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw(&root, chart, scale).map_err(RiskError::render)?;
        root.present().map_err(RiskError::render)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw(&root, chart, scale).map_err(RiskError::render)?;
        root.present().map_err(RiskError::render)?;
    }

    log::info!(
        "Importance chart saved: {} ({}x{} px, {} bars)",
        path.display(),
        size.0,
        size.1,
        chart.len()
    );

    Ok(path.to_path_buf())
}

/// Backend-agnostic drawing
fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ImportanceChart,
    scale: f64,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let px = |pt: f64| (pt * scale).round().max(1.0) as u32;

    root.fill(&WHITE)?;

    let slots = chart.len() as i32;
    let (x_min, x_max) = chart.x_range();

    let longest_label = chart
        .bars()
        .iter()
        .map(|bar| bar.label.chars().count())
        .max()
        .unwrap_or(0) as f64;
    let label_area = px(longest_label * TICK_PT * 0.6 + MARGIN_PT);

    let mut ctx = ChartBuilder::on(root)
        .caption(
            chart.title(),
            (FONT_FAMILY, TITLE_PT * scale, FontStyle::Bold).into_font(),
        )
        .margin(px(MARGIN_PT))
        .x_label_area_size(px(AXIS_DESC_PT * 3.0))
        .y_label_area_size(label_area)
        .build_cartesian_2d(x_min..x_max, (0..slots).into_segmented())?;

    ctx.configure_mesh()
        .disable_y_mesh()
        .y_labels(chart.len())
        .y_label_formatter(&|seg: &SegmentValue<i32>| match seg {
            SegmentValue::CenterOf(slot) => {
                chart.label_for_slot(*slot).unwrap_or("").to_string()
            }
            _ => String::new(),
        })
        .x_label_formatter(&|value: &f64| format!("{:.0}%", value * 100.0))
        .x_desc(chart.x_label())
        .axis_desc_style((FONT_FAMILY, AXIS_DESC_PT * scale, FontStyle::Bold).into_font())
        .label_style((FONT_FAMILY, TICK_PT * scale).into_font())
        .draw()?;

    // (vertical slot, bar); rank 0 gets the top slot
    let placed: Vec<(i32, &ChartBar)> = chart
        .bars()
        .iter()
        .enumerate()
        .filter_map(|(rank, bar)| chart.slot(rank).map(|slot| (slot, bar)))
        .collect();

    let bar_margin = px(6.0);
    let bar_rect = |slot: i32, value: f64, style: ShapeStyle| {
        let mut rect = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(slot)),
                (value, SegmentValue::Exact(slot + 1)),
            ],
            style,
        );
        rect.set_margin(bar_margin, bar_margin, 0, 0);
        rect
    };

    // Fill, then black edges on top
    ctx.draw_series(
        placed
            .iter()
            .map(|&(slot, bar)| bar_rect(slot, bar.value, bar.color.filled())),
    )?;
    ctx.draw_series(
        placed
            .iter()
            .map(|&(slot, bar)| bar_rect(slot, bar.value, BLACK.stroke_width(px(EDGE_PT)))),
    )?;

    let annotation_style = TextStyle::from(
        (FONT_FAMILY, ANNOTATION_PT * scale, FontStyle::Bold).into_font(),
    )
    .pos(Pos::new(HPos::Left, VPos::Center));

    ctx.draw_series(placed.iter().map(|&(slot, bar)| {
        Text::new(
            bar.annotation.clone(),
            (bar.value + LABEL_OFFSET, SegmentValue::CenterOf(slot)),
            annotation_style.clone(),
        )
    }))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::explain::{get_feature_importance, FixedImportances, ImportanceTable};

    fn sample_chart() -> ImportanceChart {
        let names: Vec<String> = ["attendance", "study_hours", "test_score"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let table = get_feature_importance(&names, &FixedImportances(vec![0.5, 0.3, 0.2]));
        ImportanceChart::from_table(&table, 5).unwrap()
    }

    /// Small canvas keeps the test quick
    fn small_config(output: &std::path::Path) -> PlotConfig {
        PlotConfig {
            dpi: 72,
            ..PlotConfig::default().with_output(output)
        }
    }

    fn assert_written(result: RiskResult<PathBuf>, output: &std::path::Path) {
        let path = result.unwrap();
        assert_eq!(path.as_path(), output);
        let size = std::fs::metadata(&path).unwrap().len();
        assert!(size > 0, "{} is empty", path.display());
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("feature_importance.png");

        let result = save(&sample_chart(), &small_config(&output));
        assert_written(result, &output);
    }

    #[test]
    fn test_save_svg() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("feature_importance.svg");

        let result = save(&sample_chart(), &small_config(&output));
        assert_written(result, &output);

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("50.0%"));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("reports").join("chart.svg");

        let result = save(&sample_chart(), &small_config(&output));
        assert_written(result, &output);
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("feature_importance.png");
        let config = PlotConfig::default().with_output(&output);

        let result = crate::logic::plot::plot_importance(&ImportanceTable::default(), &config);
        assert!(matches!(result, Err(RiskError::EmptyChart)));
        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("chart.png");
        let config = PlotConfig {
            dpi: 0,
            ..PlotConfig::default().with_output(&output)
        };

        assert!(matches!(
            save(&sample_chart(), &config),
            Err(RiskError::InvalidConfig(_))
        ));
        assert!(!output.exists());
    }
}
