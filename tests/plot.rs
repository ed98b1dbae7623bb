//! Rendering tests for the ROC plot layouts.
//!
//! These verify that both layouts render real datasets to disk without
//! error. Visual appearance is not asserted; the SVG output is checked for
//! existence and non-trivial size.

use std::collections::HashMap;

use auroc::gaussian_dataset;
use auroc::plot::{plot_roc_overlay, plot_roc_panels, PlotError, PlotStyle};
use auroc::ScoredDataset;
use plotters::style::RGBColor;

fn demo_datasets() -> Vec<ScoredDataset> {
    vec![
        gaussian_dataset("Linear_High", 200, 3.0, 2025),
        gaussian_dataset("Linear_Mid", 200, 1.5, 2026),
        gaussian_dataset("Linear_Low", 200, 0.5, 2027),
    ]
}

#[test]
fn overlay_renders_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overlay.svg");

    plot_roc_overlay(&path, &demo_datasets(), "ROC Curve Comparison", &PlotStyle::default())
        .unwrap();

    let size = std::fs::metadata(&path).unwrap().len();
    assert!(size > 1_000, "suspiciously small SVG: {} bytes", size);
}

#[test]
fn overlay_honors_color_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colored.svg");

    let mut colors = HashMap::new();
    colors.insert("Linear_High".to_string(), RGBColor(10, 20, 30));
    let style = PlotStyle::new().colors(colors);

    plot_roc_overlay(&path, &demo_datasets(), "Colored", &style).unwrap();

    // The mapped color must appear in the SVG; unmapped datasets fall back
    // to the palette.
    let svg = std::fs::read_to_string(&path).unwrap().to_ascii_lowercase();
    assert!(
        svg.contains("#0a141e") || svg.contains("rgb(10,20,30)"),
        "mapped color missing from output"
    );
}

#[test]
fn panels_render_partial_last_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panels.svg");

    // Three datasets over two columns leaves one blank cell.
    plot_roc_panels(&path, &demo_datasets(), 2, "ROC Curve Panels", &PlotStyle::default())
        .unwrap();

    let size = std::fs::metadata(&path).unwrap().len();
    assert!(size > 1_000, "suspiciously small SVG: {} bytes", size);
}

#[test]
fn empty_input_is_rejected_before_touching_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.svg");

    let err = plot_roc_overlay(&path, &[], "Empty", &PlotStyle::default()).unwrap_err();
    assert!(matches!(err, PlotError::NoDatasets));
    assert!(!path.exists());
}

#[test]
fn invalid_dataset_surfaces_as_plot_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.svg");

    let bad = ScoredDataset::new("one-class", vec![true, true], vec![0.1, 0.2]);
    let err = plot_roc_panels(&path, &[bad], 1, "Bad", &PlotStyle::default()).unwrap_err();
    assert!(matches!(err, PlotError::InvalidData(_)));
}
