//! Faceted multi-panel ROC layout.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::data::ScoredDataset;

use super::{draw_roc_spine, legend_font, PlotError, PlotStyle, AXIS_RANGE};

/// Vertical space reserved for the figure title, in pixels.
const TITLE_AREA: u32 = 50;

/// Render each dataset's ROC curve in its own facet.
///
/// Facets fill a `ceil(n / ncols) x ncols` grid left to right, top to
/// bottom; trailing cells stay blank. Each facet carries the dataset name
/// as its panel title and a local `"AUC = 0.92"` legend. Output is an SVG
/// file at `path`.
///
/// # Errors
///
/// - [`PlotError::NoDatasets`] if `datasets` is empty
/// - [`PlotError::InvalidData`] if any dataset fails ROC validation
/// - [`PlotError::Draw`] if the backend fails
///
/// # Panics
///
/// Panics if `ncols` is zero.
pub fn plot_roc_panels(
    path: &Path,
    datasets: &[ScoredDataset],
    ncols: usize,
    title: &str,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    if datasets.is_empty() {
        return Err(PlotError::NoDatasets);
    }
    assert!(ncols > 0, "ncols must be positive");

    let curves: Vec<_> = datasets
        .iter()
        .map(|d| d.roc_curve().map(|c| (d.name.clone(), c)))
        .collect::<Result<_, _>>()?;

    let nrows = datasets.len().div_ceil(ncols);
    let width = style.panel_size.0 * ncols as u32;
    let height = style.panel_size.1 * nrows as u32 + TITLE_AREA;

    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let grid = root.titled(title, ("sans-serif", style.base_font + 4))?;
    let cells = grid.split_evenly((nrows, ncols));

    let panel_font = style.base_font.saturating_sub(4).max(10);
    let line_width = style.line_width;
    for (index, (name, curve)) in curves.iter().enumerate() {
        let color = style.color_for(name, index);
        let points: Vec<(f64, f64)> = curve.points().iter().map(|p| (p.fpr, p.tpr)).collect();

        let mut chart = ChartBuilder::on(&cells[index])
            .margin(12)
            .caption(name, ("sans-serif", panel_font))
            .x_label_area_size(42)
            .y_label_area_size(48)
            .build_cartesian_2d(AXIS_RANGE, AXIS_RANGE)?;

        chart
            .draw_series(LineSeries::new(points, color.stroke_width(line_width)))?
            .label(format!("AUC = {:.2}", curve.auc()))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(line_width))
            });

        draw_roc_spine(&mut chart, legend_font(panel_font), panel_font)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .border_style(&TRANSPARENT)
            .label_font(("sans-serif", legend_font(panel_font)))
            .draw()?;
    }

    root.present()?;
    info!(
        path = %path.display(),
        panels = curves.len(),
        rows = nrows,
        cols = ncols,
        "ROC panels saved"
    );
    Ok(())
}
