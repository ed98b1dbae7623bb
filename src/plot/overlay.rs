//! Single-panel overlay of multiple ROC curves.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::data::ScoredDataset;

use super::{draw_roc_spine, legend_font, PlotError, PlotStyle, AXIS_RANGE};

/// Render all datasets' ROC curves into one panel.
///
/// Each curve is drawn in its mapped (or palette) color with a legend
/// entry of the form `"{name} (AUC = 0.92)"`; the legend sits in the lower
/// right, where ROC curves leave empty space. Output is an SVG file at
/// `path`.
///
/// # Errors
///
/// - [`PlotError::NoDatasets`] if `datasets` is empty
/// - [`PlotError::InvalidData`] if any dataset fails ROC validation
/// - [`PlotError::Draw`] if the backend fails
pub fn plot_roc_overlay(
    path: &Path,
    datasets: &[ScoredDataset],
    title: &str,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    if datasets.is_empty() {
        return Err(PlotError::NoDatasets);
    }

    // Compute every curve up front so bad data fails before the file is
    // touched.
    let curves: Vec<_> = datasets
        .iter()
        .map(|d| d.roc_curve().map(|c| (d.name.clone(), c)))
        .collect::<Result<_, _>>()?;

    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", style.base_font + 2))
        .x_label_area_size(60)
        .y_label_area_size(64)
        .build_cartesian_2d(AXIS_RANGE, AXIS_RANGE)?;

    let line_width = style.line_width;
    for (index, (name, curve)) in curves.iter().enumerate() {
        let color = style.color_for(name, index);
        let points: Vec<(f64, f64)> = curve.points().iter().map(|p| (p.fpr, p.tpr)).collect();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(line_width)))?
            .label(format!("{} (AUC = {:.2})", name, curve.auc()))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(line_width))
            });
    }

    draw_roc_spine(&mut chart, legend_font(style.base_font), style.base_font)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .border_style(&TRANSPARENT)
        .label_font(("sans-serif", legend_font(style.base_font)))
        .draw()?;

    root.present()?;
    info!(path = %path.display(), curves = curves.len(), "ROC overlay saved");
    Ok(())
}
