//! Publication-style ROC plots.
//!
//! Two layouts, both rendered to SVG:
//! - [`plot_roc_overlay`]: every dataset's curve in one panel with a shared
//!   legend
//! - [`plot_roc_panels`]: one facet per dataset in a grid
//!
//! Both use the conventional clinical presentation: the y axis reads
//! "Sensitivity (%)" from 0 to 100, the x axis reads "Specificity (%)"
//! from 100 down to 0 (tick labels relabel the underlying false positive
//! rate), and a dashed grey diagonal marks chance performance.

mod overlay;
mod panels;
mod style;

pub use overlay::plot_roc_overlay;
pub use panels::plot_roc_panels;
pub use style::{PlotStyle, DEFAULT_PALETTE};

use std::fmt;

use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::error::AucError;

/// Axis range shared by both layouts; slightly padded so curves touching
/// the unit square stay visible.
pub(crate) const AXIS_RANGE: std::ops::Range<f64> = -0.05..1.05;

const DIAGONAL_GREY: RGBColor = RGBColor(128, 128, 128);

/// Errors that can occur while rendering a ROC plot.
#[derive(Debug)]
pub enum PlotError {
    /// No datasets were supplied.
    NoDatasets,

    /// A dataset could not support a ROC curve.
    InvalidData(AucError),

    /// The drawing backend failed.
    Draw(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::NoDatasets => write!(f, "no datasets to plot"),
            PlotError::InvalidData(e) => write!(f, "dataset cannot be plotted: {}", e),
            PlotError::Draw(message) => write!(f, "drawing failed: {}", message),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::InvalidData(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AucError> for PlotError {
    fn from(e: AucError) -> Self {
        PlotError::InvalidData(e)
    }
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Draw(e.to_string())
    }
}

/// Draw the shared ROC axis treatment onto a built chart: relabeled
/// sensitivity/specificity ticks, axis descriptions, and the chance
/// diagonal.
pub(crate) fn draw_roc_spine<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    label_font: u32,
    desc_font: u32,
) -> Result<(), PlotError> {
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(7)
        .y_labels(7)
        .x_desc("Specificity (%)")
        .y_desc("Sensitivity (%)")
        .x_label_formatter(&|x| format!("{:.0}", (1.0 - x) * 100.0))
        .y_label_formatter(&|y| format!("{:.0}", y * 100.0))
        .label_style(("sans-serif", label_font))
        .axis_desc_style(("sans-serif", desc_font))
        .draw()?;

    chart.draw_series(DashedLineSeries::new(
        [(-0.05, -0.05), (1.05, 1.05)],
        6,
        4,
        ShapeStyle::from(&DIAGONAL_GREY).stroke_width(1),
    ))?;

    Ok(())
}

/// Clamp a font delta the way the legends expect: never below 6pt.
pub(crate) fn legend_font(base_font: u32) -> u32 {
    base_font.saturating_sub(7).max(6)
}
