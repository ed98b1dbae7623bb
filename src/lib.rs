//! # auroc
//!
//! ROC AUC estimation with bootstrap confidence intervals and
//! publication-style ROC plots.
//!
//! Given paired (label, score) observations this crate computes:
//! - The rank-based ROC AUC (Mann–Whitney U equivalent, ties counting 0.5)
//! - A percentile-bootstrap confidence interval around it
//! - The ROC curve itself (threshold sweep with tie grouping)
//!
//! and renders single-overlay or faceted multi-panel ROC figures.
//!
//! ## Quick Start
//!
//! ```
//! use auroc::{estimate, BootstrapConfig};
//!
//! let labels = [false, true, true, false, true, false];
//! let scores = [0.1, 0.9, 0.7, 0.3, 0.8, 0.4];
//!
//! let result = estimate(&labels, &scores, &BootstrapConfig::default()).unwrap();
//! println!(
//!     "AUC = {:.3} (95% CI {:.3}-{:.3})",
//!     result.auc, result.ci.lower, result.ci.upper
//! );
//! ```
//!
//! ## Determinism
//!
//! Estimation is purely functional: identical inputs and seed produce
//! bit-identical results. Each bootstrap replicate derives its own RNG
//! stream from the seed and its replicate index, so enabling the
//! `parallel` feature changes wall-clock time, never the numbers.
//!
//! ## Reading data and plotting
//!
//! ```no_run
//! use auroc::data::{load_grouped_scores, LoadOptions};
//! use auroc::plot::{plot_roc_overlay, PlotStyle};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let datasets = load_grouped_scores(Path::new("scores.csv"), &LoadOptions::default())?;
//! plot_roc_overlay(
//!     Path::new("roc.svg"),
//!     &datasets,
//!     "ROC Curve Comparison",
//!     &PlotStyle::default(),
//! )?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod curve;
mod error;
mod estimator;
mod result;

// Functional modules
pub mod data;
pub mod output;
pub mod plot;
pub mod statistics;
pub mod synthetic;

// Re-exports for the public API
pub use config::BootstrapConfig;
pub use curve::{RocCurve, RocPoint};
pub use data::ScoredDataset;
pub use error::{AucError, InvalidInput};
pub use estimator::{estimate, roc_auc};
pub use result::{AucEstimate, ConfidenceInterval};
pub use synthetic::gaussian_dataset;
