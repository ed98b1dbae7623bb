//! Output formatting for AUC estimates.
//!
//! This module provides formatters for displaying [`AucEstimate`](crate::AucEstimate)
//! in different formats:
//! - Terminal: human-readable summaries, with optional color
//! - JSON: machine-readable serialization

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_estimate, format_estimate_block};
