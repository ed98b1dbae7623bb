//! Loading labeled score data from delimited text files.
//!
//! Classifier evaluations usually arrive as exported tables: one row per
//! observation with a binary label and a continuous score, optionally
//! preceded by a dataset name for multi-model comparisons. This module
//! parses those tables into [`ScoredDataset`] values.
//!
//! # Supported layouts
//!
//! - **Two columns** (`label,score`): one dataset per file
//! - **Three columns** (`dataset,label,score`): several named datasets in
//!   one file, split on the first column
//!
//! Labels parse from `0`/`1` and `true`/`false` (case-insensitive).
//!
//! # Example
//!
//! ```ignore
//! use auroc::data::{load_labeled_scores, LoadOptions};
//! use std::path::Path;
//!
//! let dataset = load_labeled_scores(Path::new("scores.csv"), &LoadOptions::default())?;
//! println!("{}: {} observations", dataset.name, dataset.len());
//! ```

mod csv;

pub use csv::{load_grouped_scores, load_labeled_scores};

use std::fmt;

use crate::config::BootstrapConfig;
use crate::curve::RocCurve;
use crate::error::AucError;
use crate::estimator;
use crate::result::AucEstimate;

/// Errors that can occur while loading score data.
#[derive(Debug)]
pub enum DataError {
    /// IO error reading the file.
    Io(std::io::Error),

    /// A line did not have the expected number of columns.
    Parse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Description of the parse error.
        message: String,
    },

    /// A label column value was not a recognized binary label.
    InvalidLabel {
        /// Line number (1-indexed).
        line: usize,
        /// The offending value.
        value: String,
    },

    /// A score column value was not a real number.
    InvalidScore {
        /// Line number (1-indexed).
        line: usize,
        /// The offending value.
        value: String,
    },

    /// The file contained no data rows.
    Empty,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "IO error: {}", e),
            DataError::Parse { line, message } => {
                write!(f, "Parse error at line {}: {}", line, message)
            }
            DataError::InvalidLabel { line, value } => {
                write!(
                    f,
                    "Invalid label at line {}: '{}' (expected 0/1 or true/false)",
                    line, value
                )
            }
            DataError::InvalidScore { line, value } => {
                write!(f, "Invalid score at line {}: '{}'", line, value)
            }
            DataError::Empty => write!(f, "File contains no data rows"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}

/// Options for parsing delimited score files.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Column delimiter. Default: `,`. Use `\t` for TSV exports.
    pub delimiter: char,
    /// Whether the first line is a header to skip. Default: `true`.
    pub has_header: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
        }
    }
}

impl LoadOptions {
    /// Options for tab-separated files.
    pub fn tsv() -> Self {
        Self {
            delimiter: '\t',
            ..Default::default()
        }
    }

    /// Set whether the first line is a header.
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

/// A named observation set: paired labels and scores.
///
/// The unit of multi-dataset plotting and data loading. Invariants
/// (`labels.len() == scores.len()`, both classes present, finite scores)
/// are checked when the set is evaluated, not at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDataset {
    /// Dataset name, shown in legends and panel titles.
    pub name: String,
    /// Class per observation, `true` for positive.
    pub labels: Vec<bool>,
    /// Score per observation, aligned by index.
    pub scores: Vec<f64>,
}

impl ScoredDataset {
    /// Create a dataset from parts.
    pub fn new(name: impl Into<String>, labels: Vec<bool>, scores: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            labels,
            scores,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the dataset holds no observations.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Compute the ROC curve for this dataset.
    pub fn roc_curve(&self) -> Result<RocCurve, AucError> {
        RocCurve::from_scores(&self.labels, &self.scores)
    }

    /// Estimate AUC and its bootstrap confidence interval.
    pub fn estimate(&self, config: &BootstrapConfig) -> Result<AucEstimate, AucError> {
        estimator::estimate(&self.labels, &self.scores, config)
    }
}
