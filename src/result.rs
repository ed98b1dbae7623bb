//! Result types for AUC estimation.

use serde::{Deserialize, Serialize};

/// A percentile-bootstrap confidence interval around a point estimate.
///
/// `lower` and `upper` are empirical percentiles of the bootstrap
/// distribution; `point` is the estimate computed on the full observation
/// set, not the bootstrap mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound (the `alpha/2` percentile).
    pub lower: f64,
    /// Point estimate on the full observation set.
    pub point: f64,
    /// Upper bound (the `1 - alpha/2` percentile).
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Width of the interval, `upper - lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Result of AUC estimation with a bootstrap confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AucEstimate {
    /// Rank-based ROC AUC on the full observation set, in [0, 1].
    pub auc: f64,

    /// Confidence interval with `auc` as its point estimate.
    pub ci: ConfidenceInterval,

    /// Confidence level of the interval (e.g. 0.95).
    pub confidence: f64,

    /// Number of resamples requested.
    pub resamples_requested: usize,

    /// Number of resamples that actually entered the bootstrap
    /// distribution.
    ///
    /// Single-class resamples are discarded without replacement, so this
    /// can be smaller than `resamples_requested`. The gap is reported here
    /// rather than silently absorbed.
    pub resamples_used: usize,
}
