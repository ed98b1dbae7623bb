//! ROC curve computation.
//!
//! A ROC curve traces the (false positive rate, true positive rate) pairs
//! obtained by sweeping a decision threshold from above the highest score
//! down to below the lowest. Tied scores are grouped so the curve has one
//! point per distinct threshold, and the trapezoidal area under the swept
//! curve equals the rank-based AUC.

use serde::{Deserialize, Serialize};

use crate::error::AucError;
use crate::estimator::validate_observations;

/// One point of a ROC curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    /// False positive rate at this threshold (1 - specificity).
    pub fpr: f64,
    /// True positive rate at this threshold (sensitivity).
    pub tpr: f64,
    /// Score threshold; observations scoring at or above it are predicted
    /// positive. The initial (0, 0) point carries `f64::INFINITY`.
    pub threshold: f64,
}

/// A ROC curve: threshold sweep points plus the area under them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocCurve {
    points: Vec<RocPoint>,
    auc: f64,
}

impl RocCurve {
    /// Compute the ROC curve for paired labels and scores.
    ///
    /// Sorts by descending score, sweeps thresholds across distinct score
    /// values, and accumulates the trapezoidal area as it goes. The curve
    /// always starts at (0, 0) and ends at (1, 1).
    ///
    /// # Errors
    ///
    /// Returns [`AucError::InvalidInput`] under the same conditions as
    /// [`roc_auc`](crate::roc_auc).
    pub fn from_scores(labels: &[bool], scores: &[f64]) -> Result<Self, AucError> {
        validate_observations(labels, scores)?;

        let n = labels.len();
        let total_pos = labels.iter().filter(|&&l| l).count() as f64;
        let total_neg = n as f64 - total_pos;

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_unstable_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut points = Vec::with_capacity(n + 1);
        points.push(RocPoint {
            fpr: 0.0,
            tpr: 0.0,
            threshold: f64::INFINITY,
        });

        let mut tp = 0.0;
        let mut fp = 0.0;
        let mut prev_fpr = 0.0;
        let mut prev_tpr = 0.0;
        let mut auc = 0.0;

        let mut i = 0;
        while i < n {
            let threshold = scores[order[i]];
            // Absorb the whole tie group before emitting a point.
            let mut j = i;
            while j < n && scores[order[j]] == threshold {
                if labels[order[j]] {
                    tp += 1.0;
                } else {
                    fp += 1.0;
                }
                j += 1;
            }

            let fpr = fp / total_neg;
            let tpr = tp / total_pos;
            auc += (fpr - prev_fpr) * (tpr + prev_tpr) / 2.0;
            points.push(RocPoint {
                fpr,
                tpr,
                threshold,
            });

            prev_fpr = fpr;
            prev_tpr = tpr;
            i = j;
        }

        Ok(Self { points, auc })
    }

    /// The sweep points, from (0, 0) to (1, 1) in descending threshold
    /// order.
    pub fn points(&self) -> &[RocPoint] {
        &self.points
    }

    /// Area under the curve by the trapezoidal rule.
    ///
    /// With tie grouping this equals the rank-based AUC returned by
    /// [`roc_auc`](crate::roc_auc).
    pub fn auc(&self) -> f64 {
        self.auc
    }

    /// The point maximizing Youden's J statistic (TPR - FPR).
    ///
    /// Its threshold is the operating point that best separates the
    /// classes; earlier points win ties.
    pub fn youden_point(&self) -> RocPoint {
        let mut best = self.points[0];
        let mut best_j = best.tpr - best.fpr;
        for &p in &self.points[1..] {
            let j = p.tpr - p.fpr;
            if j > best_j {
                best = p;
                best_j = j;
            }
        }
        best
    }
}
