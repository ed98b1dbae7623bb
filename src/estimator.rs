//! The bootstrap AUC/CI estimator.

use crate::config::BootstrapConfig;
use crate::error::{AucError, InvalidInput};
use crate::result::{AucEstimate, ConfidenceInterval};
use crate::statistics::{bootstrap_auc_distribution, percentile_sorted, rank_auc};

/// Validate an observation set for AUC computation.
///
/// Checks length agreement, minimum size, score finiteness, and the
/// presence of both classes, in that order.
pub(crate) fn validate_observations(labels: &[bool], scores: &[f64]) -> Result<(), AucError> {
    if labels.len() != scores.len() {
        return Err(InvalidInput::LengthMismatch {
            labels: labels.len(),
            scores: scores.len(),
        }
        .into());
    }
    if labels.len() < 2 {
        return Err(InvalidInput::TooFewObservations { got: labels.len() }.into());
    }
    if let Some(index) = scores.iter().position(|s| !s.is_finite()) {
        return Err(InvalidInput::NonFiniteScore { index }.into());
    }
    let positives = labels.iter().filter(|&&l| l).count();
    if positives == 0 || positives == labels.len() {
        return Err(InvalidInput::SingleClass {
            positives,
            negatives: labels.len() - positives,
        }
        .into());
    }
    Ok(())
}

/// Compute the rank-based ROC AUC point estimate.
///
/// Validates the observation set, then computes the Mann–Whitney AUC with
/// midrank tie handling. No resampling is performed.
///
/// # Errors
///
/// Returns [`AucError::InvalidInput`] if the slices differ in length, hold
/// fewer than two observations, contain a non-finite score, or contain a
/// single class.
pub fn roc_auc(labels: &[bool], scores: &[f64]) -> Result<f64, AucError> {
    validate_observations(labels, scores)?;
    Ok(rank_auc(labels, scores))
}

/// Estimate the ROC AUC and its bootstrap confidence interval.
///
/// Computes the point AUC on the full observation set, draws
/// `config.resamples` bootstrap resamples (each resample seeded from
/// `config.seed` and its replicate index), discards single-class resamples,
/// and reads the interval bounds off the sorted bootstrap distribution at
/// the `alpha/2` and `1 - alpha/2` percentiles by linear interpolation.
///
/// The returned interval's point is the full-sample AUC, not the bootstrap
/// mean. If resamples were discarded, the shortfall is visible in
/// [`AucEstimate::resamples_used`]; the interval is still computed from the
/// remaining replicates.
///
/// Purely functional: identical inputs and configuration produce
/// bit-identical results, with or without the `parallel` feature.
///
/// # Errors
///
/// - [`AucError::InvalidInput`] for malformed observation sets (see
///   [`roc_auc`]).
/// - [`AucError::InsufficientBootstrapSamples`] if every resample was
///   single-class, which leaves no distribution to take percentiles of.
///
/// # Example
///
/// ```
/// use auroc::{estimate, BootstrapConfig};
///
/// let labels = [false, true, true, false, true, false];
/// let scores = [0.1, 0.9, 0.7, 0.3, 0.8, 0.4];
/// let result = estimate(&labels, &scores, &BootstrapConfig::default()).unwrap();
/// assert!(result.ci.lower <= result.auc && result.auc <= result.ci.upper);
/// ```
pub fn estimate(
    labels: &[bool],
    scores: &[f64],
    config: &BootstrapConfig,
) -> Result<AucEstimate, AucError> {
    validate_observations(labels, scores)?;

    let auc = rank_auc(labels, scores);

    let mut distribution =
        bootstrap_auc_distribution(labels, scores, config.resamples, config.seed);
    if distribution.is_empty() {
        return Err(AucError::InsufficientBootstrapSamples {
            resamples: config.resamples,
        });
    }
    distribution.sort_unstable_by(|a, b| a.total_cmp(b));

    let alpha = 1.0 - config.confidence;
    let lower = percentile_sorted(&distribution, alpha / 2.0);
    let upper = percentile_sorted(&distribution, 1.0 - alpha / 2.0);

    Ok(AucEstimate {
        auc,
        ci: ConfidenceInterval {
            lower,
            point: auc,
            upper,
        },
        confidence: config.confidence,
        resamples_requested: config.resamples,
        resamples_used: distribution.len(),
    })
}
