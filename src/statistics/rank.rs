//! Rank-based AUC computation.
//!
//! The ROC AUC equals the probability that a randomly chosen positive
//! scores higher than a randomly chosen negative, with ties counting 0.5.
//! This is the Mann–Whitney U statistic normalized by `n_pos * n_neg`,
//! computed here from midranks:
//!
//! ```text
//! AUC = (R_pos - n_pos * (n_pos + 1) / 2) / (n_pos * n_neg)
//! ```
//!
//! where `R_pos` is the sum of the (tie-averaged) ranks of the positive
//! observations in the pooled sample.
//!
//! # Reference
//!
//! Hanley, J. A. & McNeil, B. J. (1982). "The meaning and use of the area
//! under a receiver operating characteristic (ROC) curve."
//! Radiology 143(1):29–36.

/// Compute the rank-based ROC AUC over paired labels and scores.
///
/// Tied scores share the average of the ranks they span, so each tied
/// positive/negative pair contributes exactly 0.5. Runs in O(n log n) for
/// the sort plus a single pass over the tie groups.
///
/// # Arguments
///
/// * `labels` - Class per observation, `true` for positive
/// * `scores` - Score per observation, aligned by index
///
/// # Returns
///
/// The AUC in [0, 1].
///
/// # Panics
///
/// Panics if the slices differ in length or either class is absent.
/// Callers validate observation sets before reaching this function; the
/// bootstrap loop checks class counts on each resample.
pub fn rank_auc(labels: &[bool], scores: &[f64]) -> f64 {
    assert_eq!(
        labels.len(),
        scores.len(),
        "labels and scores must have equal length"
    );

    let n = labels.len();
    let n_pos = labels.iter().filter(|&&l| l).count();
    let n_neg = n - n_pos;
    assert!(
        n_pos > 0 && n_neg > 0,
        "AUC requires both classes to be present"
    );

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by(|&a, &b| scores[a].total_cmp(&scores[b]));

    // Walk tie groups in ascending score order, assigning each group the
    // midrank (average of the 1-based ranks it spans).
    let mut rank_sum_pos = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && scores[order[j]] == scores[order[i]] {
            j += 1;
        }
        let midrank = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            if labels[idx] {
                rank_sum_pos += midrank;
            }
        }
        i = j;
    }

    let n_pos = n_pos as f64;
    let n_neg = n_neg as f64;
    (rank_sum_pos - n_pos * (n_pos + 1.0) / 2.0) / (n_pos * n_neg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_separation() {
        // Every positive outscores every negative.
        let labels = [false, true, true, false];
        let scores = [0.2, 0.8, 0.7, 0.3];
        assert!((rank_auc(&labels, &scores) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn perfect_inversion() {
        let labels = [true, false, false, true];
        let scores = [0.2, 0.8, 0.7, 0.3];
        assert!(rank_auc(&labels, &scores).abs() < 1e-12);
    }

    #[test]
    fn partial_separation() {
        // Positives {0.9, 0.7}, negatives {0.8, 0.1}.
        // Pairwise wins: 0.9>0.8, 0.9>0.1, 0.7<0.8, 0.7>0.1 -> 3/4.
        let labels = [true, false, true, false];
        let scores = [0.9, 0.8, 0.7, 0.1];
        assert!((rank_auc(&labels, &scores) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn all_ties_give_half() {
        let labels = [true, false, true, false, true];
        let scores = [0.5; 5];
        assert!((rank_auc(&labels, &scores) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mixed_ties() {
        // Positive at 0.5 ties one negative: contributes 0.5 of its one pair.
        // Pairs: (p=0.5 vs n=0.5) -> 0.5, (p=0.5 vs n=0.1) -> 1.
        let labels = [true, false, false];
        let scores = [0.5, 0.5, 0.1];
        assert!((rank_auc(&labels, &scores) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn invariant_under_monotone_transform() {
        let labels = [true, false, true, false, false, true];
        let scores: [f64; 6] = [2.0, 1.0, 5.0, 0.5, 3.0, 4.0];
        let transformed: Vec<f64> = scores.iter().map(|s| s.exp()).collect();
        let a = rank_auc(&labels, &scores);
        let b = rank_auc(&labels, &transformed);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "both classes")]
    fn single_class_panics() {
        rank_auc(&[true, true], &[0.1, 0.2]);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn length_mismatch_panics() {
        rank_auc(&[true, false], &[0.1]);
    }
}
