//! Bootstrap resampling of the AUC.
//!
//! Each resample draws N indices uniformly with replacement and recomputes
//! the rank AUC on the resampled pairs. Resamples whose labels collapse to a
//! single class leave the AUC undefined; they are discarded without
//! consuming a slot, so the returned distribution may hold fewer than the
//! requested number of replicates.
//!
//! Every replicate seeds its own generator from the caller's seed and the
//! replicate index. This makes the distribution independent of execution
//! order, so the optional `parallel` feature produces bit-identical output
//! to the sequential path.

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::rank::rank_auc;

/// Derive a per-replicate RNG seed from a base seed and a replicate index.
///
/// Mixes the pair through SplitMix64 so that consecutive indices yield
/// well-separated streams. Two replicates with the same base seed and index
/// always receive the same stream.
pub fn counter_rng_seed(seed: u64, counter: u64) -> u64 {
    splitmix64(seed ^ counter.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// SplitMix64 finalizer (Steele, Lea & Flood 2014).
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Compute the AUC of one resample, or `None` if it is single-class.
fn resample_auc(labels: &[bool], scores: &[f64], rng: &mut Xoshiro256PlusPlus) -> Option<f64> {
    let n = labels.len();
    let mut boot_labels = Vec::with_capacity(n);
    let mut boot_scores = Vec::with_capacity(n);
    let mut positives = 0usize;

    for _ in 0..n {
        let idx = rng.random_range(0..n);
        if labels[idx] {
            positives += 1;
        }
        boot_labels.push(labels[idx]);
        boot_scores.push(scores[idx]);
    }

    if positives == 0 || positives == n {
        return None;
    }
    Some(rank_auc(&boot_labels, &boot_scores))
}

/// Draw the bootstrap distribution of the AUC.
///
/// Runs `resamples` iterations, each resampling N observation pairs with
/// replacement and recomputing the rank AUC. Single-class resamples are
/// skipped, so the result may be shorter than `resamples` (and is empty in
/// the pathological case where every resample was single-class).
///
/// The returned values are in replicate order, not sorted.
///
/// # Arguments
///
/// * `labels` - Class per observation, `true` for positive
/// * `scores` - Score per observation, aligned by index
/// * `resamples` - Number of resamples to draw
/// * `seed` - Base seed; replicate `i` uses `counter_rng_seed(seed, i)`
///
/// # Panics
///
/// Panics if the slices differ in length or are empty. Observation-set
/// validation happens in [`estimate`](crate::estimate) before this runs.
pub fn bootstrap_auc_distribution(
    labels: &[bool],
    scores: &[f64],
    resamples: usize,
    seed: u64,
) -> Vec<f64> {
    assert_eq!(
        labels.len(),
        scores.len(),
        "labels and scores must have equal length"
    );
    assert!(!labels.is_empty(), "Cannot resample an empty observation set");

    #[cfg(feature = "parallel")]
    {
        (0..resamples)
            .into_par_iter()
            .filter_map(|i| {
                let mut rng =
                    Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(seed, i as u64));
                resample_auc(labels, scores, &mut rng)
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..resamples)
            .filter_map(|i| {
                let mut rng =
                    Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(seed, i as u64));
                resample_auc(labels, scores, &mut rng)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> (Vec<bool>, Vec<f64>) {
        let labels = vec![false, true, true, false, true, false, true, false];
        let scores = vec![0.1, 0.9, 0.8, 0.3, 0.7, 0.2, 0.6, 0.4];
        (labels, scores)
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let (labels, scores) = toy();
        let a = bootstrap_auc_distribution(&labels, &scores, 200, 42);
        let b = bootstrap_auc_distribution(&labels, &scores, 200, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let (labels, scores) = toy();
        let a = bootstrap_auc_distribution(&labels, &scores, 200, 42);
        let b = bootstrap_auc_distribution(&labels, &scores, 200, 43);
        assert_ne!(a, b);
    }

    #[test]
    fn values_stay_in_unit_interval() {
        let (labels, scores) = toy();
        let dist = bootstrap_auc_distribution(&labels, &scores, 500, 7);
        assert!(!dist.is_empty());
        for &v in &dist {
            assert!((0.0..=1.0).contains(&v), "bootstrap AUC {} out of range", v);
        }
    }

    #[test]
    fn discarded_resamples_shrink_distribution() {
        // One positive among eight observations: many resamples miss it.
        let labels = [true, false, false, false, false, false, false, false];
        let scores = [0.9, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
        let dist = bootstrap_auc_distribution(&labels, &scores, 1000, 11);
        assert!(dist.len() < 1000, "expected some single-class discards");
    }

    #[test]
    fn counter_seeds_are_distinct() {
        let seeds: Vec<u64> = (0..64).map(|i| counter_rng_seed(42, i)).collect();
        let mut unique = seeds.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), seeds.len());
    }
}
