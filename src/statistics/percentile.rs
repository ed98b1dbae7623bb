//! Percentile computation by linear interpolation between order statistics.
//!
//! Implements the Type 7 estimator of Hyndman & Fan (1996), the default in
//! most numeric packages: for a sorted sample `x` of size `n` at probability
//! `p`,
//!
//! ```text
//! h = (n - 1) * p
//! q = x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])
//! ```
//!
//! Percentile-bootstrap confidence bounds are read off the sorted bootstrap
//! distribution with this estimator.
//!
//! # Reference
//!
//! Hyndman, R. J. & Fan, Y. (1996). "Sample quantiles in statistical
//! packages." The American Statistician 50(4):361–365.

/// Compute the `p`-th quantile of pre-sorted data by linear interpolation.
///
/// # Arguments
///
/// * `sorted` - Sample sorted in ascending order (not verified)
/// * `p` - Probability in [0, 1]
///
/// # Returns
///
/// The interpolated quantile; for `p = 0` and `p = 1` the first and last
/// elements exactly.
///
/// # Panics
///
/// Panics if `sorted` is empty or `p` is outside [0, 1].
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "Cannot compute percentile of empty slice"
    );
    assert!(
        (0.0..=1.0).contains(&p),
        "Percentile probability must be in [0, 1]"
    );

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }

    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_odd_sample() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((percentile_sorted(&data, 0.5) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn median_of_even_sample_interpolates() {
        let data = [1.0, 2.0, 3.0, 4.0];
        // h = 3 * 0.5 = 1.5 -> 2.0 + 0.5 * (3.0 - 2.0) = 2.5
        assert!((percentile_sorted(&data, 0.5) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn extremes_hit_endpoints() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile_sorted(&data, 0.0), 1.0);
        assert_eq!(percentile_sorted(&data, 1.0), 5.0);
    }

    #[test]
    fn quarter_percentile() {
        let data = [10.0, 20.0, 30.0, 40.0, 50.0];
        // h = 4 * 0.25 = 1.0 -> exactly 20.0
        assert!((percentile_sorted(&data, 0.25) - 20.0).abs() < 1e-12);
        // h = 4 * 0.1 = 0.4 -> 10 + 0.4 * 10 = 14.0
        assert!((percentile_sorted(&data, 0.1) - 14.0).abs() < 1e-12);
    }

    #[test]
    fn bootstrap_bounds_probabilities() {
        // The 2.5th/97.5th percentiles of 1..=100.
        let data: Vec<f64> = (1..=100).map(f64::from).collect();
        // h = 99 * 0.025 = 2.475 -> 3 + 0.475 * 1 = 3.475
        assert!((percentile_sorted(&data, 0.025) - 3.475).abs() < 1e-12);
        // h = 99 * 0.975 = 96.525 -> 97 + 0.525 * 1 = 97.525
        assert!((percentile_sorted(&data, 0.975) - 97.525).abs() < 1e-12);
    }

    #[test]
    fn single_element() {
        assert_eq!(percentile_sorted(&[42.0], 0.3), 42.0);
    }

    #[test]
    #[should_panic(expected = "empty slice")]
    fn empty_slice_panics() {
        percentile_sorted(&[], 0.5);
    }

    #[test]
    #[should_panic(expected = "must be in [0, 1]")]
    fn out_of_range_probability_panics() {
        percentile_sorted(&[1.0], 1.5);
    }
}
