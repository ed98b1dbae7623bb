//! Statistical methods for ROC analysis.
//!
//! This module provides the numeric core of the crate:
//! - Rank-based (Mann–Whitney U equivalent) AUC with midrank tie handling
//! - Bootstrap resampling of the AUC with counter-seeded replicates
//! - Percentile computation via linear interpolation between order statistics

mod bootstrap;
mod percentile;
mod rank;

pub use bootstrap::{bootstrap_auc_distribution, counter_rng_seed};
pub use percentile::percentile_sorted;
pub use rank::rank_auc;
