//! Descriptive-statistics helpers shared by the outlier detectors.

pub mod moments;
pub mod quantile;

pub use moments::{mean, population_std, population_variance, sample_std, sample_variance};
pub use quantile::{percentile, quartiles};
