//! Z-score thresholding.
//!
//! A value is an outlier when it lies more than `threshold` population
//! standard deviations from the mean. Sensitive to the outliers themselves
//! inflating the stddev; prefer the IQR fences for heavy-tailed data.

use crate::errors::RemovalError;
use crate::stats::{mean, population_std};

use super::{require_finite, require_non_empty, Partition};

/// Remove outliers using Z-score thresholding.
///
/// Uses the population standard deviation (divisor N). A value is an
/// outlier iff `|v - mean| / std > threshold`.
///
/// All-identical input has zero spread and no defined Z-scores; that is
/// reported as [`RemovalError::ZeroSpread`] rather than dividing by zero.
/// A NaN anywhere in the input makes the mean and stddev NaN, every
/// comparison false, and therefore every value kept.
pub fn remove_outliers_zscore(values: &[f64], threshold: f64) -> Result<Partition, RemovalError> {
    require_non_empty(values)?;
    require_finite("threshold", threshold)?;

    let m = mean(values);
    let std = population_std(values);
    if std == 0.0 {
        return Err(RemovalError::ZeroSpread);
    }

    let partition = Partition::split(values, |v| ((v - m) / std).abs() > threshold);
    tracing::debug!(
        kept = partition.kept.len(),
        removed = partition.outliers.len(),
        mean = m,
        std,
        "Z-score threshold applied"
    );
    Ok(partition)
}
