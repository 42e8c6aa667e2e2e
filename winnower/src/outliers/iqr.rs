//! IQR fencing (Tukey fences).
//!
//! Resistant to extreme outliers that inflate stddev.
//! Uses Q1 - k*IQR and Q3 + k*IQR as fences (k = 1.5 default).

use crate::errors::RemovalError;
use crate::stats::quartiles;

use super::{require_finite, require_non_empty, Partition};

/// Remove outliers using IQR fencing.
///
/// Quartiles use linear interpolation between closest ranks. A value is an
/// outlier iff it lies strictly below `Q1 - multiplier*IQR` or strictly
/// above `Q3 + multiplier*IQR`; with an all-identical input the IQR is zero
/// and the strict test keeps everything.
///
/// `multiplier` must be finite; negative values are accepted and simply
/// invert the fences.
pub fn remove_outliers_iqr(values: &[f64], multiplier: f64) -> Result<Partition, RemovalError> {
    require_non_empty(values)?;
    require_finite("multiplier", multiplier)?;

    let (q1, q3) = quartiles(values);
    let iqr = q3 - q1;
    let lower = q1 - multiplier * iqr;
    let upper = q3 + multiplier * iqr;

    let partition = Partition::split(values, |v| v < lower || v > upper);
    tracing::debug!(
        kept = partition.kept.len(),
        removed = partition.outliers.len(),
        lower,
        upper,
        "IQR fences applied"
    );
    Ok(partition)
}
