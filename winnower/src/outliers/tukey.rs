//! Tukey's fences.
//!
//! The method conventionally carries Tukey's name; mechanically it is the
//! IQR fence test with the same multiplier, percentile method, and strict
//! inequality, so this entry point delegates to the IQR implementation.

use crate::errors::RemovalError;

use super::iqr::remove_outliers_iqr;
use super::Partition;

/// Remove outliers using Tukey's fences.
///
/// Identical to [`remove_outliers_iqr`] for every input and multiplier.
pub fn remove_outliers_tukey(values: &[f64], multiplier: f64) -> Result<Partition, RemovalError> {
    remove_outliers_iqr(values, multiplier)
}
