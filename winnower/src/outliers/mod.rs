//! Outlier removal methods for one-dimensional data.
//!
//! One file per method. Every method partitions its input into kept values
//! and removed outliers, both preserving original relative order, and the
//! two subsets always reconstitute the input as a multiset.

pub mod chauvenet;
pub mod iqr;
pub mod tukey;
pub mod zscore;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::RemovalError;

pub use chauvenet::remove_outliers_chauvenet;
pub use iqr::remove_outliers_iqr;
pub use tukey::remove_outliers_tukey;
pub use zscore::remove_outliers_zscore;

/// Default fence multiplier for the IQR and Tukey methods.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Default Z-score threshold.
pub const DEFAULT_ZSCORE_THRESHOLD: f64 = 3.0;

/// Result of an outlier removal: the input split into two ordered subsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    /// Values not classified as outliers, in original relative order.
    pub kept: Vec<f64>,
    /// Values classified as outliers, in original relative order.
    pub outliers: Vec<f64>,
}

impl Partition {
    /// Split `values` by an outlier predicate, preserving relative order
    /// on both sides.
    pub(crate) fn split<F>(values: &[f64], is_outlier: F) -> Self
    where
        F: Fn(f64) -> bool,
    {
        let mut kept = Vec::with_capacity(values.len());
        let mut outliers = Vec::new();
        for &v in values {
            if is_outlier(v) {
                outliers.push(v);
            } else {
                kept.push(v);
            }
        }
        Self { kept, outliers }
    }

    /// Number of values in the original input.
    pub fn total(&self) -> usize {
        self.kept.len() + self.outliers.len()
    }
}

/// An outlier removal method with its tuning parameter, for callers that
/// select the method at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutlierMethod {
    /// Interquartile-range fencing with the given fence multiplier.
    Iqr {
        /// Fence width multiplier (1.5 is the conventional default).
        multiplier: f64,
    },
    /// Z-score thresholding against the population standard deviation.
    ZScore {
        /// Values with |z| above this are removed.
        threshold: f64,
    },
    /// Tukey's fences; identical mechanics to [`OutlierMethod::Iqr`].
    Tukey {
        /// Fence width multiplier (1.5 is the conventional default).
        multiplier: f64,
    },
    /// Chauvenet's criterion; no tuning parameter.
    Chauvenet,
}

impl OutlierMethod {
    /// Run this method against `values`.
    pub fn apply(&self, values: &[f64]) -> Result<Partition, RemovalError> {
        match *self {
            Self::Iqr { multiplier } => remove_outliers_iqr(values, multiplier),
            Self::ZScore { threshold } => remove_outliers_zscore(values, threshold),
            Self::Tukey { multiplier } => remove_outliers_tukey(values, multiplier),
            Self::Chauvenet => remove_outliers_chauvenet(values),
        }
    }

    /// Method name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Iqr { .. } => "iqr",
            Self::ZScore { .. } => "zscore",
            Self::Tukey { .. } => "tukey",
            Self::Chauvenet => "chauvenet",
        }
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reject empty input before any percentile or moment computation.
pub(crate) fn require_non_empty(values: &[f64]) -> Result<(), RemovalError> {
    if values.is_empty() {
        return Err(RemovalError::EmptyInput);
    }
    Ok(())
}

/// Reject a NaN or infinite tuning parameter.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<(), RemovalError> {
    if !value.is_finite() {
        return Err(RemovalError::NonFiniteParameter { name, value });
    }
    Ok(())
}
