//! # winnower
//!
//! Statistical outlier removal for one-dimensional data.
//!
//! Four independent, pure partitioning methods: IQR fencing, Z-score
//! thresholding, Tukey's fences, and Chauvenet's criterion. Each takes a
//! slice of `f64` values and splits it into the values it keeps and the
//! outliers it removes, both in original relative order.
//!
//! ## Quick Start
//!
//! ```
//! use winnower::{remove_outliers_iqr, DEFAULT_IQR_MULTIPLIER};
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
//! let partition = remove_outliers_iqr(&data, DEFAULT_IQR_MULTIPLIER)?;
//!
//! assert_eq!(partition.outliers, vec![100.0]);
//! assert_eq!(partition.kept.len(), 9);
//! # Ok::<(), winnower::RemovalError>(())
//! ```
//!
//! Callers selecting the method at runtime can go through
//! [`OutlierMethod`]:
//!
//! ```
//! use winnower::OutlierMethod;
//!
//! let data = [10.0, 12.0, 12.0, 13.0, 12.0, 11.0, 100.0];
//! let partition = OutlierMethod::ZScore { threshold: 2.0 }.apply(&data)?;
//!
//! assert_eq!(partition.outliers, vec![100.0]);
//! # Ok::<(), winnower::RemovalError>(())
//! ```
//!
//! Degenerate inputs (empty slice, zero spread for Z-scores, fewer than two
//! values for Chauvenet) are rejected with a typed [`RemovalError`] instead
//! of propagating NaN. NaN *data* values are not rejected; they are carried
//! into the kept side since no comparison ever classifies them as outliers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod outliers;
pub mod stats;

pub use errors::RemovalError;
pub use outliers::{
    remove_outliers_chauvenet, remove_outliers_iqr, remove_outliers_tukey,
    remove_outliers_zscore, OutlierMethod, Partition, DEFAULT_IQR_MULTIPLIER,
    DEFAULT_ZSCORE_THRESHOLD,
};
