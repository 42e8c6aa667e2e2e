//! Chauvenet's criterion.
//!
//! Rejects a value when the expected number of measurements at least as
//! extreme, under a normal model with N samples, falls below one half:
//! `erfc(z) < 1/(2N)` with z computed against the sample stddev.

use statrs::function::erf::erfc;

use crate::errors::RemovalError;
use crate::stats::{mean, sample_std};

use super::{require_non_empty, Partition};

/// Remove outliers using Chauvenet's criterion.
///
/// Uses the sample standard deviation (divisor N−1), so at least two values
/// are required. A constant input has zero spread; every z is then taken as
/// 0 and `erfc(0) = 1` never falls below `1/(2N)`, so nothing is removed.
pub fn remove_outliers_chauvenet(values: &[f64]) -> Result<Partition, RemovalError> {
    require_non_empty(values)?;
    if values.len() < 2 {
        return Err(RemovalError::InsufficientData {
            required: 2,
            actual: values.len(),
        });
    }

    let n = values.len() as f64;
    let m = mean(values);
    let s = sample_std(values);
    let criterion = 1.0 / (2.0 * n);

    let partition = Partition::split(values, |v| {
        let z = if s == 0.0 { 0.0 } else { ((v - m) / s).abs() };
        erfc(z) < criterion
    });
    tracing::debug!(
        kept = partition.kept.len(),
        removed = partition.outliers.len(),
        mean = m,
        sample_std = s,
        criterion,
        "Chauvenet criterion applied"
    );
    Ok(partition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chauvenet_removes_extreme_value() {
        // mean 16.7, s ~16.31, z(50) ~2.04, erfc ~0.004 < 1/12
        let values = vec![10.0, 10.1, 10.2, 9.9, 10.0, 50.0];
        let p = remove_outliers_chauvenet(&values).unwrap();
        assert_eq!(p.outliers, vec![50.0]);
        assert_eq!(p.kept, vec![10.0, 10.1, 10.2, 9.9, 10.0]);
    }

    #[test]
    fn test_chauvenet_small_fixture() {
        // z(10) = 1.5, erfc(1.5) ~0.034 < 1/8; z(1) = 0.5, erfc ~0.48 kept
        let values = vec![1.0, 1.0, 1.0, 10.0];
        let p = remove_outliers_chauvenet(&values).unwrap();
        assert_eq!(p.outliers, vec![10.0]);
        assert_eq!(p.kept, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_chauvenet_two_distinct_values_never_flags() {
        // z = sqrt(2)/2 for both points; erfc(0.7071) ~0.317 > 1/4
        let values = vec![1.0, 9.0];
        let p = remove_outliers_chauvenet(&values).unwrap();
        assert!(p.outliers.is_empty());
        assert_eq!(p.kept, values);
    }

    #[test]
    fn test_chauvenet_constant_array_keeps_everything() {
        let values = vec![7.0; 12];
        let p = remove_outliers_chauvenet(&values).unwrap();
        assert!(p.outliers.is_empty());
        assert_eq!(p.kept.len(), 12);
    }

    #[test]
    fn test_chauvenet_clean_data_unchanged() {
        let values: Vec<f64> = (1..=30).map(|i| i as f64).collect();
        let p = remove_outliers_chauvenet(&values).unwrap();
        assert!(p.outliers.is_empty());
    }

    #[test]
    fn test_chauvenet_single_value() {
        assert_eq!(
            remove_outliers_chauvenet(&[3.0]),
            Err(RemovalError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_chauvenet_empty_input() {
        assert_eq!(remove_outliers_chauvenet(&[]), Err(RemovalError::EmptyInput));
    }
}
