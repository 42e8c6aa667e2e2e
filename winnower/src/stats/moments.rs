//! Mean and variance computation.
//!
//! Two-pass formulas: sum for the mean, then squared deviations. Both the
//! population (divisor N) and sample (divisor N−1) variants are provided
//! since the detectors disagree on which one they need.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divisor N). Returns 0.0 for an empty slice.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divisor N).
pub fn population_std(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Sample variance (divisor N−1). Returns 0.0 for fewer than two values.
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

/// Sample standard deviation (divisor N−1).
pub fn sample_std(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_population_vs_sample_variance() {
        // [2, 4, 4, 4, 5, 5, 7, 9]: population variance 4, sample variance 32/7
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_variance(&values) - 4.0).abs() < 1e-10);
        assert!((sample_variance(&values) - 32.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_population_std() {
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_std(&values) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_constant_values_zero_variance() {
        let values = vec![5.0; 10];
        assert_eq!(population_variance(&values), 0.0);
        assert_eq!(sample_variance(&values), 0.0);
    }

    #[test]
    fn test_sample_variance_single_value() {
        assert_eq!(sample_variance(&[3.0]), 0.0);
    }

    #[test]
    fn test_two_point_sample_std() {
        // s = |a - b| / sqrt(2)
        let values = vec![1.0, 3.0];
        assert!((sample_std(&values) - 2.0 / 2.0_f64.sqrt()).abs() < 1e-10);
    }
}
