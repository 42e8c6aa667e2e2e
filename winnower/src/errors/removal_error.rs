//! Outlier removal errors.

/// Errors that can occur during outlier removal.
///
/// Only degenerate *inputs* are rejected up front. NaN or infinite data
/// values are not errors: they flow through the arithmetic and the IEEE
/// comparison semantics (a NaN never tests as an outlier).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemovalError {
    /// The input slice was empty; percentiles and moments are undefined.
    #[error("Input is empty")]
    EmptyInput,

    /// A tuning parameter (fence multiplier or Z-score threshold) was NaN
    /// or infinite.
    #[error("Parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The population standard deviation is zero (all values identical),
    /// so Z-scores are undefined.
    #[error("Standard deviation is zero; Z-scores are undefined")]
    ZeroSpread,

    /// Too few data points for the requested method.
    #[error("Need at least {required} values, got {actual}")]
    InsufficientData {
        /// Minimum number of values the method requires.
        required: usize,
        /// Number of values actually supplied.
        actual: usize,
    },
}
