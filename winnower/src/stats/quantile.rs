//! Percentile computation using linear interpolation between closest ranks.
//!
//! Rank formula: `r = p/100 * (n - 1)`, then interpolate between
//! `sorted[floor(r)]` and `sorted[ceil(r)]`. This matches the default
//! "linear" method of most numeric array libraries.

/// Compute the `p`-th percentile of `values` (`p` in 0–100).
///
/// Sorts a copy of the input with `total_cmp`, so NaN values cannot poison
/// the ordering (they sort to the high end). Returns 0.0 for an empty slice.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    percentile_sorted(&sorted, p)
}

/// Compute the first and third quartiles (Q1, Q3) from a single sorted copy.
pub fn quartiles(values: &[f64]) -> (f64, f64) {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    (percentile_sorted(&sorted, 25.0), percentile_sorted(&sorted, 75.0))
}

/// Percentile of an already-sorted slice.
pub(crate) fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let p = p.clamp(0.0, 100.0);
    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}
