//! Small numeric helpers shared by the estimators

/// Mean of the non-NaN values, NaN when none remain
pub fn nan_mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Mean of squared values, NaN for an empty slice
pub fn mean_square(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64
}

/// `x[i + 1] - x[i]`, one element shorter than the input
pub fn first_difference(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Cumulative sum of the first difference
///
/// Rebuilds the series relative to its first sample, which removes any global
/// offset.
pub fn reintegrate(values: &[f64]) -> Vec<f64> {
    let mut running = 0.0;
    values
        .windows(2)
        .map(|w| {
            running += w[1] - w[0];
            running
        })
        .collect()
}
