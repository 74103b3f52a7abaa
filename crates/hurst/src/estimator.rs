//! Common interface of the Hurst estimators

use crate::dispatch::Method;
use crate::error::HurstError;
use ndarray::{ArrayView2, Axis};

/// A Hurst-exponent estimator over a single channel
pub trait HurstEstimator {
    /// Method tag this estimator implements
    fn method(&self) -> Method;

    /// Estimate the Hurst exponent of one series
    fn estimate(&self, series: &[f64]) -> Result<f64, HurstError>;

    /// Estimate each column (channel) of a `(time, channel)` matrix independently
    fn estimate_columns(&self, matrix: ArrayView2<'_, f64>) -> Result<Vec<f64>, HurstError> {
        matrix
            .axis_iter(Axis(1))
            .map(|column| match column.as_slice() {
                Some(values) => self.estimate(values),
                None => self.estimate(&column.to_vec()),
            })
            .collect()
    }
}
