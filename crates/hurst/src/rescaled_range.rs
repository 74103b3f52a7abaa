//! Rescaled-Range (R/S) Estimator
//!
//! For every chunk size of the schedule the series is cut into contiguous,
//! non-overlapping windows (the trailing remainder is dropped). Each window
//! contributes `R/S`: the range of its mean-centred cumulative sum divided by
//! its population standard deviation. Windows with zero variance yield NaN and
//! are left out of the per-size average. The Hurst exponent is the slope of
//! `ln(avg R/S)` against `ln(chunk size)`.

use crate::config::HurstConfig;
use crate::dispatch::Method;
use crate::error::HurstError;
use crate::estimator::HurstEstimator;
use crate::regression::ordinary_least_squares;
use crate::schedule::rescaled_range_schedule;
use crate::statistics::nan_mean;
use tracing::{debug, trace, warn};

/// Rescaled-range estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescaledRange {
    /// Smallest chunk size
    pub min_chunksize: usize,
    /// Largest chunk size (inclusive)
    pub max_chunksize: usize,
    /// Number of chunk sizes in the schedule
    pub schedule_points: usize,
}

impl Default for RescaledRange {
    fn default() -> Self {
        Self::from_config(&HurstConfig::default())
    }
}

impl RescaledRange {
    /// Create an estimator with explicit bounds
    pub fn new(min_chunksize: usize, max_chunksize: usize, schedule_points: usize) -> Self {
        Self {
            min_chunksize,
            max_chunksize,
            schedule_points,
        }
    }

    /// Take the R/S parameters of a shared config
    pub fn from_config(config: &HurstConfig) -> Self {
        Self::new(config.min_chunksize, config.max_chunksize, config.rs_schedule_points)
    }

    /// Chunk sizes visited by [`RescaledRange::estimate`]
    pub fn schedule(&self) -> Vec<usize> {
        rescaled_range_schedule(self.min_chunksize, self.max_chunksize, self.schedule_points)
    }

    /// Smallest series length accepted (one window of the largest chunk size)
    pub fn min_len(&self) -> usize {
        self.max_chunksize.saturating_add(1)
    }

    fn validate(&self, len: usize) -> Result<(), HurstError> {
        HurstConfig {
            min_chunksize: self.min_chunksize,
            max_chunksize: self.max_chunksize,
            rs_schedule_points: self.schedule_points,
            ..Default::default()
        }
        .validate()?;

        if len < self.min_len() {
            return Err(HurstError::InsufficientData {
                required: self.min_len(),
                actual: len,
            });
        }
        Ok(())
    }
}

impl HurstEstimator for RescaledRange {
    fn method(&self) -> Method {
        Method::RescaledRange
    }

    fn estimate(&self, series: &[f64]) -> Result<f64, HurstError> {
        self.validate(series.len())?;

        let schedule = self.schedule();
        let mut log_sizes = Vec::with_capacity(schedule.len());
        let mut log_rs = Vec::with_capacity(schedule.len());

        for &chunk_size in &schedule {
            let avg_rs = average_rescaled_range(series, chunk_size);
            trace!(chunk_size, avg_rs, "R/S chunk average");
            log_sizes.push((chunk_size as f64).ln());
            log_rs.push(avg_rs.ln());
        }

        if log_rs.iter().any(|v| !v.is_finite()) {
            warn!(len = series.len(), "R/S: degenerate chunk average, returning NaN");
            return Ok(f64::NAN);
        }

        let hurst = ordinary_least_squares(&log_sizes, &log_rs)
            .map(|fit| fit.slope)
            .unwrap_or(f64::NAN);

        debug!(len = series.len(), points = schedule.len(), hurst, "R/S Hurst exponent");
        Ok(hurst)
    }
}

/// NaN-aware mean of the window R/S ratios for one chunk size
///
/// NaN when the series holds no complete window or every window is degenerate.
pub fn average_rescaled_range(series: &[f64], chunk_size: usize) -> f64 {
    if chunk_size == 0 {
        return f64::NAN;
    }
    nan_mean(series.chunks_exact(chunk_size).map(window_rescaled_range))
}

/// R/S statistic of a single window
///
/// One pass after the mean: running cumulative deviation, its extremes and the
/// squared deviations. NaN for zero variance (up to the rounding error of the
/// mean) or non-finite input.
#[inline]
pub fn window_rescaled_range(chunk: &[f64]) -> f64 {
    if chunk.is_empty() {
        return f64::NAN;
    }

    let n = chunk.len() as f64;
    let mean = chunk.iter().sum::<f64>() / n;

    let mut running = 0.0;
    let mut lowest = f64::INFINITY;
    let mut highest = f64::NEG_INFINITY;
    let mut squares = 0.0;
    for &value in chunk {
        let deviation = value - mean;
        running += deviation;
        lowest = lowest.min(running);
        highest = highest.max(running);
        squares += deviation * deviation;
    }

    let std_dev = (squares / n).sqrt();
    if std_dev <= n * f64::EPSILON * mean.abs() || !std_dev.is_finite() {
        return f64::NAN;
    }
    (highest - lowest) / std_dev
}

/// Hurst exponent of `series` by rescaled range
///
/// `num_chunksize` is the number of chunk sizes spread over
/// `[min_chunksize, max_chunksize + 1]`.
pub fn hurst_rs(
    series: &[f64],
    min_chunksize: usize,
    max_chunksize: usize,
    num_chunksize: usize,
) -> Result<f64, HurstError> {
    RescaledRange::new(min_chunksize, max_chunksize, num_chunksize).estimate(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{drifting_walk, white_noise};

    #[test]
    fn test_window_statistic_known_value() {
        // cumulative deviations -1.5, -2, -1.5, 0 => R = 2, S = sqrt(1.25)
        let rs = window_rescaled_range(&[1.0, 2.0, 3.0, 4.0]);
        assert!((rs - 2.0 / 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_window_zero_variance_is_nan() {
        assert!(window_rescaled_range(&[3.0; 16]).is_nan());
        assert!(window_rescaled_range(&[0.0; 16]).is_nan());
        // 7.1 is inexact, the mean picks up rounding noise
        assert!(window_rescaled_range(&[7.1; 13]).is_nan());
        assert!(window_rescaled_range(&[]).is_nan());
        assert!(window_rescaled_range(&[1.0, f64::NAN, 2.0]).is_nan());
    }

    #[test]
    fn test_average_skips_flat_windows() {
        // second window is flat and must not drag the average to NaN
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 5.0, 1.0, 2.0];
        let avg = average_rescaled_range(&series, 4);
        assert!((avg - 2.0 / 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_average_without_complete_window_is_nan() {
        assert!(average_rescaled_range(&[1.0, 2.0, 3.0], 4).is_nan());
        assert!(average_rescaled_range(&[1.0, 2.0, 3.0], 0).is_nan());
    }

    #[test]
    fn test_white_noise_near_half() {
        let noise = white_noise(4096, 2024);
        let h = hurst_rs(&noise, 8, 200, 5).unwrap();
        assert!((h - 0.5).abs() < 0.1, "white noise R/S H = {:.4}", h);
    }

    #[test]
    fn test_trending_series_near_one() {
        let trend = drifting_walk(2048, 1.0, 42);
        let h = hurst_rs(&trend, 8, 200, 5).unwrap();
        assert!(h > 0.9, "trending R/S H = {:.4}", h);
    }

    #[test]
    fn test_flat_prefix_does_not_abort() {
        let mut series = white_noise(1024, 7);
        series[..8].fill(0.25);
        let h = hurst_rs(&series, 8, 200, 5).unwrap();
        assert!(h.is_finite());
    }

    #[test]
    fn test_constant_series_is_nan() {
        let h = hurst_rs(&[1.5; 512], 8, 200, 5).unwrap();
        assert!(h.is_nan());
    }

    #[test]
    fn test_insufficient_data() {
        let err = hurst_rs(&white_noise(200, 1), 8, 200, 5).unwrap_err();
        assert_eq!(
            err,
            HurstError::InsufficientData {
                required: 201,
                actual: 200
            }
        );
        assert!(hurst_rs(&white_noise(201, 1), 8, 200, 5).is_ok());
    }

    #[test]
    fn test_invalid_schedule() {
        let err = hurst_rs(&white_noise(512, 1), 8, 200, 1).unwrap_err();
        assert!(matches!(err, HurstError::InvalidConfig(_)));

        let err = hurst_rs(&white_noise(512, 1), 8, usize::MAX, 5).unwrap_err();
        assert!(matches!(err, HurstError::InvalidConfig(_)));
    }

    #[test]
    fn test_deterministic() {
        let noise = white_noise(1024, 99);
        let a = hurst_rs(&noise, 8, 200, 5).unwrap();
        let b = hurst_rs(&noise, 8, 200, 5).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
