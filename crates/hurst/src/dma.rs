//! Detrended-Moving-Average (DMA) Estimator
//!
//! For each window length `n` the series is high-pass filtered by subtracting
//! its `n`-point backward moving average. The first `max_chunksize + 1` filter
//! outputs are warm-up and discarded for every `n`, so all window lengths are
//! measured over the same samples. The RMS of the residual scales as `n^H`.

use crate::config::HurstConfig;
use crate::dispatch::Method;
use crate::error::HurstError;
use crate::estimator::HurstEstimator;
use crate::filter::FirFilter;
use crate::regression::ordinary_least_squares;
use crate::schedule::moving_average_schedule;
use tracing::{debug, trace, warn};

/// Detrended-moving-average estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetrendedMovingAverage {
    /// Shortest moving-average window
    pub min_chunksize: usize,
    /// Longest moving-average window (inclusive)
    pub max_chunksize: usize,
    /// Increment between window lengths
    pub schedule_step: usize,
}

impl Default for DetrendedMovingAverage {
    fn default() -> Self {
        Self::from_config(&HurstConfig::default())
    }
}

impl DetrendedMovingAverage {
    /// Create an estimator with explicit bounds
    pub fn new(min_chunksize: usize, max_chunksize: usize, schedule_step: usize) -> Self {
        Self {
            min_chunksize,
            max_chunksize,
            schedule_step,
        }
    }

    /// Take the DMA parameters of a shared config
    pub fn from_config(config: &HurstConfig) -> Self {
        Self::new(config.min_chunksize, config.max_chunksize, config.dma_schedule_step)
    }

    /// Window lengths visited by [`DetrendedMovingAverage::estimate`]
    pub fn schedule(&self) -> Vec<usize> {
        moving_average_schedule(self.min_chunksize, self.max_chunksize, self.schedule_step)
    }

    /// Filter outputs discarded as warm-up
    pub fn warmup(&self) -> usize {
        self.max_chunksize.saturating_add(1)
    }

    /// RMS moving-average residual for window length `n`
    ///
    /// Not guarded: a flat series yields zero or rounding-level noise here.
    pub fn fluctuation(&self, series: &[f64], n: usize) -> f64 {
        let warmup = self.warmup();
        if series.len() <= warmup {
            return f64::NAN;
        }

        let residual = FirFilter::moving_average_residual(n).filter_settled(series, warmup);
        let energy: f64 = residual.iter().map(|v| v * v).sum();
        (energy / (series.len() - warmup) as f64).sqrt()
    }

    fn validate(&self, len: usize) -> Result<(), HurstError> {
        HurstConfig {
            min_chunksize: self.min_chunksize,
            max_chunksize: self.max_chunksize,
            dma_schedule_step: self.schedule_step,
            ..Default::default()
        }
        .validate()?;

        if len <= self.warmup() {
            return Err(HurstError::InsufficientData {
                required: self.warmup().saturating_add(1),
                actual: len,
            });
        }
        Ok(())
    }
}

impl HurstEstimator for DetrendedMovingAverage {
    fn method(&self) -> Method {
        Method::DetrendedMovingAverage
    }

    fn estimate(&self, series: &[f64]) -> Result<f64, HurstError> {
        self.validate(series.len())?;

        let schedule = self.schedule();
        let magnitude = series.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        let mut log_windows = Vec::with_capacity(schedule.len());
        let mut log_dma = Vec::with_capacity(schedule.len());

        for &n in &schedule {
            let dma = self.fluctuation(series, n);
            trace!(window = n, dma, "DMA fluctuation");
            // below the rounding error of an n-tap filter the residual carries no signal
            let floor = 4.0 * n as f64 * f64::EPSILON * magnitude;
            if !(dma > floor && dma.is_finite()) {
                warn!(window = n, dma, "DMA: degenerate fluctuation, returning NaN");
                return Ok(f64::NAN);
            }
            log_windows.push((n as f64).log10());
            log_dma.push(dma.log10());
        }

        let hurst = ordinary_least_squares(&log_windows, &log_dma)
            .map(|fit| fit.slope)
            .unwrap_or(f64::NAN);

        debug!(len = series.len(), points = schedule.len(), hurst, "DMA Hurst exponent");
        Ok(hurst)
    }
}

/// Hurst exponent of `prices` by detrended moving average
///
/// `num_chunksize` is the step between consecutive window lengths.
pub fn hurst_dma(
    prices: &[f64],
    min_chunksize: usize,
    max_chunksize: usize,
    num_chunksize: usize,
) -> Result<f64, HurstError> {
    DetrendedMovingAverage::new(min_chunksize, max_chunksize, num_chunksize).estimate(prices)
}
