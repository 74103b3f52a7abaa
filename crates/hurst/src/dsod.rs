//! Discrete Second-Order Derivative (DSOD) Estimator
//!
//! Quadratic-variation estimator (Istas & Lang): the ratio of the energies of a
//! wide and a narrow second-derivative filter applied to the reintegrated series
//! equals `2^(2H)` for a self-similar process.

use crate::dispatch::Method;
use crate::error::HurstError;
use crate::estimator::HurstEstimator;
use crate::filter::FirFilter;
use crate::statistics::{mean_square, reintegrate};
use tracing::{debug, warn};

/// Shortest series with at least one settled wide-filter output
pub const MIN_DSOD_LEN: usize = 6;

/// Parameter-free discrete second-order derivative estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscreteSecondOrderDerivative;

impl DiscreteSecondOrderDerivative {
    /// Narrow and wide filter energies `(s1, s2)` of the reintegrated series
    pub fn energies(&self, series: &[f64]) -> (f64, f64) {
        profile_energies(&reintegrate(series))
    }
}

fn profile_energies(profile: &[f64]) -> (f64, f64) {
    let narrow = FirFilter::second_derivative();
    let wide = FirFilter::wide_second_derivative();
    let s1 = mean_square(&narrow.filter_settled(profile, narrow.warmup()));
    let s2 = mean_square(&wide.filter_settled(profile, wide.warmup()));
    (s1, s2)
}

impl HurstEstimator for DiscreteSecondOrderDerivative {
    fn method(&self) -> Method {
        Method::DiscreteSecondOrderDerivative
    }

    fn estimate(&self, series: &[f64]) -> Result<f64, HurstError> {
        if series.len() < MIN_DSOD_LEN {
            return Err(HurstError::InsufficientData {
                required: MIN_DSOD_LEN,
                actual: series.len(),
            });
        }

        let profile = reintegrate(series);
        let (s1, s2) = profile_energies(&profile);

        // constant or straight-line input leaves only rounding residue of the
        // differencing and summation in the narrow second derivative
        let magnitude = series
            .iter()
            .chain(&profile)
            .fold(0.0f64, |acc, v| acc.max(v.abs()));
        let floor = 8.0 * f64::EPSILON * magnitude;
        if !(s1.sqrt() > floor) {
            warn!(s1, floor, "DSOD: degenerate narrow-filter energy, returning NaN");
            return Ok(f64::NAN);
        }

        let hurst = 0.5 * (s2 / s1).log2();
        debug!(len = series.len(), s1, s2, hurst, "DSOD Hurst exponent");
        Ok(hurst)
    }
}

/// Hurst exponent of `series` by discrete second-order derivative
pub fn hurst_dsod(series: &[f64]) -> Result<f64, HurstError> {
    DiscreteSecondOrderDerivative.estimate(series)
}
