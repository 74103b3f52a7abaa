//! Method Selection and Dispatch

use crate::config::HurstConfig;
use crate::dma::DetrendedMovingAverage;
use crate::dsod::DiscreteSecondOrderDerivative;
use crate::error::HurstError;
use crate::estimator::HurstEstimator;
use crate::rescaled_range::RescaledRange;
use crate::series::{AsSeries, SeriesView};
use crate::statistics::first_difference;
use ndarray::{s, ArrayView2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Estimation method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Rescaled range
    #[default]
    #[serde(rename = "RS")]
    RescaledRange,
    /// Detrended moving average
    #[serde(rename = "DMA")]
    DetrendedMovingAverage,
    /// Discrete second-order derivative
    #[serde(rename = "DSOD")]
    DiscreteSecondOrderDerivative,
    /// All three, in the order RS, DMA, DSOD
    #[serde(rename = "all", alias = "ALL")]
    All,
}

impl Method {
    /// The single-estimator methods, in the order `All` reports them
    pub const SINGLE: [Method; 3] = [
        Method::RescaledRange,
        Method::DetrendedMovingAverage,
        Method::DiscreteSecondOrderDerivative,
    ];

    /// Short tag used in config files and column names
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::RescaledRange => "RS",
            Method::DetrendedMovingAverage => "DMA",
            Method::DiscreteSecondOrderDerivative => "DSOD",
            Method::All => "all",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = HurstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RS" => Ok(Method::RescaledRange),
            "DMA" => Ok(Method::DetrendedMovingAverage),
            "DSOD" => Ok(Method::DiscreteSecondOrderDerivative),
            "all" | "ALL" => Ok(Method::All),
            other => Err(HurstError::MethodNotImplemented(other.to_string())),
        }
    }
}

/// Result of one estimator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Estimate {
    /// 1D input
    Scalar(f64),
    /// 2D input, one value per column
    Columns(Vec<f64>),
}

impl Estimate {
    /// The scalar value, if this is a 1D result
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Estimate::Scalar(value) => Some(*value),
            Estimate::Columns(_) => None,
        }
    }

    /// All values as a slice (one element for a scalar)
    pub fn values(&self) -> &[f64] {
        match self {
            Estimate::Scalar(value) => std::slice::from_ref(value),
            Estimate::Columns(values) => values,
        }
    }
}

/// Dispatcher output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HurstOutput {
    /// A single method was requested (or the input was empty)
    Single(Estimate),
    /// `Method::All`: RS, DMA, DSOD
    All([Estimate; 3]),
}

impl HurstOutput {
    /// Scalar of a single-method 1D result
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            HurstOutput::Single(estimate) => estimate.as_scalar(),
            HurstOutput::All(_) => None,
        }
    }

    /// Estimates in reporting order
    pub fn estimates(&self) -> &[Estimate] {
        match self {
            HurstOutput::Single(estimate) => std::slice::from_ref(estimate),
            HurstOutput::All(estimates) => estimates,
        }
    }
}

/// Estimate the Hurst exponent of `series` with the selected method
///
/// Empty input yields NaN for every method. RS works on the first difference
/// of the series; 2D input is estimated column by column.
pub fn hurst_exponent<S>(series: &S, config: &HurstConfig, method: Method) -> Result<HurstOutput, HurstError>
where
    S: AsSeries + ?Sized,
{
    let view = series.as_series();
    if view.is_empty() {
        debug!(%method, "empty series, Hurst exponent is NaN");
        return Ok(HurstOutput::Single(Estimate::Scalar(f64::NAN)));
    }

    match method {
        Method::All => {
            let [rs, dma, dsod] = Method::SINGLE;
            Ok(HurstOutput::All([
                estimate_view(&view, config, rs)?,
                estimate_view(&view, config, dma)?,
                estimate_view(&view, config, dsod)?,
            ]))
        }
        single => estimate_view(&view, config, single).map(HurstOutput::Single),
    }
}

/// Parse `method` and dispatch, failing on unknown method names
///
/// Empty input is NaN before the name is looked at.
pub fn hurst_exponent_by_name<S>(series: &S, config: &HurstConfig, method: &str) -> Result<HurstOutput, HurstError>
where
    S: AsSeries + ?Sized,
{
    if series.as_series().is_empty() {
        debug!(method, "empty series, Hurst exponent is NaN");
        return Ok(HurstOutput::Single(Estimate::Scalar(f64::NAN)));
    }
    let method = method.parse::<Method>()?;
    hurst_exponent(series, config, method)
}

fn estimate_view(view: &SeriesView<'_>, config: &HurstConfig, method: Method) -> Result<Estimate, HurstError> {
    match method {
        Method::RescaledRange => {
            let estimator = RescaledRange::from_config(config);
            match view {
                SeriesView::Vector(v) => {
                    let increments = match v.as_slice() {
                        Some(values) => first_difference(values),
                        None => first_difference(&v.to_vec()),
                    };
                    estimator.estimate(&increments).map(Estimate::Scalar)
                }
                SeriesView::Matrix(m) => {
                    let increments = &m.slice(s![1.., ..]) - &m.slice(s![..-1, ..]);
                    estimator.estimate_columns(increments.view()).map(Estimate::Columns)
                }
            }
        }
        Method::DetrendedMovingAverage => {
            estimate_levels(view, &DetrendedMovingAverage::from_config(config))
        }
        Method::DiscreteSecondOrderDerivative => {
            estimate_levels(view, &DiscreteSecondOrderDerivative)
        }
        Method::All => Err(HurstError::MethodNotImplemented(
            "all is not a single estimator".to_string(),
        )),
    }
}

fn estimate_levels(view: &SeriesView<'_>, estimator: &dyn HurstEstimator) -> Result<Estimate, HurstError> {
    match view {
        SeriesView::Vector(v) => {
            let estimate = match v.as_slice() {
                Some(values) => estimator.estimate(values),
                None => estimator.estimate(&v.to_vec()),
            };
            estimate.map(Estimate::Scalar)
        }
        SeriesView::Matrix(m) => estimate_matrix(*m, estimator).map(Estimate::Columns),
    }
}

fn estimate_matrix(matrix: ArrayView2<'_, f64>, estimator: &dyn HurstEstimator) -> Result<Vec<f64>, HurstError> {
    debug!(
        method = %estimator.method(),
        rows = matrix.nrows(),
        columns = matrix.ncols(),
        "estimating columns"
    );
    estimator.estimate_columns(matrix)
}
