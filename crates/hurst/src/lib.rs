//! Hurst Exponent Estimation
//!
//! Self-similarity statistics used as engineered features for remaining-useful-life
//! models. Three independent estimators (rescaled range, detrended moving
//! average, discrete second-order derivative) behind one dispatcher.

mod config;
mod dispatch;
mod dma;
mod dsod;
mod error;
mod estimator;
mod filter;
mod regression;
mod rescaled_range;
mod schedule;
mod series;
mod statistics;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::HurstConfig;
pub use dispatch::{hurst_exponent, hurst_exponent_by_name, Estimate, HurstOutput, Method};
pub use dma::{hurst_dma, DetrendedMovingAverage};
pub use dsod::{hurst_dsod, DiscreteSecondOrderDerivative, MIN_DSOD_LEN};
pub use error::HurstError;
pub use estimator::HurstEstimator;
pub use filter::FirFilter;
pub use regression::{ordinary_least_squares, LinearFit};
pub use rescaled_range::{average_rescaled_range, hurst_rs, window_rescaled_range, RescaledRange};
pub use schedule::{moving_average_schedule, rescaled_range_schedule};
pub use series::{AsSeries, SeriesView};
pub use statistics::{first_difference, nan_mean, reintegrate};
