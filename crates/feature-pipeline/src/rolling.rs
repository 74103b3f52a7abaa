//! Rolling Hurst Features
//!
//! Trailing-window Hurst exponents per sensor column, appended to the table as
//! new feature columns.

use crate::error::PipelineError;
use crate::table::SensorTable;
use hurst::{hurst_exponent, HurstConfig, Method};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rolling window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollingConfig {
    /// Trailing window length in cycles
    pub window: usize,
    /// Emit a value every `stride` cycles once the window is full
    pub stride: usize,
    /// Estimator
    pub method: Method,
    /// Columns to featurize; empty means every column
    pub columns: Vec<String>,
    /// Estimator parameters
    pub hurst: HurstConfig,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            window: 256,
            stride: 1,
            method: Method::default(),
            columns: Vec::new(),
            hurst: HurstConfig::default(),
        }
    }
}

impl RollingConfig {
    /// Check window and estimator parameters
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.window == 0 {
            return Err(PipelineError::InvalidWindow("window must be positive".to_string()));
        }
        if self.stride == 0 {
            return Err(PipelineError::InvalidWindow("stride must be positive".to_string()));
        }
        self.hurst.validate()?;
        Ok(())
    }
}

/// Rolling-window Hurst feature extractor
#[derive(Debug, Clone)]
pub struct RollingHurst {
    config: RollingConfig,
}

impl RollingHurst {
    /// Create an extractor, rejecting unusable windows
    pub fn new(config: RollingConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &RollingConfig {
        &self.config
    }

    /// Output column names for one input column
    pub fn feature_names(&self, column: &str) -> Vec<String> {
        let methods: &[Method] = match self.config.method {
            Method::All => &Method::SINGLE,
            ref single => std::slice::from_ref(single),
        };
        methods
            .iter()
            .map(|m| format!("{column}_hurst_{}", m.as_str().to_lowercase()))
            .collect()
    }

    /// Rows at which a full window ends and a value is emitted
    pub fn window_ends(&self, nrows: usize) -> impl Iterator<Item = usize> {
        (self.config.window.saturating_sub(1)..nrows).step_by(self.config.stride)
    }

    /// Feature columns only, same row count as `table`
    pub fn compute(&self, table: &SensorTable) -> Result<SensorTable, PipelineError> {
        let columns: Vec<String> = if self.config.columns.is_empty() {
            table.column_names().to_vec()
        } else {
            self.config.columns.clone()
        };

        let width = self.feature_names("").len();
        let nrows = table.nrows();
        let mut features = Array2::from_elem((nrows, columns.len() * width), f64::NAN);
        let mut names = Vec::with_capacity(features.ncols());

        debug!(
            columns = columns.len(),
            rows = nrows,
            window = self.config.window,
            stride = self.config.stride,
            method = %self.config.method,
            "computing rolling Hurst features"
        );

        for (c, column) in columns.iter().enumerate() {
            let values = table.column(column)?.to_vec();
            names.extend(self.feature_names(column));

            for end in self.window_ends(nrows) {
                let window = &values[end + 1 - self.config.window..=end];
                let output = hurst_exponent(window, &self.config.hurst, self.config.method)?;
                for (j, estimate) in output.estimates().iter().enumerate() {
                    features[[end, c * width + j]] = estimate.as_scalar().unwrap_or(f64::NAN);
                }
            }
        }

        SensorTable::new(names, features)
    }

    /// `table` with the feature columns appended
    pub fn transform(&self, table: &SensorTable) -> Result<SensorTable, PipelineError> {
        let features = self.compute(table)?;
        table.with_columns(&features)
    }
}
