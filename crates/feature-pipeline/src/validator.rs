//! Sensor Table Validation

use crate::error::PipelineError;
use crate::table::SensorTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Validation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Inclusive `(min, max)` bounds per column; unlisted columns are only checked for finiteness
    pub ranges: BTreeMap<String, (f64, f64)>,
}

impl ValidationConfig {
    /// Add a bound for one column
    pub fn with_range(mut self, column: impl Into<String>, min: f64, max: f64) -> Self {
        self.ranges.insert(column.into(), (min, max));
        self
    }
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all cells are valid
    pub valid: bool,
    /// Every failing cell, in column-major order
    pub errors: Vec<PipelineError>,
    /// Number of cells validated
    pub cells_checked: usize,
}

/// Cell-level validator for sensor tables
#[derive(Debug, Clone, Default)]
pub struct TableValidator {
    config: ValidationConfig,
}

impl TableValidator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Check a single cell
    pub fn validate_value(&self, column: &str, row: usize, value: f64) -> Result<(), PipelineError> {
        if !value.is_finite() {
            return Err(PipelineError::NonFinite {
                column: column.to_string(),
                row,
            });
        }
        match self.config.ranges.get(column) {
            Some(&(min, max)) if value < min || value > max => Err(PipelineError::OutOfRange {
                column: column.to_string(),
                row,
                value,
                min,
                max,
            }),
            _ => Ok(()),
        }
    }

    /// Check every cell and collect all failures
    pub fn validate(&self, table: &SensorTable) -> ValidationResult {
        let mut errors = Vec::new();
        for (name, column) in table.column_names().iter().zip(table.data().columns()) {
            for (row, &value) in column.iter().enumerate() {
                if let Err(e) = self.validate_value(name, row, value) {
                    errors.push(e);
                }
            }
        }
        if !errors.is_empty() {
            warn!(failures = errors.len(), "sensor table failed validation");
        }
        ValidationResult {
            valid: errors.is_empty(),
            errors,
            cells_checked: table.nrows() * table.ncols(),
        }
    }

    /// First failing cell, if any
    pub fn check(&self, table: &SensorTable) -> Result<(), PipelineError> {
        match self.validate(table).errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Require every cell of `table` to be finite
pub fn validate_table(table: &SensorTable) -> Result<(), PipelineError> {
    TableValidator::default().check(table)
}
