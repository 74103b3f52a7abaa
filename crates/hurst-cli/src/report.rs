//! Estimate report

use feature_pipeline::SensorTable;
use hurst::{Estimate, HurstConfig, HurstOutput, Method};
use serde::Serialize;
use std::collections::BTreeMap;

/// Value reported for one column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnEstimate {
    /// One method
    Single(f64),
    /// `all`: RS, DMA, DSOD
    All([f64; 3]),
}

/// JSON report printed by `hurst estimate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateReport {
    pub method: Method,
    pub config: HurstConfig,
    pub rows: usize,
    pub columns: BTreeMap<String, ColumnEstimate>,
}

impl EstimateReport {
    /// Split a matrix dispatcher result into per-column values
    pub fn new(table: &SensorTable, config: HurstConfig, method: Method, output: &HurstOutput) -> Self {
        let columns = table
            .column_names()
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let value = match output {
                    HurstOutput::Single(estimate) => ColumnEstimate::Single(column_value(estimate, i)),
                    HurstOutput::All([rs, dma, dsod]) => ColumnEstimate::All([
                        column_value(rs, i),
                        column_value(dma, i),
                        column_value(dsod, i),
                    ]),
                };
                (name.clone(), value)
            })
            .collect();

        Self {
            method,
            config,
            rows: table.nrows(),
            columns,
        }
    }
}

// Empty input collapses to a scalar NaN shared by every column
fn column_value(estimate: &Estimate, column: usize) -> f64 {
    match estimate {
        Estimate::Scalar(value) => *value,
        Estimate::Columns(values) => values.get(column).copied().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SensorTable {
        SensorTable::from_columns([("a", vec![0.0; 4]), ("b", vec![0.0; 4])]).unwrap()
    }

    #[test]
    fn test_single_method_columns() {
        let output = HurstOutput::Single(Estimate::Columns(vec![0.4, 0.6]));
        let report = EstimateReport::new(&table(), HurstConfig::default(), Method::RescaledRange, &output);
        assert_eq!(report.columns["a"], ColumnEstimate::Single(0.4));
        assert_eq!(report.columns["b"], ColumnEstimate::Single(0.6));
    }

    #[test]
    fn test_all_columns() {
        let output = HurstOutput::All([
            Estimate::Columns(vec![0.1, 0.2]),
            Estimate::Columns(vec![0.3, 0.4]),
            Estimate::Columns(vec![0.5, 0.6]),
        ]);
        let report = EstimateReport::new(&table(), HurstConfig::default(), Method::All, &output);
        assert_eq!(report.columns["b"], ColumnEstimate::All([0.2, 0.4, 0.6]));
    }

    #[test]
    fn test_json_shape() {
        let output = HurstOutput::Single(Estimate::Scalar(f64::NAN));
        let report = EstimateReport::new(&table(), HurstConfig::default(), Method::DetrendedMovingAverage, &output);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["method"], "DMA");
        assert_eq!(json["config"]["max_chunksize"], 200);
        assert_eq!(json["rows"], 4);
        assert!(json["columns"]["a"].is_null());
    }
}
