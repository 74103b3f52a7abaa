//! Labeled Sensor Table
//!
//! Rows are cycles (time steps), columns are named sensor channels.

use crate::error::PipelineError;
use hurst::{AsSeries, SeriesView};
use ndarray::{concatenate, Array2, ArrayView1, Axis};

/// Column-labeled `(cycle, channel)` matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SensorTable {
    columns: Vec<String>,
    data: Array2<f64>,
}

impl SensorTable {
    /// Wrap a matrix, one label per column
    pub fn new(columns: Vec<String>, data: Array2<f64>) -> Result<Self, PipelineError> {
        if columns.len() != data.ncols() {
            return Err(PipelineError::ShapeMismatch(format!(
                "{} labels for {} columns",
                columns.len(),
                data.ncols()
            )));
        }
        if let Some(name) = first_duplicate(&columns) {
            return Err(PipelineError::ShapeMismatch(format!("duplicate column {name}")));
        }
        Ok(Self { columns, data })
    }

    /// Build from `(name, values)` pairs of equal length
    pub fn from_columns<I, N>(columns: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = (N, Vec<f64>)>,
        N: Into<String>,
    {
        let (names, values): (Vec<String>, Vec<Vec<f64>>) =
            columns.into_iter().map(|(name, v)| (name.into(), v)).unzip();

        let nrows = values.first().map_or(0, Vec::len);
        if let Some((name, v)) = names.iter().zip(&values).find(|(_, v)| v.len() != nrows) {
            return Err(PipelineError::ShapeMismatch(format!(
                "column {name} has {} rows, expected {nrows}",
                v.len()
            )));
        }

        let data = Array2::from_shape_fn((nrows, names.len()), |(row, col)| values[col][row]);
        Self::new(names, data)
    }

    /// Number of cycles
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of channels
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Channel labels in column order
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Underlying matrix
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Position of a named column
    pub fn column_index(&self, name: &str) -> Result<usize, PipelineError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| PipelineError::UnknownColumn(name.to_string()))
    }

    /// View of a named column
    pub fn column(&self, name: &str) -> Result<ArrayView1<'_, f64>, PipelineError> {
        let index = self.column_index(name)?;
        Ok(self.data.column(index))
    }

    /// New table with only the named columns, in the given order
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Self, PipelineError> {
        let indices = names
            .iter()
            .map(|name| self.column_index(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let columns = indices.iter().map(|&i| self.columns[i].clone()).collect();
        Self::new(columns, self.data.select(Axis(1), &indices))
    }

    /// Append the columns of `other` to the right of this table
    pub fn with_columns(&self, other: &SensorTable) -> Result<Self, PipelineError> {
        if other.nrows() != self.nrows() {
            return Err(PipelineError::ShapeMismatch(format!(
                "cannot append {} rows to a table of {} rows",
                other.nrows(),
                self.nrows()
            )));
        }
        let data = concatenate(Axis(1), &[self.data.view(), other.data.view()])
            .map_err(|e| PipelineError::ShapeMismatch(e.to_string()))?;
        let columns = self.columns.iter().chain(&other.columns).cloned().collect();
        Self::new(columns, data)
    }
}

impl AsSeries for SensorTable {
    fn as_series(&self) -> SeriesView<'_> {
        SeriesView::Matrix(self.data.view())
    }
}

fn first_duplicate(names: &[String]) -> Option<&str> {
    names
        .iter()
        .enumerate()
        .find(|(i, name)| names[..*i].contains(*name))
        .map(|(_, name)| name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> SensorTable {
        SensorTable::from_columns([
            ("temp", vec![1.0, 2.0, 3.0]),
            ("vibration", vec![4.0, 5.0, 6.0]),
            ("pressure", vec![7.0, 8.0, 9.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_columns_layout() {
        let table = sample();
        assert_eq!(table.nrows(), 3);
        assert_eq!(table.ncols(), 3);
        assert_eq!(table.column_names(), ["temp", "vibration", "pressure"]);
        assert_eq!(table.column("vibration").unwrap(), array![4.0, 5.0, 6.0]);
        assert_eq!(table.data()[[2, 2]], 9.0);
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let result = SensorTable::from_columns([("a", vec![1.0, 2.0]), ("b", vec![1.0])]);
        assert!(matches!(result, Err(PipelineError::ShapeMismatch(_))));
    }

    #[test]
    fn test_label_count_must_match() {
        let result = SensorTable::new(vec!["a".into()], Array2::zeros((4, 2)));
        assert!(matches!(result, Err(PipelineError::ShapeMismatch(_))));
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let result = SensorTable::new(vec!["a".into(), "a".into()], Array2::zeros((4, 2)));
        assert!(matches!(result, Err(PipelineError::ShapeMismatch(_))));
    }

    #[test]
    fn test_unknown_column() {
        let table = sample();
        assert_eq!(
            table.column("rpm").unwrap_err(),
            PipelineError::UnknownColumn("rpm".to_string())
        );
        assert!(table.select(&["temp", "rpm"]).is_err());
    }

    #[test]
    fn test_select_reorders() {
        let table = sample().select(&["pressure", "temp"]).unwrap();
        assert_eq!(table.column_names(), ["pressure", "temp"]);
        assert_eq!(table.data().row(0).to_vec(), vec![7.0, 1.0]);
    }

    #[test]
    fn test_with_columns_appends() {
        let extra = SensorTable::from_columns([("flow", vec![0.1, 0.2, 0.3])]).unwrap();
        let joined = sample().with_columns(&extra).unwrap();
        assert_eq!(joined.ncols(), 4);
        assert_eq!(joined.column("flow").unwrap()[1], 0.2);

        let short = SensorTable::from_columns([("flow", vec![0.1])]).unwrap();
        assert!(sample().with_columns(&short).is_err());
        assert!(sample().with_columns(&sample()).is_err());
    }

    #[test]
    fn test_table_is_matrix_series() {
        let table = sample();
        assert_eq!(AsSeries::ndim(&table), 2);
        assert_eq!(AsSeries::len(&table), 3);
    }

    #[test]
    fn test_empty_table() {
        let table = SensorTable::from_columns(Vec::<(String, Vec<f64>)>::new()).unwrap();
        assert_eq!(table.nrows(), 0);
        assert_eq!(table.ncols(), 0);
    }
}
