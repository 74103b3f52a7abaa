//! Sensor log loading and CSV output

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use feature_pipeline::SensorTable;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Column name used for a bare JSON array
pub const DEFAULT_COLUMN: &str = "series";

/// Input file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Guess from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(InputFormat::Csv),
            "json" => Some(InputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonInput {
    Series(Vec<f64>),
    Columns(BTreeMap<String, Vec<f64>>),
}

/// Load a sensor table, inferring the format from the extension when not given
pub fn load_table(path: &Path, format: Option<InputFormat>) -> Result<SensorTable> {
    let format = match format.or_else(|| InputFormat::from_path(path)) {
        Some(format) => format,
        None => bail!("cannot infer input format of {}, pass --format", path.display()),
    };
    let file = fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let table = match format {
        InputFormat::Csv => read_csv(file),
        InputFormat::Json => read_json(file),
    }
    .with_context(|| format!("failed to load {}", path.display()))?;

    debug!(rows = table.nrows(), columns = table.ncols(), ?format, "loaded sensor table");
    Ok(table)
}

/// CSV with a header row of channel names; every cell must be numeric
pub fn read_csv<R: Read>(reader: R) -> Result<SensorTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let names: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("malformed CSV record {}", row + 1))?;
        for ((name, column), field) in names.iter().zip(&mut columns).zip(record.iter()) {
            let value = field
                .parse::<f64>()
                .with_context(|| format!("column {name} row {}: {field:?} is not a number", row + 1))?;
            column.push(value);
        }
    }

    Ok(SensorTable::from_columns(names.into_iter().zip(columns))?)
}

/// JSON array of numbers, or object of column name to array
pub fn read_json<R: Read>(reader: R) -> Result<SensorTable> {
    let input: JsonInput = serde_json::from_reader(reader).context("expected an array of numbers or an object of arrays")?;
    let table = match input {
        JsonInput::Series(values) => SensorTable::from_columns([(DEFAULT_COLUMN, values)])?,
        JsonInput::Columns(columns) => SensorTable::from_columns(columns)?,
    };
    Ok(table)
}

/// Write a table as CSV with a header row
pub fn write_csv<W: Write>(table: &SensorTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(table.column_names())?;
    for row in table.data().rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
