//! Hurst Feature CLI
//!
//! Loads sensor logs, estimates Hurst exponents per channel and writes reports
//! or rolling feature tables.

pub mod cli;
pub mod input;
pub mod logging;
pub mod report;
pub mod settings;

use anyhow::{Context, Result};
use feature_pipeline::{RollingHurst, SensorTable, TableValidator};
use hurst::hurst_exponent;
use std::io::Write;
use tracing::info;

pub use cli::{Cli, Commands};
pub use logging::init_logging;
pub use report::EstimateReport;
pub use settings::Settings;

use cli::InputArgs;

/// Execute a parsed command against the effective settings
pub fn run<W: Write>(command: &Commands, settings: &Settings, mut out: W) -> Result<()> {
    match command {
        Commands::Estimate { input, .. } => {
            let table = load_validated(input, settings)?;
            settings.hurst.validate()?;

            info!(method = %settings.method, columns = table.ncols(), rows = table.nrows(), "estimating");
            let output = hurst_exponent(&table, &settings.hurst, settings.method)?;
            let report = EstimateReport::new(&table, settings.hurst, settings.method, &output);

            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        Commands::Rolling { input, .. } => {
            let table = load_validated(input, settings)?;
            let rolling = RollingHurst::new(settings.rolling_config(Vec::new()))?;

            info!(
                method = %settings.method,
                window = settings.rolling.window,
                stride = settings.rolling.stride,
                "computing rolling features"
            );
            let features = rolling.transform(&table)?;
            input::write_csv(&features, out)?;
        }
        Commands::Config { .. } => {
            serde_json::to_writer_pretty(&mut out, settings)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn load_validated(args: &InputArgs, settings: &Settings) -> Result<SensorTable> {
    let mut table = input::load_table(&args.input, args.format)?;
    if !args.columns.is_empty() {
        table = table.select(&args.columns)?;
    }
    TableValidator::new(settings.validation.clone())
        .check(&table)
        .with_context(|| format!("invalid data in {}", args.input.display()))?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use hurst::test_utils::random_walk;
    use hurst::Method;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hurst-run-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn walk_csv(name: &str, len: usize) -> PathBuf {
        let mut csv = String::from("temp,vibration\n");
        for (a, b) in random_walk(len, 31).into_iter().zip(random_walk(len, 32)) {
            csv.push_str(&format!("{a},{b}\n"));
        }
        write_temp(name, &csv)
    }

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        let mut out = Vec::new();
        run(&cli.command, &settings, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_estimate_report_matches_dispatcher() {
        let path = walk_csv("estimate.csv", 300);
        let out = run_args(&["hurst", "estimate", "-i", path.to_str().unwrap(), "-m", "DSOD"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        std::fs::remove_file(&path).ok();

        let expected = hurst_exponent(&random_walk(300, 32), &Default::default(), Method::DiscreteSecondOrderDerivative)
            .unwrap()
            .as_scalar()
            .unwrap();
        assert_eq!(json["method"], "DSOD");
        assert_eq!(json["rows"], 300);
        let reported = json["columns"]["vibration"].as_f64().unwrap();
        assert!((reported - expected).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_all_reports_triples() {
        let path = walk_csv("estimate-all.csv", 300);
        let out = run_args(&["hurst", "estimate", "-i", path.to_str().unwrap(), "-m", "all", "--columns", "temp"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        std::fs::remove_file(&path).ok();

        let temp = json["columns"]["temp"].as_array().unwrap();
        assert_eq!(temp.len(), 3);
        assert!(json["columns"].get("vibration").is_none());
    }

    #[test]
    fn test_rolling_writes_feature_columns() {
        let path = walk_csv("rolling.csv", 120);
        let out = run_args(&[
            "hurst",
            "rolling",
            "-i",
            path.to_str().unwrap(),
            "-m",
            "DMA",
            "--max-chunksize",
            "32",
            "--window",
            "64",
            "--stride",
            "8",
        ])
        .unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "temp,vibration,temp_hurst_dma,vibration_hurst_dma");
        assert_eq!(lines.len(), 121);
        assert!(lines[1].ends_with("NaN,NaN"));
        assert!(!lines[64].ends_with("NaN,NaN"));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let path = write_temp("bad.csv", "a\n1.0\nNaN\n");
        let err = run_args(&["hurst", "estimate", "-i", path.to_str().unwrap()]).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(format!("{err:#}").contains("Non-finite value in column a at row 1"));
    }

    #[test]
    fn test_short_input_is_an_error() {
        let path = write_temp("short.json", "[1.0, 2.0, 4.0, 3.0]");
        assert!(run_args(&["hurst", "estimate", "-i", path.to_str().unwrap(), "-m", "DMA"]).is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_config_command_prints_settings() {
        let out = run_args(&["hurst", "config", "--min-chunksize", "10"]).unwrap();
        let settings: Settings = serde_json::from_str(&out).unwrap();
        assert_eq!(settings.hurst.min_chunksize, 10);
        assert_eq!(settings.hurst.max_chunksize, 200);
    }
}
