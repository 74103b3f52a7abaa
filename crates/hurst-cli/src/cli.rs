//! Command-line arguments

use crate::input::InputFormat;
use crate::settings::Settings;
use clap::{Args, Parser, Subcommand};
use hurst::Method;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hurst")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hurst-exponent features for degradation sensor logs", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `hurst=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Estimate the Hurst exponent of every column
    Estimate {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        estimator: EstimatorArgs,
    },

    /// Append rolling-window Hurst features and write CSV to stdout
    Rolling {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        estimator: EstimatorArgs,

        /// Trailing window length in rows
        #[arg(short, long)]
        window: Option<usize>,

        /// Rows between emitted values
        #[arg(short, long)]
        stride: Option<usize>,
    },

    /// Print the effective configuration
    Config {
        #[command(flatten)]
        estimator: EstimatorArgs,
    },
}

/// Sensor log selection
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input file (CSV with header row, or JSON)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Input format, inferred from the extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// Only these columns (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,
}

/// Estimator overrides
#[derive(Debug, Default, Args)]
pub struct EstimatorArgs {
    /// RS, DMA, DSOD or all
    #[arg(short, long)]
    pub method: Option<Method>,

    #[arg(long)]
    pub min_chunksize: Option<usize>,

    #[arg(long)]
    pub max_chunksize: Option<usize>,

    /// Number of chunk sizes in the R/S schedule
    #[arg(long)]
    pub rs_schedule_points: Option<usize>,

    /// Step between DMA window lengths
    #[arg(long)]
    pub dma_schedule_step: Option<usize>,
}

impl EstimatorArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(method) = self.method {
            settings.method = method;
        }
        let hurst = &mut settings.hurst;
        if let Some(v) = self.min_chunksize {
            hurst.min_chunksize = v;
        }
        if let Some(v) = self.max_chunksize {
            hurst.max_chunksize = v;
        }
        if let Some(v) = self.rs_schedule_points {
            hurst.rs_schedule_points = v;
        }
        if let Some(v) = self.dma_schedule_step {
            hurst.dma_schedule_step = v;
        }
    }
}

impl Cli {
    /// Layer command-line flags over loaded settings
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(level) = &self.log_level {
            settings.logging.level = level.clone();
        }
        if self.log_json {
            settings.logging.json = true;
        }

        match &self.command {
            Commands::Estimate { estimator, .. } | Commands::Config { estimator } => estimator.apply(settings),
            Commands::Rolling {
                estimator,
                window,
                stride,
                ..
            } => {
                estimator.apply(settings);
                if let Some(window) = *window {
                    settings.rolling.window = window;
                }
                if let Some(stride) = *stride {
                    settings.rolling.stride = stride;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_estimate() {
        let cli = Cli::try_parse_from([
            "hurst", "estimate", "-i", "log.csv", "-m", "all", "--columns", "temp,rpm",
        ])
        .unwrap();
        match cli.command {
            Commands::Estimate { input, estimator } => {
                assert_eq!(input.input, PathBuf::from("log.csv"));
                assert_eq!(input.columns, vec!["temp", "rpm"]);
                assert_eq!(estimator.method, Some(Method::All));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_method_rejected() {
        assert!(Cli::try_parse_from(["hurst", "estimate", "-i", "x.csv", "-m", "bogus"]).is_err());
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["hurst", "rolling", "-i", "x.txt", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Rolling { input, .. } => assert_eq!(input.format, Some(InputFormat::Json)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::try_parse_from([
            "hurst",
            "rolling",
            "-i",
            "x.csv",
            "--max-chunksize",
            "64",
            "--window",
            "100",
            "--log-json",
            "--config",
            "hurst.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("hurst.toml")));

        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.hurst.max_chunksize, 64);
        assert_eq!(settings.hurst.min_chunksize, 8);
        assert_eq!(settings.rolling.window, 100);
        assert_eq!(settings.rolling.stride, 1);
        assert!(settings.logging.json);
        assert_eq!(settings.method, Method::RescaledRange);
    }
}
