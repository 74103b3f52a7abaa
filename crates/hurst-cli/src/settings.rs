//! Layered CLI Settings
//!
//! Loaded in order:
//! 1. built-in defaults
//! 2. optional config file (TOML, JSON or YAML, by extension)
//! 3. environment variables with the `HURST_` prefix, `__` between nested keys
//!    (`HURST_HURST__MAX_CHUNKSIZE=120`)
//!
//! Command-line flags are applied on top by the caller.

use config::{Config, ConfigError, Environment, File};
use feature_pipeline::{RollingConfig, ValidationConfig};
use hurst::{HurstConfig, Method};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "HURST";

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of plain text
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Rolling window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub window: usize,
    pub stride: usize,
}

impl Default for WindowSettings {
    fn default() -> Self {
        let rolling = RollingConfig::default();
        Self {
            window: rolling.window,
            stride: rolling.stride,
        }
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub method: Method,
    pub hurst: HurstConfig,
    pub rolling: WindowSettings,
    pub validation: ValidationConfig,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load defaults, then `file`, then the process environment
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(file, environment())
    }

    /// Load with an explicit environment source
    pub fn load_with(file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }
        builder.add_source(env).build()?.try_deserialize()
    }

    /// Rolling extractor configuration for the given columns
    pub fn rolling_config(&self, columns: Vec<String>) -> RollingConfig {
        RollingConfig {
            window: self.rolling.window,
            stride: self.rolling.stride,
            method: self.method,
            columns,
            hurst: self.hurst,
        }
    }
}

/// `HURST_*` environment source
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
