//! Hurst Feature Pipeline
//!
//! Labeled sensor tables, validation, and rolling/streaming Hurst-exponent
//! features for degradation models.

mod error;
mod rolling;
mod streaming;
mod table;
mod validator;

pub use error::PipelineError;
pub use rolling::{RollingConfig, RollingHurst};
pub use streaming::StreamingHurst;
pub use table::SensorTable;
pub use validator::{validate_table, TableValidator, ValidationConfig, ValidationResult};
