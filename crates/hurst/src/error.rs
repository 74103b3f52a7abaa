//! Hurst Estimation Error Types

use thiserror::Error;

/// Errors raised by the Hurst estimators and the dispatcher
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HurstError {
    /// Method name does not map to an estimator
    #[error("Hurst method '{0}' is not implemented (expected RS, DMA, DSOD or all)")]
    MethodNotImplemented(String),

    /// Series too short for the requested chunk bounds
    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Chunk parameters cannot produce a valid schedule
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
