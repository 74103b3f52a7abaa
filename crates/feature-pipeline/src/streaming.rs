//! Streaming Hurst Window
//!
//! Fixed-capacity ring of the latest samples of one channel. Once full, the
//! oldest sample is overwritten on every push.

use crate::error::PipelineError;
use hurst::{hurst_exponent, HurstConfig, HurstOutput, Method};
use tracing::trace;

/// Ring window over a single sensor channel
#[derive(Debug, Clone)]
pub struct StreamingHurst {
    /// Pre-allocated storage
    storage: Box<[f64]>,
    /// Next write position
    head: usize,
    /// Samples currently held
    len: usize,
    /// Samples pushed since creation or the last clear
    total_pushed: u64,
    method: Method,
    config: HurstConfig,
}

impl StreamingHurst {
    /// Create a window holding `capacity` samples
    pub fn new(capacity: usize, method: Method, config: HurstConfig) -> Result<Self, PipelineError> {
        if capacity == 0 {
            return Err(PipelineError::InvalidWindow("capacity must be positive".to_string()));
        }
        config.validate()?;
        Ok(Self {
            storage: vec![0.0; capacity].into_boxed_slice(),
            head: 0,
            len: 0,
            total_pushed: 0,
            method,
            config,
        })
    }

    /// Append a sample, evicting the oldest when full
    pub fn push(&mut self, value: f64) {
        let capacity = self.storage.len();
        self.storage[self.head] = value;
        self.head = (self.head + 1) % capacity;
        self.len = (self.len + 1).min(capacity);
        self.total_pushed += 1;
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no samples are held
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the window holds `capacity` samples
    pub fn is_full(&self) -> bool {
        self.len == self.storage.len()
    }

    /// Window length
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Fill ratio (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f64 {
        self.len as f64 / self.storage.len() as f64
    }

    /// Samples pushed since creation or the last clear
    pub fn total_pushed(&self) -> u64 {
        self.total_pushed
    }

    /// Held samples, oldest first
    pub fn samples(&self) -> Vec<f64> {
        let capacity = self.storage.len();
        let start = (self.head + capacity - self.len) % capacity;
        (0..self.len).map(|i| self.storage[(start + i) % capacity]).collect()
    }

    /// Drop every held sample
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
        self.total_pushed = 0;
    }

    /// Hurst exponent of the current window, `None` until it is full
    pub fn estimate(&self) -> Result<Option<HurstOutput>, PipelineError> {
        if !self.is_full() {
            trace!(fill = self.fill_ratio(), "streaming window not full yet");
            return Ok(None);
        }
        let output = hurst_exponent(&self.samples(), &self.config, self.method)?;
        Ok(Some(output))
    }
}
