//! Chunk-size configuration shared by the windowed estimators

use crate::error::HurstError;
use serde::{Deserialize, Serialize};

/// Chunk bounds and schedule density for the R/S and DMA estimators
///
/// The two schedule parameters are deliberately separate: R/S spreads a fixed
/// *number* of chunk sizes across the bounds, DMA walks the bounds with a fixed
/// *step*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HurstConfig {
    /// Smallest chunk size (inclusive)
    pub min_chunksize: usize,
    /// Largest chunk size (inclusive, the schedules end at `max_chunksize + 1`)
    pub max_chunksize: usize,
    /// Number of chunk sizes in the R/S schedule
    pub rs_schedule_points: usize,
    /// Distance between consecutive window lengths in the DMA schedule
    pub dma_schedule_step: usize,
}

impl Default for HurstConfig {
    fn default() -> Self {
        Self {
            min_chunksize: 8,
            max_chunksize: 200,
            rs_schedule_points: 5,
            dma_schedule_step: 5,
        }
    }
}

impl HurstConfig {
    /// Few, widely spaced chunk sizes (cheap, noisier)
    pub fn coarse() -> Self {
        Self {
            rs_schedule_points: 3,
            dma_schedule_step: 16,
            ..Default::default()
        }
    }

    /// Dense schedules (slower, smoother regression)
    pub fn fine() -> Self {
        Self {
            rs_schedule_points: 16,
            dma_schedule_step: 2,
            ..Default::default()
        }
    }

    /// Check the bounds can produce a usable schedule
    pub fn validate(&self) -> Result<(), HurstError> {
        if self.min_chunksize < 2 {
            return Err(HurstError::InvalidConfig(format!(
                "min_chunksize must be at least 2, got {}",
                self.min_chunksize
            )));
        }
        if self.min_chunksize > self.max_chunksize {
            return Err(HurstError::InvalidConfig(format!(
                "min_chunksize {} exceeds max_chunksize {}",
                self.min_chunksize, self.max_chunksize
            )));
        }
        // no slice is longer than isize::MAX, and the schedules run to max + 1
        if self.max_chunksize > isize::MAX as usize {
            return Err(HurstError::InvalidConfig(format!(
                "max_chunksize {} exceeds the largest series length",
                self.max_chunksize
            )));
        }
        if self.rs_schedule_points < 2 {
            return Err(HurstError::InvalidConfig(format!(
                "rs_schedule_points must be at least 2, got {}",
                self.rs_schedule_points
            )));
        }
        if self.dma_schedule_step == 0 {
            return Err(HurstError::InvalidConfig(
                "dma_schedule_step must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Exclusive upper bound used by both schedules
    pub fn chunk_end(&self) -> usize {
        self.max_chunksize.saturating_add(1)
    }
}
