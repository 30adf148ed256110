//! Pipeline configuration.

use core::ops::RangeInclusive;
use core::time::Duration;

use crate::error::{Error, ErrorKind, Result};
use crate::{DEFAULT_COUNT, DEFAULT_FIRST_VALUE, DEFAULT_INTERVAL_MS};

/// Settings for one producer/consumer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// First value written by the producer.
    pub first: u32,
    /// Number of consecutive values to write. Zero is a valid, empty run.
    pub count: u32,
    /// Pause after each write.
    pub interval: Duration,
}

impl PipelineConfig {
    /// Default run: values 1 through 5, 500 ms apart.
    pub fn new() -> Self {
        Self {
            first: DEFAULT_FIRST_VALUE,
            count: DEFAULT_COUNT,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }

    /// Sets the first value.
    pub fn with_first(mut self, first: u32) -> Self {
        self.first = first;
        self
    }

    /// Sets how many values are written.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the pause after each write.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Checks that the last value still fits in a `u32`.
    pub fn validate(&self) -> Result<()> {
        if self.count > 0 && self.first.checked_add(self.count - 1).is_none() {
            return Err(Error::new(ErrorKind::InvalidConfig));
        }
        Ok(())
    }

    /// Values the producer writes, in order. Empty when `count` is zero.
    pub fn values(&self) -> RangeInclusive<u32> {
        match self.count {
            // 1..=0 is the canonical empty inclusive range
            0 => 1..=0,
            n => self.first..=self.first.saturating_add(n - 1),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}
