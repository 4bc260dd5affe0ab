use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Retry policy for provider calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts per call, including the first. Default: 3.
    pub max_attempts: u32,
    /// Backoff before retry `n` (zero-indexed) is `base_backoff_secs * 2^n`. Default: 1.5.
    pub base_backoff_secs: f64,
}

impl RetryConfig {
    pub fn base_backoff(&self) -> Duration {
        Duration::try_from_secs_f64(self.base_backoff_secs.max(0.0)).unwrap_or(Duration::ZERO)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::DEFAULT_RETRY_ATTEMPTS,
            base_backoff_secs: defaults::DEFAULT_RETRY_BACKOFF_SECS,
        }
    }
}
