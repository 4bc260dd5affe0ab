use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use recap_core::config::RetryConfig;

use crate::classify::RetryClassify;
use crate::sleeper::{Sleeper, ThreadSleeper};

/// Bounded retry with exponential backoff.
///
/// Attempt `n` (zero-indexed) that fails with a retryable error, and is not
/// the last attempt, is followed by a sleep of `base_backoff * 2^n`.
#[derive(Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_backoff: Duration,
    sleeper: Arc<dyn Sleeper>,
}

impl std::fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("base_backoff", &self.base_backoff)
            .finish_non_exhaustive()
    }
}

impl RetryPolicy {
    /// `max_attempts` below 1 is raised to 1.
    pub fn new(max_attempts: u32, base_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_backoff,
            sleeper: Arc::new(ThreadSleeper),
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, config.base_backoff())
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_backoff(&self) -> Duration {
        self.base_backoff
    }

    /// Delay after failed attempt `attempt` (zero-indexed).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.base_backoff.saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Run `call` until it succeeds, fails fatally, or attempts run out.
    ///
    /// `call` receives the zero-indexed attempt number. The error returned is
    /// the one produced by the final attempt, unmodified.
    pub fn execute<T, E, F>(&self, operation: &str, mut call: F) -> Result<T, E>
    where
        E: RetryClassify + Display,
        F: FnMut(u32) -> Result<T, E>,
    {
        let mut attempt = 0;
        loop {
            let err = match call(attempt) {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if err.is_quota_exhausted() {
                warn!(operation, attempt = attempt + 1, error = %err, "provider quota exhausted, not retrying");
                return Err(err);
            }
            if !err.is_retryable() {
                return Err(err);
            }
            if attempt + 1 >= self.max_attempts {
                warn!(
                    operation,
                    attempts = self.max_attempts,
                    error = %err,
                    "retries exhausted"
                );
                return Err(err);
            }

            let delay = self.backoff_for(attempt);
            warn!(
                operation,
                attempt = attempt + 1,
                max_attempts = self.max_attempts,
                backoff_ms = delay.as_millis() as u64,
                error = %err,
                "transient failure, retrying"
            );
            self.sleeper.sleep(delay);
            attempt += 1;
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}
