//! Top-level recap configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    CheckpointConfig, ObservabilityConfig, ProviderConfig, RequestConfig, RetryConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RECAP_*`)
/// 2. Config file (TOML)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecapConfig {
    pub request: RequestConfig,
    pub retry: RetryConfig,
    pub provider: ProviderConfig,
    pub checkpoint: CheckpointConfig,
    pub observability: ObservabilityConfig,
}

impl RecapConfig {
    /// Load configuration: defaults, then `path` if given, then the process
    /// environment. The result is validated before it is returned.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `RECAP_*` overrides read through `lookup`.
    ///
    /// Values that fail to parse are ignored and the previous value kept.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("RECAP_MAX_REQUEST_BYTES").and_then(|v| v.parse().ok()) {
            self.request.max_request_bytes = v;
        }
        if let Some(v) = lookup("RECAP_RETRY_ATTEMPTS").and_then(|v| v.parse().ok()) {
            self.retry.max_attempts = v;
        }
        if let Some(v) = lookup("RECAP_RETRY_BACKOFF_SECONDS").and_then(|v| v.parse().ok()) {
            self.retry.base_backoff_secs = v;
        }
        if let Some(v) = lookup("RECAP_MODEL") {
            self.provider.model = v;
        }
        if let Some(v) = lookup("RECAP_TEMPERATURE").and_then(|v| v.parse().ok()) {
            self.provider.temperature = v;
        }
        if let Some(v) = lookup("RECAP_BASE_URL") {
            self.provider.base_url = v;
        }
        if let Some(v) = lookup("RECAP_CHECKPOINT_DIR") {
            self.checkpoint.dir = PathBuf::from(v);
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request.max_request_bytes == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "request.max_request_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retry.max_attempts".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let backoff = self.retry.base_backoff_secs;
        if !backoff.is_finite() || backoff < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "retry.base_backoff_secs".to_string(),
                message: "must be a finite, non-negative number of seconds".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.provider.temperature) {
            return Err(ConfigError::ValidationFailed {
                field: "provider.temperature".to_string(),
                message: "must be between 0.0 and 2.0".to_string(),
            });
        }
        if self.provider.model.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "provider.model".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
