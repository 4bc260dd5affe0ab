use super::error_code::{self, RecapErrorCode};
use super::{CheckpointError, ConfigError, ProviderError, SizingError};

/// Top-level error for every recap operation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RecapError {
    #[error("sizing error: {0}")]
    Sizing(#[from] SizingError),

    /// The provider's own error, exactly as its last attempt returned it.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("checkpoint error: {0}")]
    Checkpoint(#[from] CheckpointError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("job has no segments and no images")]
    EmptySource,

    #[error("job aborted: {reason}")]
    JobAborted { reason: String },
}

impl RecapErrorCode for RecapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Sizing(e) => e.error_code(),
            Self::Provider(e) => e.error_code(),
            Self::Checkpoint(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::EmptySource => error_code::EMPTY_SOURCE,
            Self::JobAborted { .. } => error_code::JOB_ABORTED,
        }
    }
}

/// Convenience alias used across the workspace.
pub type RecapResult<T> = Result<T, RecapError>;
