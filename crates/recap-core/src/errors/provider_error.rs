//! Errors returned by completion providers.

use super::error_code::{self, RecapErrorCode};

/// A failed completion call.
///
/// Messages carry the provider's original wording; retry classification
/// inspects both the variant and the text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("connection error: {reason}")]
    Connection { reason: String },

    #[error("request timed out: {reason}")]
    Timeout { reason: String },

    #[error("Error code: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("{message}")]
    Api { message: String },

    #[error("invalid response: {reason}")]
    InvalidResponse { reason: String },
}

impl ProviderError {
    /// HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Shorthand for an opaque provider message.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }
}

impl RecapErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Connection { .. } => error_code::PROVIDER_CONNECTION,
            Self::Timeout { .. } => error_code::PROVIDER_TIMEOUT,
            Self::Status { .. } => error_code::PROVIDER_STATUS,
            Self::Api { .. } => error_code::PROVIDER_ERROR,
            Self::InvalidResponse { .. } => error_code::INVALID_RESPONSE,
        }
    }
}
