//! Transient vs. fatal classification of provider failures.

use std::sync::LazyLock;

use regex::Regex;

use recap_core::errors::{ProviderError, RecapError};

/// HTTP statuses worth another attempt.
pub const RETRYABLE_STATUSES: [u16; 8] = [408, 409, 429, 500, 502, 503, 504, 524];

/// Lowercase fragments of provider messages that signal a transient failure.
const RETRYABLE_FRAGMENTS: &[&str] = &[
    "error code: 524",
    "bad_response_status_code",
    "timed out",
    "timeout",
    "rate limit",
    "error code: 429",
    "error code: 500",
    "error code: 502",
    "error code: 503",
    "error code: 504",
    "apiconnectionerror",
    "connection error",
    "service unavailable",
];

/// Lowercase fragments of quota-exhaustion messages.
const QUOTA_FRAGMENTS: &[&str] = &["insufficient_user_quota", "预扣费额度失败", "insufficient quota"];

static STATUS_IN_MESSAGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)error code:\s*(\d{3})").ok());

/// Pull an `error code: NNN` status out of a free-form message.
pub fn status_in_message(message: &str) -> Option<u16> {
    let re = STATUS_IN_MESSAGE.as_ref()?;
    re.captures(message)?.get(1)?.as_str().parse().ok()
}

pub fn is_quota_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    QUOTA_FRAGMENTS.iter().any(|f| lower.contains(f))
}

/// Whether a message names a transient failure. Quota messages never do.
pub fn is_retryable_message(message: &str) -> bool {
    if is_quota_message(message) {
        return false;
    }
    if status_in_message(message).is_some_and(|s| RETRYABLE_STATUSES.contains(&s)) {
        return true;
    }
    let lower = message.to_lowercase();
    RETRYABLE_FRAGMENTS.iter().any(|f| lower.contains(f))
}

/// Failure classification used by [`crate::RetryPolicy`].
pub trait RetryClassify {
    fn is_retryable(&self) -> bool;
    fn is_quota_exhausted(&self) -> bool;
}

impl RetryClassify for ProviderError {
    fn is_retryable(&self) -> bool {
        if self.is_quota_exhausted() {
            return false;
        }
        match self {
            Self::Connection { .. } | Self::Timeout { .. } => true,
            Self::Status { status, .. } if RETRYABLE_STATUSES.contains(status) => true,
            _ => is_retryable_message(&self.to_string()),
        }
    }

    fn is_quota_exhausted(&self) -> bool {
        is_quota_message(&self.to_string())
    }
}

impl RetryClassify for RecapError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Provider(e) => e.is_retryable(),
            _ => false,
        }
    }

    fn is_quota_exhausted(&self) -> bool {
        match self {
            Self::Provider(e) => e.is_quota_exhausted(),
            _ => false,
        }
    }
}
