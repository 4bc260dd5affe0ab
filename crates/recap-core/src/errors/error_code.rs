//! RecapErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to give callers a structured code
/// string that survives message wording changes.
pub trait RecapErrorCode {
    /// Returns the error code string (e.g., "SIZING_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SIZING_ERROR: &str = "SIZING_ERROR";
pub const PROVIDER_ERROR: &str = "PROVIDER_ERROR";
pub const PROVIDER_TIMEOUT: &str = "PROVIDER_TIMEOUT";
pub const PROVIDER_CONNECTION: &str = "PROVIDER_CONNECTION";
pub const PROVIDER_STATUS: &str = "PROVIDER_STATUS";
pub const INVALID_RESPONSE: &str = "INVALID_RESPONSE";
pub const CHECKPOINT_ERROR: &str = "CHECKPOINT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EMPTY_SOURCE: &str = "EMPTY_SOURCE";
pub const JOB_ABORTED: &str = "JOB_ABORTED";
