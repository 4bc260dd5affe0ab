//! Error handling for recap.
//! One error enum per subsystem, `thiserror` only, aggregated into `RecapError`.

pub mod checkpoint_error;
pub mod config_error;
pub mod error_code;
pub mod provider_error;
pub mod recap_error;
pub mod sizing_error;

pub use checkpoint_error::CheckpointError;
pub use config_error::ConfigError;
pub use error_code::RecapErrorCode;
pub use provider_error::ProviderError;
pub use recap_error::{RecapError, RecapResult};
pub use sizing_error::SizingError;
