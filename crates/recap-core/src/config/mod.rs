//! Configuration system for recap.
//! TOML-based, layered resolution: env > config file > compiled defaults.

pub mod checkpoint_config;
pub mod defaults;
pub mod observability_config;
pub mod provider_config;
pub mod recap_config;
pub mod request_config;
pub mod retry_config;

pub use checkpoint_config::CheckpointConfig;
pub use observability_config::ObservabilityConfig;
pub use provider_config::ProviderConfig;
pub use recap_config::RecapConfig;
pub use request_config::RequestConfig;
pub use retry_config::RetryConfig;
