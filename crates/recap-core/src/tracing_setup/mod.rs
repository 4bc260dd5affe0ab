//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding per-target log directives.
pub const LOG_ENV_VAR: &str = "RECAP_LOG";

/// Initialize the recap tracing/logging system.
///
/// Reads `RECAP_LOG` for per-crate log levels.
/// Format: `RECAP_LOG=recap_pipeline=debug,recap_retry=info`
///
/// Falls back to `recap=info` if `RECAP_LOG` is not set or is invalid.
///
/// This function is idempotent; only the first call installs a subscriber.
pub fn init_tracing() {
    init_from_config(&ObservabilityConfig::default());
}

/// Initialize tracing using `config` for the fallback level and output format.
pub fn init_from_config(config: &ObservabilityConfig) {
    let fallback = format!("recap={}", config.log_level);
    let json = config.json_logs;
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&fallback));
        install(filter, json);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str, json: bool) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter, json));
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    };
    // Another subscriber may already be installed by the embedding application.
    let _ = result;
}
