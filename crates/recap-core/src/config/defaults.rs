// Single source of truth for all default values.

// --- Request ---
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 45 * 1024 * 1024; // 45 MiB

// --- Retry ---
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_BACKOFF_SECS: f64 = 1.5;

// --- Provider ---
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 120;

// --- Checkpoint ---
pub const DEFAULT_CHECKPOINT_ENABLED: bool = true;
pub const DEFAULT_CHECKPOINT_DIR: &str = "note_results";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
