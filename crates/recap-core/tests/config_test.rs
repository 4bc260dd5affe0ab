use std::collections::HashMap;
use std::io::Write;

use recap_core::config::*;
use recap_core::errors::ConfigError;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = RecapConfig::from_toml("").unwrap();

    // Request defaults
    assert_eq!(config.request.max_request_bytes, 45 * 1024 * 1024);

    // Retry defaults
    assert_eq!(config.retry.max_attempts, 3);
    assert!((config.retry.base_backoff_secs - 1.5).abs() < f64::EPSILON);
    assert_eq!(config.retry.base_backoff().as_millis(), 1500);

    // Provider defaults
    assert_eq!(config.provider.model, "gpt-4o-mini");
    assert!((config.provider.temperature - 0.7).abs() < f64::EPSILON);
    assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");

    // Checkpoint defaults
    assert!(config.checkpoint.enabled);
    assert_eq!(config.checkpoint.dir.to_str(), Some("note_results"));

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[request]
max_request_bytes = 1048576

[retry]
max_attempts = 5
"#;
    let config = RecapConfig::from_toml(toml).unwrap();
    assert_eq!(config.request.max_request_bytes, 1_048_576);
    assert_eq!(config.retry.max_attempts, 5);
    // Non-overridden fields keep defaults
    assert!((config.retry.base_backoff_secs - 1.5).abs() < f64::EPSILON);
    assert_eq!(config.provider.model, "gpt-4o-mini");
}

#[test]
fn config_rejects_malformed_toml() {
    let err = RecapConfig::from_toml("[retry\nmax_attempts = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn env_overrides_take_precedence_over_file_values() {
    let mut config = RecapConfig::from_toml("[retry]\nmax_attempts = 7").unwrap();
    config.apply_env_overrides(lookup_from(&[
        ("RECAP_RETRY_ATTEMPTS", "2"),
        ("RECAP_RETRY_BACKOFF_SECONDS", "0.25"),
        ("RECAP_MAX_REQUEST_BYTES", "4096"),
        ("RECAP_MODEL", "qwen-vl-max"),
        ("RECAP_CHECKPOINT_DIR", "/tmp/recap-ckpt"),
    ]));
    assert_eq!(config.retry.max_attempts, 2);
    assert!((config.retry.base_backoff_secs - 0.25).abs() < f64::EPSILON);
    assert_eq!(config.request.max_request_bytes, 4096);
    assert_eq!(config.provider.model, "qwen-vl-max");
    assert_eq!(config.checkpoint.dir.to_str(), Some("/tmp/recap-ckpt"));
}

#[test]
fn unparsable_env_values_are_ignored() {
    let mut config = RecapConfig::default();
    config.apply_env_overrides(lookup_from(&[
        ("RECAP_RETRY_ATTEMPTS", "three"),
        ("RECAP_TEMPERATURE", "warm"),
    ]));
    assert_eq!(config.retry.max_attempts, 3);
    assert!((config.provider.temperature - 0.7).abs() < f64::EPSILON);
}

#[test]
fn validation_rejects_zero_budget() {
    let config = RecapConfig::from_toml("[request]\nmax_request_bytes = 0").unwrap();
    match config.validate() {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "request.max_request_bytes");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn validation_rejects_zero_attempts_and_negative_backoff() {
    let config = RecapConfig::from_toml("[retry]\nmax_attempts = 0").unwrap();
    assert!(config.validate().is_err());

    let config = RecapConfig::from_toml("[retry]\nbase_backoff_secs = -1.0").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_out_of_range_temperature() {
    let config = RecapConfig::from_toml("[provider]\ntemperature = 3.5").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[checkpoint]\ndir = \"state/checkpoints\"\nenabled = false").unwrap();
    let config = RecapConfig::from_file(file.path()).unwrap();
    assert!(!config.checkpoint.enabled);
    assert_eq!(config.checkpoint.dir.to_str(), Some("state/checkpoints"));
}

#[test]
fn missing_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = RecapConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = RecapConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = RecapConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.request.max_request_bytes,
        config.request.max_request_bytes
    );
    assert_eq!(roundtripped.provider.base_url, config.provider.base_url);
}
