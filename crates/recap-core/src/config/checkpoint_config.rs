use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Checkpoint persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckpointConfig {
    /// Disable to run jobs without any on-disk state.
    pub enabled: bool,
    /// Directory holding one `<key>.checkpoint.json` per in-progress job.
    pub dir: PathBuf,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_CHECKPOINT_ENABLED,
            dir: PathBuf::from(defaults::DEFAULT_CHECKPOINT_DIR),
        }
    }
}
