use serde::{Deserialize, Serialize};

use super::defaults;

/// Outbound request sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Hard ceiling on the serialized size of one request, in bytes.
    pub max_request_bytes: usize,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_request_bytes: defaults::DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}
