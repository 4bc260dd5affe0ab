/// Checkpoint persistence errors.
///
/// Never surfaced to a job's caller: the engine logs them and carries on.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    #[error("checkpoint I/O failed at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("checkpoint serialization failed: {reason}")]
    Serialization { reason: String },
}

impl super::RecapErrorCode for CheckpointError {
    fn error_code(&self) -> &'static str {
        super::error_code::CHECKPOINT_ERROR
    }
}
