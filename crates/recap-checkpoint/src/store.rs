//! File-backed checkpoint store.
//!
//! Layout: `<dir>/<sanitized_key>.checkpoint.json`, staged through
//! `<dir>/<sanitized_key>.checkpoint.json.tmp` and renamed into place so a
//! reader never observes a half-written file.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, warn};

use recap_core::constants::{CHECKPOINT_FILE_SUFFIX, CHECKPOINT_FORMAT_VERSION, CHECKPOINT_TMP_SUFFIX};
use recap_core::errors::CheckpointError;
use recap_core::models::{Checkpoint, CheckpointPhase};

use crate::key::sanitize_key;
use crate::signature::SourceSignature;

#[derive(Debug, Clone)]
pub struct CheckpointStore {
    dir: PathBuf,
}

impl CheckpointStore {
    /// Open a store rooted at `dir`, creating the directory tree if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CheckpointError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}{}", sanitize_key(key), CHECKPOINT_FILE_SUFFIX))
    }

    fn tmp_path_for(&self, key: &str) -> PathBuf {
        let mut path = self.path_for(key).into_os_string();
        path.push(CHECKPOINT_TMP_SUFFIX);
        PathBuf::from(path)
    }

    /// Atomically replace the checkpoint for `key`.
    pub fn write(
        &self,
        key: &str,
        signature: &SourceSignature,
        partials: &[String],
        phase: CheckpointPhase,
    ) -> Result<Checkpoint, CheckpointError> {
        let checkpoint = Checkpoint {
            version: CHECKPOINT_FORMAT_VERSION,
            source_signature: signature.as_str().to_string(),
            phase,
            partials: partials.to_vec(),
            updated_at: Utc::now(),
        };
        let body = serde_json::to_vec_pretty(&checkpoint).map_err(|e| CheckpointError::Serialization {
            reason: e.to_string(),
        })?;

        let path = self.path_for(key);
        let tmp = self.tmp_path_for(key);
        if let Err(e) = stage(&tmp, &body) {
            let _ = fs::remove_file(&tmp);
            return Err(io_error(&tmp, e));
        }
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(io_error(&path, e));
        }

        debug!(
            key,
            phase = %phase,
            partials = partials.len(),
            "checkpoint written"
        );
        Ok(checkpoint)
    }

    /// Load the checkpoint for `key` if it is usable for `signature`.
    ///
    /// A file that does not parse, carries another format version, or was
    /// written for a different signature is deleted and `None` returned.
    pub fn read(&self, key: &str, signature: &SourceSignature) -> Option<Checkpoint> {
        let path = self.path_for(key);
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(key, path = %path.display(), error = %e, "checkpoint unreadable, ignoring");
                return None;
            }
        };

        let checkpoint: Checkpoint = match serde_json::from_slice(&raw) {
            Ok(cp) => cp,
            Err(e) => {
                warn!(key, error = %e, "checkpoint corrupt, discarding");
                self.discard(key, &path);
                return None;
            }
        };

        if checkpoint.version != CHECKPOINT_FORMAT_VERSION {
            warn!(
                key,
                found = checkpoint.version,
                expected = CHECKPOINT_FORMAT_VERSION,
                "checkpoint format version unsupported, discarding"
            );
            self.discard(key, &path);
            return None;
        }

        if checkpoint.source_signature != signature.as_str() {
            info!(key, "checkpoint signature mismatch, source changed; discarding");
            self.discard(key, &path);
            return None;
        }

        debug!(
            key,
            phase = %checkpoint.phase,
            partials = checkpoint.partials.len(),
            "checkpoint loaded"
        );
        Some(checkpoint)
    }

    /// Delete the checkpoint for `key`. Missing files are not an error.
    pub fn clear(&self, key: &str) -> Result<(), CheckpointError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "checkpoint cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    fn discard(&self, key: &str, path: &Path) {
        if let Err(e) = fs::remove_file(path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(key, path = %path.display(), error = %e, "failed to delete checkpoint");
            }
        }
    }
}

fn stage(tmp: &Path, body: &[u8]) -> io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(body)?;
    file.sync_all()
}

fn io_error(path: &Path, source: io::Error) -> CheckpointError {
    CheckpointError::Io {
        path: path.display().to_string(),
        source,
    }
}
