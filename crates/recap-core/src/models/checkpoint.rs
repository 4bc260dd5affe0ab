use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which reduction stage a checkpoint was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckpointPhase {
    Summarize,
    Merge,
}

impl CheckpointPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summarize => "summarize",
            Self::Merge => "merge",
        }
    }
}

impl fmt::Display for CheckpointPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable snapshot of a job's in-progress partial results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub version: u32,
    /// Hex digest of the job's inputs and config at write time.
    pub source_signature: String,
    pub phase: CheckpointPhase,
    pub partials: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle of one job run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobPhase {
    #[default]
    Idle,
    Summarize,
    Merge,
    Done,
}

impl JobPhase {
    /// Whether `next` is a legal successor of this phase.
    ///
    /// Summarize may be skipped when resuming from a merge checkpoint, and
    /// merge is skipped when a single partial remains.
    pub fn can_advance_to(&self, next: JobPhase) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Summarize)
                | (Self::Idle, Self::Merge)
                | (Self::Summarize, Self::Merge)
                | (Self::Summarize, Self::Done)
                | (Self::Merge, Self::Done)
        )
    }
}
