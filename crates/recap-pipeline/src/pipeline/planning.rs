use recap_chunking::RequestChunker;
use recap_core::errors::SizingError;
use recap_core::models::{Checkpoint, CheckpointPhase, ChunkPayload};
use recap_core::JobSource;
use tracing::{info, warn};

/// Chunk with images first; if that cannot fit, chunk the segments alone.
///
/// A failure of the image-free attempt propagates.
pub(crate) fn plan_chunks(
    chunker: &RequestChunker<'_>,
    source: &JobSource,
) -> Result<Vec<ChunkPayload>, SizingError> {
    match chunker.chunk(&source.segments, &source.image_urls, &source.context) {
        Ok(chunks) => Ok(chunks),
        Err(e) if !source.image_urls.is_empty() => {
            warn!(
                images = source.image_urls.len(),
                error = %e,
                "chunking with images failed, retrying without images"
            );
            chunker.chunk(&source.segments, &[], &source.context)
        }
        Err(e) => Err(e),
    }
}

/// Where a job picks up given its stored checkpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resume {
    Fresh,
    /// Summaries of the first `n` chunks.
    Summarize(Vec<String>),
    /// A complete merge input; summarizing is skipped.
    Merge(Vec<String>),
}

impl Resume {
    pub(crate) fn restored(&self) -> usize {
        match self {
            Self::Fresh => 0,
            Self::Summarize(p) | Self::Merge(p) => p.len(),
        }
    }
}

pub(crate) fn resume_point(checkpoint: Option<Checkpoint>, chunk_count: usize) -> Resume {
    let Some(checkpoint) = checkpoint else {
        return Resume::Fresh;
    };
    let stored = checkpoint.partials.len();
    match checkpoint.phase {
        CheckpointPhase::Summarize if stored == 0 => Resume::Fresh,
        CheckpointPhase::Summarize if stored <= chunk_count => {
            info!(stored, chunk_count, "resuming summarize phase");
            Resume::Summarize(checkpoint.partials)
        }
        CheckpointPhase::Summarize => {
            info!(stored, chunk_count, "checkpoint holds more partials than chunks, restarting");
            Resume::Fresh
        }
        CheckpointPhase::Merge if stored == 0 => Resume::Fresh,
        CheckpointPhase::Merge => {
            info!(stored, "resuming merge phase");
            Resume::Merge(checkpoint.partials)
        }
    }
}
