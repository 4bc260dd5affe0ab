use recap_core::errors::RecapResult;
use recap_core::models::{CheckpointPhase, ChunkPayload, JobContext};
use tracing::{debug, warn};

use super::Stage;
use crate::checkpointing::JobCheckpointer;
use crate::engine::JobReport;

/// Summarize every chunk after the `partials` already done.
///
/// Checkpoints the full partial list after each success. On failure the
/// pre-chunk list is persisted and the provider error returned.
pub(crate) fn summarize_chunks(
    stage: &Stage<'_>,
    chunks: &[ChunkPayload],
    mut partials: Vec<String>,
    ctx: &JobContext,
    checkpointer: &JobCheckpointer<'_>,
    report: &mut JobReport,
) -> RecapResult<Vec<String>> {
    let total = chunks.len();
    for (index, chunk) in chunks.iter().enumerate().skip(partials.len()) {
        let request = stage.message_builder.build(&chunk.segments, &chunk.image_urls, ctx);
        match stage.complete("summarize", &request) {
            Ok(text) => {
                partials.push(text);
                report.calls += 1;
                checkpointer.save(&partials, CheckpointPhase::Summarize);
                debug!(chunk = index, total, images = chunk.image_urls.len(), "chunk summarized");
            }
            Err(e) => {
                warn!(chunk = index, total, error = %e, "chunk summarization failed");
                checkpointer.save(&partials, CheckpointPhase::Summarize);
                return Err(e.into());
            }
        }
    }
    Ok(partials)
}
