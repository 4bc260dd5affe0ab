//! Summarize-then-merge job pipeline.
//!
//! Plan → (resume) → Summarize → Merge → Done. Each stage checkpoints after
//! every successful provider call.

pub(crate) mod merge;
pub(crate) mod planning;
pub(crate) mod summarize;

use recap_chunking::RequestChunker;
use recap_core::errors::{ProviderError, RecapError, RecapResult};
use recap_core::models::{ChatRequest, JobPhase};
use recap_core::traits::{ICompletionProvider, IMessageBuilder, ISizeEstimator, ITextMessageBuilder};
use recap_core::JobSource;
use recap_retry::RetryPolicy;
use tracing::info;

use crate::checkpointing::JobCheckpointer;
use crate::engine::JobReport;
use planning::Resume;

/// Everything a stage needs to issue provider calls.
pub(crate) struct Stage<'a> {
    pub provider: &'a dyn ICompletionProvider,
    pub model: &'a str,
    pub temperature: f64,
    pub retry: &'a RetryPolicy,
    pub message_builder: &'a dyn IMessageBuilder,
    pub merge_builder: &'a dyn ITextMessageBuilder,
    pub estimator: &'a dyn ISizeEstimator,
    pub max_bytes: usize,
}

impl Stage<'_> {
    /// One retried completion call; returns the trimmed response text.
    pub(crate) fn complete(&self, operation: &str, request: &ChatRequest) -> Result<String, ProviderError> {
        self.retry
            .execute(operation, |_| {
                self.provider.complete(self.model, request, self.temperature)
            })
            .map(|completion| completion.text.trim().to_string())
    }
}

pub(crate) fn advance(report: &mut JobReport, next: JobPhase) {
    debug_assert!(
        report.phase.can_advance_to(next),
        "illegal phase transition {:?} -> {:?}",
        report.phase,
        next
    );
    info!(from = ?report.phase, to = ?next, "job phase");
    report.phase = next;
}

/// Run one job to completion.
pub(crate) fn run_pipeline(
    stage: &Stage<'_>,
    source: &JobSource,
    checkpointer: &JobCheckpointer<'_>,
) -> RecapResult<JobReport> {
    if source.is_empty() {
        return Err(RecapError::EmptySource);
    }

    let chunker = RequestChunker::new(stage.message_builder, stage.estimator, stage.max_bytes);
    let chunks = planning::plan_chunks(&chunker, source)?;
    let resume = planning::resume_point(checkpointer.load(), chunks.len());

    let mut report = JobReport {
        text: String::new(),
        phase: JobPhase::Idle,
        chunks: chunks.len(),
        resumed_partials: resume.restored(),
        calls: 0,
        merge_rounds: 0,
    };
    info!(
        chunks = chunks.len(),
        images = source.image_urls.len(),
        resumed = report.resumed_partials,
        checkpointing = checkpointer.is_active(),
        "job planned"
    );

    let partials = match resume {
        Resume::Merge(partials) => {
            advance(&mut report, JobPhase::Merge);
            partials
        }
        Resume::Fresh => {
            advance(&mut report, JobPhase::Summarize);
            summarize::summarize_chunks(stage, &chunks, Vec::new(), &source.context, checkpointer, &mut report)?
        }
        Resume::Summarize(done) => {
            advance(&mut report, JobPhase::Summarize);
            summarize::summarize_chunks(stage, &chunks, done, &source.context, checkpointer, &mut report)?
        }
    };

    let text = if partials.len() == 1 {
        partials.into_iter().next().unwrap_or_default()
    } else {
        if report.phase != JobPhase::Merge {
            advance(&mut report, JobPhase::Merge);
        }
        merge::merge_partials(stage, partials, checkpointer, &mut report)?
    };

    checkpointer.clear();
    advance(&mut report, JobPhase::Done);
    report.text = text;
    Ok(report)
}
