//! SummarizationEngine: owns the collaborators and runs one job at a time
//! through the checkpointed summarize/merge pipeline.

use serde::Serialize;
use tracing::{info, info_span};
use uuid::Uuid;

use recap_checkpoint::{CheckpointStore, SourceSignature};
use recap_chunking::JsonSizeEstimator;
use recap_core::errors::RecapResult;
use recap_core::models::JobPhase;
use recap_core::traits::{ICompletionProvider, IMessageBuilder, ISizeEstimator, ITextMessageBuilder};
use recap_core::{JobSource, RecapConfig};
use recap_retry::RetryPolicy;

use crate::checkpointing::JobCheckpointer;
use crate::messages::{ChatMessageBuilder, MergeMessageBuilder};
use crate::pipeline::{self, Stage};

/// Outcome of one completed job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobReport {
    /// The final merged text.
    pub text: String,
    pub phase: JobPhase,
    /// Chunks planned for the source.
    pub chunks: usize,
    /// Partials restored from a checkpoint instead of recomputed.
    pub resumed_partials: usize,
    /// Successful provider calls made by this run.
    pub calls: usize,
    pub merge_rounds: usize,
}

/// The summarization orchestrator.
///
/// Defaults: [`ChatMessageBuilder`], [`MergeMessageBuilder`],
/// [`JsonSizeEstimator`], a [`RetryPolicy`] and a [`CheckpointStore`] taken
/// from the config. Each can be replaced with a `with_*` builder call.
pub struct SummarizationEngine {
    config: RecapConfig,
    provider: Box<dyn ICompletionProvider>,
    message_builder: Box<dyn IMessageBuilder>,
    merge_builder: Box<dyn ITextMessageBuilder>,
    estimator: Box<dyn ISizeEstimator>,
    retry: RetryPolicy,
    checkpoints: Option<CheckpointStore>,
}

impl SummarizationEngine {
    /// Build an engine from validated config. Opens the checkpoint directory
    /// when checkpointing is enabled.
    pub fn new(config: RecapConfig, provider: Box<dyn ICompletionProvider>) -> RecapResult<Self> {
        config.validate()?;
        let checkpoints = if config.checkpoint.enabled {
            Some(CheckpointStore::open(&config.checkpoint.dir)?)
        } else {
            None
        };
        Ok(Self {
            retry: RetryPolicy::from_config(&config.retry),
            config,
            provider,
            message_builder: Box::new(ChatMessageBuilder::new()),
            merge_builder: Box::new(MergeMessageBuilder::new()),
            estimator: Box::new(JsonSizeEstimator),
            checkpoints,
        })
    }

    pub fn with_message_builder(mut self, builder: Box<dyn IMessageBuilder>) -> Self {
        self.message_builder = builder;
        self
    }

    pub fn with_merge_builder(mut self, builder: Box<dyn ITextMessageBuilder>) -> Self {
        self.merge_builder = builder;
        self
    }

    pub fn with_estimator(mut self, estimator: Box<dyn ISizeEstimator>) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Replace the checkpoint store; `None` disables checkpointing.
    pub fn with_checkpoint_store(mut self, store: Option<CheckpointStore>) -> Self {
        self.checkpoints = store;
        self
    }

    pub fn config(&self) -> &RecapConfig {
        &self.config
    }

    pub fn checkpoint_store(&self) -> Option<&CheckpointStore> {
        self.checkpoints.as_ref()
    }

    /// Summarize `source` and return the final text.
    pub fn summarize(&self, source: &JobSource) -> RecapResult<String> {
        self.run(source).map(|report| report.text)
    }

    /// Summarize `source` and return the full job report.
    pub fn run(&self, source: &JobSource) -> RecapResult<JobReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "summarize",
            %run_id,
            key = source.checkpoint_key.as_deref().unwrap_or("-"),
            provider = self.provider.name(),
        );
        let _guard = span.enter();

        let stage = Stage {
            provider: self.provider.as_ref(),
            model: &self.config.provider.model,
            temperature: self.config.provider.temperature,
            retry: &self.retry,
            message_builder: self.message_builder.as_ref(),
            merge_builder: self.merge_builder.as_ref(),
            estimator: self.estimator.as_ref(),
            max_bytes: self.config.request.max_request_bytes,
        };
        let checkpointer = JobCheckpointer::new(
            self.checkpoints.as_ref(),
            source.checkpoint_key.as_deref(),
            || SourceSignature::compute(source, &self.config),
        );

        let report = pipeline::run_pipeline(&stage, source, &checkpointer)?;
        info!(
            chunks = report.chunks,
            calls = report.calls,
            resumed = report.resumed_partials,
            merge_rounds = report.merge_rounds,
            "job complete"
        );
        Ok(report)
    }
}
