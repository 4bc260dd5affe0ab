//! Shared fakes for pipeline tests.
//!
//! The fake provider is order-preserving and associative: a summary is the
//! chunk text with runs of repeated chars collapsed, and a merge is the
//! concatenation of its inputs. Any grouping of merges therefore converges
//! to the same final text.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use recap_chunking::ContentLengthEstimator;
use recap_core::constants::MERGE_SEPARATOR;
use recap_core::errors::ProviderError;
use recap_core::models::{ChatRequest, Completion, ContentPart, JobContext, Segment};
use recap_core::traits::ICompletionProvider;
use recap_core::{JobSource, RecapConfig};
use recap_pipeline::{MergeMessageBuilder, SummarizationEngine};
use recap_retry::{RecordingSleeper, RetryPolicy};

pub const MERGE_PREFIX: &str = "merge\n\n";

/// Fails call `fail_at` (counting every attempt, zero-indexed) with `error`,
/// optionally copying the checkpoint file as it stood at that moment.
#[derive(Default)]
pub struct FakeProvider {
    requests: Mutex<Vec<String>>,
    failures: Mutex<Vec<(usize, ProviderError)>>,
    snapshot_of: Option<PathBuf>,
    snapshot: Mutex<Option<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(calls: &[usize], error: ProviderError) -> Self {
        Self {
            failures: Mutex::new(calls.iter().map(|&c| (c, error.clone())).collect()),
            ..Self::default()
        }
    }

    pub fn snapshotting(mut self, checkpoint: &Path) -> Self {
        self.snapshot_of = Some(checkpoint.to_path_buf());
        self
    }

    /// Text of every request seen, attempts included.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.lock().unwrap().clone()
    }
}

pub fn request_text(request: &ChatRequest) -> String {
    request
        .parts()
        .filter_map(|part| match part {
            ContentPart::Text { text } => Some(text.as_str()),
            ContentPart::ImageUrl { .. } => None,
        })
        .collect()
}

pub fn image_count(request: &ChatRequest) -> usize {
    request
        .parts()
        .filter(|part| matches!(part, ContentPart::ImageUrl { .. }))
        .count()
}

/// Collapse runs of the same char: "aaabb" -> "ab".
pub fn squeeze(text: &str) -> String {
    let mut out = String::new();
    for c in text.chars() {
        if !out.ends_with(c) {
            out.push(c);
        }
    }
    out
}

fn respond(text: &str) -> String {
    match text.strip_prefix(MERGE_PREFIX) {
        Some(body) => body.split(MERGE_SEPARATOR).collect(),
        None => squeeze(text),
    }
}

impl ICompletionProvider for FakeProvider {
    fn complete(
        &self,
        _model: &str,
        request: &ChatRequest,
        _temperature: f64,
    ) -> Result<Completion, ProviderError> {
        let text = request_text(request);
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(text.clone());
            requests.len() - 1
        };

        let failure = self
            .failures
            .lock()
            .unwrap()
            .iter()
            .find(|(at, _)| *at == call)
            .map(|(_, e)| e.clone());
        if let Some(err) = failure {
            if let Some(path) = &self.snapshot_of {
                *self.snapshot.lock().unwrap() = std::fs::read_to_string(path).ok();
            }
            return Err(err);
        }

        // Surrounding whitespace is trimmed by the engine.
        Ok(Completion::new(format!("  {}\n", respond(&text))))
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Request builder that sends the raw segment text plus image parts.
pub fn concat_builder(segments: &[Segment], image_urls: &[String], _ctx: &JobContext) -> ChatRequest {
    let text: String = segments.iter().map(|s| s.text.as_str()).collect();
    let mut parts = vec![ContentPart::text(text)];
    parts.extend(image_urls.iter().map(ContentPart::image));
    ChatRequest::user(parts)
}

pub fn config(dir: &Path, max_bytes: usize) -> RecapConfig {
    let mut config = RecapConfig::default();
    config.request.max_request_bytes = max_bytes;
    config.retry.base_backoff_secs = 0.0;
    config.checkpoint.dir = dir.to_path_buf();
    config
}

/// Engine over content-length sizing, with retries recorded instead of slept.
pub fn engine(
    dir: &Path,
    max_bytes: usize,
    provider: Arc<FakeProvider>,
    retry_attempts: u32,
) -> (SummarizationEngine, Arc<RecordingSleeper>) {
    recap_core::tracing_setup::init_tracing_with_filter("recap=debug", false);
    let sleeper = Arc::new(RecordingSleeper::new());
    let retry = RetryPolicy::new(retry_attempts, Duration::from_millis(100)).with_sleeper(sleeper.clone());
    let engine = SummarizationEngine::new(config(dir, max_bytes), Box::new(provider))
        .unwrap()
        .with_message_builder(Box::new(concat_builder))
        .with_merge_builder(Box::new(MergeMessageBuilder::new().with_instruction("merge")))
        .with_estimator(Box::new(ContentLengthEstimator))
        .with_retry_policy(retry);
    (engine, sleeper)
}

/// `count` ten-char segments "aaaaaaaaaa", "bbbbbbbbbb", ...
pub fn lettered_segments(count: usize) -> Vec<Segment> {
    (0..count)
        .map(|i| {
            let letter = (b'a' + (i % 26) as u8) as char;
            Segment::new(i as f64 * 10.0, i as f64 * 10.0 + 10.0, letter.to_string().repeat(10))
        })
        .collect()
}

pub fn keyed_source(count: usize, key: &str) -> JobSource {
    JobSource::new(lettered_segments(count)).with_checkpoint_key(key)
}
