use serde::{Deserialize, Serialize};

use super::Segment;

/// Job metadata handed to message builders alongside each chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobContext {
    pub title: Option<String>,
    pub tags: Option<String>,
    /// Requested output sections (e.g. "toc", "screenshot", "link").
    pub format: Vec<String>,
    pub style: Option<String>,
    pub extras: Option<String>,
}

/// Everything one summarization job consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSource {
    pub context: JobContext,
    pub segments: Vec<Segment>,
    pub image_urls: Vec<String>,
    /// Durable identity of the job. Checkpointing is active only when set.
    pub checkpoint_key: Option<String>,
}

impl JobSource {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            ..Default::default()
        }
    }

    pub fn with_images(mut self, image_urls: Vec<String>) -> Self {
        self.image_urls = image_urls;
        self
    }

    pub fn with_context(mut self, context: JobContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_checkpoint_key(mut self, key: impl Into<String>) -> Self {
        self.checkpoint_key = Some(key.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.image_urls.is_empty()
    }
}
