//! Default request builders for summarize and merge calls.

use recap_core::constants::{MERGE_INSTRUCTION, MERGE_SEPARATOR};
use recap_core::models::{ChatRequest, ContentPart, JobContext, Segment};
use recap_core::traits::{IMessageBuilder, ITextMessageBuilder};

/// Instruction opening every summarize request.
pub const SUMMARY_INSTRUCTION: &str = "You are given part of a time-stamped transcript, possibly with \
screenshots. Write structured Markdown notes for it. Keep the timestamps of key points.";

/// Render seconds as `MM:SS`, or `H:MM:SS` from one hour on.
///
/// Fractional seconds are truncated; negative or non-finite input renders
/// as zero.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}

/// One `MM:SS - text` line per segment, text trimmed.
pub fn segment_lines(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|seg| format!("{} - {}", format_timestamp(seg.start), seg.text.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds one user message: prompt header, transcript lines, then one
/// `image_url` part per image.
#[derive(Debug, Clone)]
pub struct ChatMessageBuilder {
    instruction: String,
}

impl ChatMessageBuilder {
    pub fn new() -> Self {
        Self {
            instruction: SUMMARY_INSTRUCTION.to_string(),
        }
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    fn header(&self, ctx: &JobContext) -> String {
        let mut lines = vec![self.instruction.clone()];
        if let Some(title) = ctx.title.as_deref().filter(|t| !t.trim().is_empty()) {
            lines.push(format!("Title: {title}"));
        }
        if let Some(tags) = ctx.tags.as_deref().filter(|t| !t.trim().is_empty()) {
            lines.push(format!("Tags: {tags}"));
        }
        if !ctx.format.is_empty() {
            lines.push(format!("Include: {}", ctx.format.join(", ")));
        }
        if let Some(style) = ctx.style.as_deref().filter(|s| !s.trim().is_empty()) {
            lines.push(format!("Style: {style}"));
        }
        if let Some(extras) = ctx.extras.as_deref().filter(|e| !e.trim().is_empty()) {
            lines.push(extras.to_string());
        }
        lines.join("\n")
    }
}

impl Default for ChatMessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IMessageBuilder for ChatMessageBuilder {
    fn build(&self, segments: &[Segment], image_urls: &[String], ctx: &JobContext) -> ChatRequest {
        let text = format!("{}\n\nTranscript:\n{}", self.header(ctx), segment_lines(segments));
        let mut parts = Vec::with_capacity(1 + image_urls.len());
        parts.push(ContentPart::text(text));
        parts.extend(image_urls.iter().map(ContentPart::image));
        ChatRequest::user(parts)
    }
}

/// Merge instruction plus separator-joined partials in one text part.
#[derive(Debug, Clone)]
pub struct MergeMessageBuilder {
    instruction: String,
}

impl MergeMessageBuilder {
    pub fn new() -> Self {
        Self {
            instruction: MERGE_INSTRUCTION.to_string(),
        }
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }
}

impl Default for MergeMessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ITextMessageBuilder for MergeMessageBuilder {
    fn build_texts(&self, texts: &[String]) -> ChatRequest {
        let text = format!("{}\n\n{}", self.instruction, texts.join(MERGE_SEPARATOR));
        ChatRequest::user(vec![ContentPart::text(text)])
    }
}
