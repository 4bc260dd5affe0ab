//! Request size estimators.

use recap_core::models::{ChatRequest, ContentPart};
use recap_core::traits::ISizeEstimator;

/// Measures the UTF-8 length of the compact JSON encoding of the messages.
///
/// This is the default: it tracks what actually goes over the wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSizeEstimator;

impl ISizeEstimator for JsonSizeEstimator {
    fn estimate(&self, request: &ChatRequest) -> usize {
        // An unserializable request can never be sent, so it never fits.
        serde_json::to_string(&request.messages)
            .map(|s| s.len())
            .unwrap_or(usize::MAX)
    }
}

/// Counts only content: chars of every text part plus chars of every image
/// URL. Message framing is free.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentLengthEstimator;

impl ISizeEstimator for ContentLengthEstimator {
    fn estimate(&self, request: &ChatRequest) -> usize {
        request
            .parts()
            .map(|part| match part {
                ContentPart::Text { text } => text.chars().count(),
                ContentPart::ImageUrl { image_url } => image_url.url.chars().count(),
            })
            .sum()
    }
}
