use serde::{Deserialize, Serialize};

use super::Segment;

/// One request's worth of segments and images, bounded by the byte budget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkPayload {
    pub segments: Vec<Segment>,
    pub image_urls: Vec<String>,
}

impl ChunkPayload {
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            image_urls: Vec::new(),
        }
    }

    pub fn from_image(url: String) -> Self {
        Self {
            segments: Vec::new(),
            image_urls: vec![url],
        }
    }

    /// Concatenated segment text, in order.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.image_urls.is_empty()
    }
}
