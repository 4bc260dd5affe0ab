use serde::{Deserialize, Serialize};

/// One time-stamped piece of transcript text.
///
/// Sequence order is significant and preserved end-to-end. The only mutation
/// is [`Segment::split_at_char`], which produces two new segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start offset in seconds.
    pub start: f64,
    /// End offset in seconds.
    pub end: f64,
    pub text: String,
}

impl Segment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Text length in chars. Split points are expressed in the same unit.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Copy of this segment carrying the first `chars` characters only.
    pub fn with_prefix(&self, chars: usize) -> Segment {
        let cut = self.byte_offset(chars);
        Segment::new(self.start, self.end, &self.text[..cut])
    }

    /// Split into (head, tail) after `chars` characters.
    ///
    /// Both halves keep this segment's start/end; timestamps are not
    /// interpolated across the cut.
    pub fn split_at_char(&self, chars: usize) -> (Segment, Segment) {
        let cut = self.byte_offset(chars);
        let (head, tail) = self.text.split_at(cut);
        (
            Segment::new(self.start, self.end, head),
            Segment::new(self.start, self.end, tail),
        )
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
