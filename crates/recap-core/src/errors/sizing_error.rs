//! Sizing errors raised while packing content into the request budget.

use super::error_code::{self, RecapErrorCode};

/// The content cannot be packed into requests within the byte budget.
///
/// Always fatal: sizing happens before any provider call, so nothing needs
/// to be checkpointed when one of these surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizingError {
    #[error("segment {index} has empty text and cannot be split")]
    EmptySegment { index: usize },

    #[error("segment {index} does not fit {max_bytes} bytes even as a single character")]
    SegmentTooLarge { index: usize, max_bytes: usize },

    #[error("image {url} needs {size} bytes on its own, budget is {max_bytes}")]
    ImageTooLarge {
        url: String,
        size: usize,
        max_bytes: usize,
    },

    #[error("text block {index} needs {size} bytes on its own, budget is {max_bytes}")]
    TextBlockTooLarge {
        index: usize,
        size: usize,
        max_bytes: usize,
    },

    /// Two merge rounds in a row paired nothing. The merge checkpoint is
    /// kept, so a rerun with the same budget stalls again; raise
    /// `max_request_bytes` or shorten the partials to make progress.
    #[error("no two of {count} partials fit one merge request within {max_bytes} bytes")]
    MergeStalled { count: usize, max_bytes: usize },
}

impl RecapErrorCode for SizingError {
    fn error_code(&self) -> &'static str {
        error_code::SIZING_ERROR
    }
}
