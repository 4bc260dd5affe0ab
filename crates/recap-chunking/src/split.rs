//! Binary-search splitting of a segment that cannot fit on its own.

use recap_core::errors::SizingError;
use recap_core::models::{JobContext, Segment};

use crate::chunker::RequestChunker;

/// Split `segment` into (head, tail) where head is the longest prefix whose
/// standalone request fits the budget.
///
/// Searches prefix lengths in `[1, len]` chars. Fails when the text is
/// empty or not even one char fits.
pub(crate) fn split_to_fit(
    chunker: &RequestChunker<'_>,
    segment: &Segment,
    index: usize,
    ctx: &JobContext,
) -> Result<(Segment, Segment), SizingError> {
    let len = segment.char_len();
    if len == 0 {
        return Err(SizingError::EmptySegment { index });
    }

    let (mut lo, mut hi) = (1usize, len);
    let mut best = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let candidate = segment.with_prefix(mid);
        if chunker.fits(std::slice::from_ref(&candidate), &[], ctx) {
            best = Some(mid);
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }

    match best {
        Some(cut) => Ok(segment.split_at_char(cut)),
        None => Err(SizingError::SegmentTooLarge {
            index,
            max_bytes: chunker.max_bytes(),
        }),
    }
}
