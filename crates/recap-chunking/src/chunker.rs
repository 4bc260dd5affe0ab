use std::collections::VecDeque;

use recap_core::errors::SizingError;
use recap_core::models::{ChunkPayload, JobContext, Segment};
use recap_core::traits::{IMessageBuilder, ISizeEstimator};
use tracing::debug;

use crate::{images, split};

/// Packs segments and images into budget-bounded request payloads.
///
/// Algorithm:
/// 1. Grow a batch of segments while the request built from it still fits.
/// 2. On overflow of a non-empty batch, close it and start the next batch
///    with the overflowing segment.
/// 3. On overflow of an empty batch, binary-search the longest prefix that
///    fits on its own, split the segment there and keep packing from the head.
/// 4. Spread images over the finished chunks in proportion to their position.
///
/// Greedy, not optimal: chunk boundaries fall wherever the next segment
/// stops fitting.
pub struct RequestChunker<'a> {
    builder: &'a dyn IMessageBuilder,
    estimator: &'a dyn ISizeEstimator,
    max_bytes: usize,
}

impl<'a> RequestChunker<'a> {
    pub fn new(
        builder: &'a dyn IMessageBuilder,
        estimator: &'a dyn ISizeEstimator,
        max_bytes: usize,
    ) -> Self {
        Self {
            builder,
            estimator,
            max_bytes,
        }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Estimated size of the request built from this content.
    pub fn payload_size(&self, segments: &[Segment], image_urls: &[String], ctx: &JobContext) -> usize {
        let request = self.builder.build(segments, image_urls, ctx);
        self.estimator.estimate(&request)
    }

    pub(crate) fn fits(&self, segments: &[Segment], image_urls: &[String], ctx: &JobContext) -> bool {
        self.payload_size(segments, image_urls, ctx) <= self.max_bytes
    }

    /// Pack `segments` and `image_urls` into ordered chunks within budget.
    ///
    /// Concatenating every chunk's segment text in order reproduces the input
    /// text exactly. Every image lands in exactly one chunk.
    pub fn chunk(
        &self,
        segments: &[Segment],
        image_urls: &[String],
        ctx: &JobContext,
    ) -> Result<Vec<ChunkPayload>, SizingError> {
        if segments.is_empty() && image_urls.is_empty() {
            return Ok(Vec::new());
        }

        let mut chunks = self.pack_segments(segments, ctx)?;
        let segment_chunks = chunks.len();

        if !image_urls.is_empty() {
            images::distribute(self, &mut chunks, image_urls, ctx)?;
        }

        debug!(
            segments = segments.len(),
            images = image_urls.len(),
            segment_chunks,
            chunks = chunks.len(),
            max_bytes = self.max_bytes,
            "chunking complete"
        );
        Ok(chunks)
    }

    fn pack_segments(
        &self,
        segments: &[Segment],
        ctx: &JobContext,
    ) -> Result<Vec<ChunkPayload>, SizingError> {
        // (input index, segment); split halves keep their parent's index.
        let mut pending: VecDeque<(usize, Segment)> =
            segments.iter().cloned().enumerate().collect();
        let mut chunks = Vec::new();
        let mut batch: Vec<Segment> = Vec::new();

        while let Some((index, segment)) = pending.pop_front() {
            batch.push(segment);
            if self.fits(&batch, &[], ctx) {
                continue;
            }

            let Some(overflowing) = batch.pop() else {
                continue;
            };

            if batch.is_empty() {
                let (head, tail) = split::split_to_fit(self, &overflowing, index, ctx)?;
                debug!(
                    index,
                    head_chars = head.char_len(),
                    tail_chars = tail.char_len(),
                    "split oversized segment"
                );
                if !tail.text.is_empty() {
                    pending.push_front((index, tail));
                }
                pending.push_front((index, head));
            } else {
                chunks.push(ChunkPayload::from_segments(std::mem::take(&mut batch)));
                pending.push_front((index, overflowing));
            }
        }

        if !batch.is_empty() {
            chunks.push(ChunkPayload::from_segments(batch));
        }
        Ok(chunks)
    }
}
