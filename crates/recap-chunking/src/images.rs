//! Image placement over already-packed segment chunks.

use recap_core::errors::SizingError;
use recap_core::models::{ChunkPayload, JobContext};

use crate::chunker::RequestChunker;

/// Place every image into exactly one chunk.
///
/// With no segment chunks, images fill a synthetic chunk and spill into new
/// image-only chunks, always trying the last chunk first. Otherwise image
/// `i` of `n` prefers chunk `floor(i * chunk_count / n)` and scans forward to
/// the last chunk; if nothing has room it gets a new trailing chunk.
pub(crate) fn distribute(
    chunker: &RequestChunker<'_>,
    chunks: &mut Vec<ChunkPayload>,
    image_urls: &[String],
    ctx: &JobContext,
) -> Result<(), SizingError> {
    if chunks.is_empty() {
        chunks.push(ChunkPayload::default());
        for url in image_urls {
            let last = chunks.len() - 1;
            if fits_with(chunker, &chunks[last], url, ctx) {
                chunks[last].image_urls.push(url.clone());
            } else {
                chunks.push(standalone(chunker, url, ctx)?);
            }
        }
        return Ok(());
    }

    let chunk_count = chunks.len();
    let total = image_urls.len();
    for (i, url) in image_urls.iter().enumerate() {
        let preferred = (i * chunk_count / total).min(chunk_count - 1);
        let target = (preferred..chunks.len()).find(|&idx| fits_with(chunker, &chunks[idx], url, ctx));
        match target {
            Some(idx) => chunks[idx].image_urls.push(url.clone()),
            None => chunks.push(standalone(chunker, url, ctx)?),
        }
    }
    Ok(())
}

fn fits_with(chunker: &RequestChunker<'_>, chunk: &ChunkPayload, url: &str, ctx: &JobContext) -> bool {
    let mut images = chunk.image_urls.clone();
    images.push(url.to_string());
    chunker.fits(&chunk.segments, &images, ctx)
}

fn standalone(
    chunker: &RequestChunker<'_>,
    url: &str,
    ctx: &JobContext,
) -> Result<ChunkPayload, SizingError> {
    let image = [url.to_string()];
    let size = chunker.payload_size(&[], &image, ctx);
    if size > chunker.max_bytes() {
        return Err(SizingError::ImageTooLarge {
            url: url.to_string(),
            size,
            max_bytes: chunker.max_bytes(),
        });
    }
    Ok(ChunkPayload::from_image(url.to_string()))
}
