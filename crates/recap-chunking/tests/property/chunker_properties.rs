//! Property tests for recap-chunking: text preservation, budget bounds and
//! image placement.

use proptest::prelude::*;

use recap_chunking::{ContentLengthEstimator, RequestChunker, TextGrouper};
use recap_core::models::{ChatRequest, ContentPart, JobContext, Segment};

fn concat(segments: &[Segment], image_urls: &[String], _ctx: &JobContext) -> ChatRequest {
    let text: String = segments.iter().map(|s| s.text.as_str()).collect();
    let mut parts = vec![ContentPart::text(text)];
    parts.extend(image_urls.iter().map(ContentPart::image));
    ChatRequest::user(parts)
}

fn concat_texts(texts: &[String]) -> ChatRequest {
    ChatRequest::user(vec![ContentPart::text(texts.concat())])
}

fn segment_strategy() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec("[a-z字幕 ]{1,40}", 0..12).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| Segment::new(i as f64, i as f64 + 1.0, t))
            .collect()
    })
}

fn image_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("img[0-9]{1,4}", 0..6)
}

// =============================================================================
// Segment text survives chunking unchanged
// =============================================================================
proptest! {
    #[test]
    fn chunking_preserves_text(
        segments in segment_strategy(),
        budget in 8usize..64,
    ) {
        let chunker = RequestChunker::new(&concat, &ContentLengthEstimator, budget);
        let chunks = chunker.chunk(&segments, &[], &JobContext::default()).unwrap();
        let original: String = segments.iter().map(|s| s.text.as_str()).collect();
        let rebuilt: String = chunks.iter().map(|c| c.text()).collect();
        prop_assert_eq!(rebuilt, original);
    }
}

// =============================================================================
// Every chunk's request fits the budget; images land exactly once, in order
// relative to each other within a chunk
// =============================================================================
proptest! {
    #[test]
    fn chunks_fit_and_images_are_placed_once(
        segments in segment_strategy(),
        images in image_strategy(),
        budget in 8usize..64,
    ) {
        let chunker = RequestChunker::new(&concat, &ContentLengthEstimator, budget);
        let ctx = JobContext::default();
        let chunks = chunker.chunk(&segments, &images, &ctx).unwrap();

        for chunk in &chunks {
            let size = chunker.payload_size(&chunk.segments, &chunk.image_urls, &ctx);
            prop_assert!(size <= budget, "chunk of size {} over budget {}", size, budget);
        }

        let mut placed: Vec<String> = chunks.iter().flat_map(|c| c.image_urls.clone()).collect();
        let mut expected = images.clone();
        placed.sort();
        expected.sort();
        prop_assert_eq!(placed, expected);

        if segments.is_empty() && images.is_empty() {
            prop_assert!(chunks.is_empty());
        }
    }
}

// =============================================================================
// Text grouping keeps every block, in order, within budget
// =============================================================================
proptest! {
    #[test]
    fn grouping_preserves_blocks(
        texts in prop::collection::vec("[a-z]{1,10}", 0..20),
        budget in 10usize..40,
    ) {
        let grouper = TextGrouper::new(&concat_texts, &ContentLengthEstimator, budget);
        let groups = grouper.group(&texts).unwrap();

        let flattened: Vec<String> = groups.iter().flatten().cloned().collect();
        prop_assert_eq!(&flattened, &texts);
        for group in &groups {
            prop_assert!(!group.is_empty());
            prop_assert!(group.concat().chars().count() <= budget);
        }
    }
}
