use crate::models::{ChatRequest, JobContext, Segment};

/// Converts one chunk's content into a provider-ready request.
pub trait IMessageBuilder: Send + Sync {
    fn build(&self, segments: &[Segment], image_urls: &[String], ctx: &JobContext) -> ChatRequest;
}

/// Builds a request from already-produced text blocks (merge requests).
pub trait ITextMessageBuilder: Send + Sync {
    fn build_texts(&self, texts: &[String]) -> ChatRequest;
}

impl<F> IMessageBuilder for F
where
    F: Fn(&[Segment], &[String], &JobContext) -> ChatRequest + Send + Sync,
{
    fn build(&self, segments: &[Segment], image_urls: &[String], ctx: &JobContext) -> ChatRequest {
        self(segments, image_urls, ctx)
    }
}

impl<F> ITextMessageBuilder for F
where
    F: Fn(&[String]) -> ChatRequest + Send + Sync,
{
    fn build_texts(&self, texts: &[String]) -> ChatRequest {
        self(texts)
    }
}
