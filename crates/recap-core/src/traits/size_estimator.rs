use crate::models::ChatRequest;

/// Measures the serialized size of a candidate request in bytes.
pub trait ISizeEstimator: Send + Sync {
    fn estimate(&self, request: &ChatRequest) -> usize;
}

impl<F> ISizeEstimator for F
where
    F: Fn(&ChatRequest) -> usize + Send + Sync,
{
    fn estimate(&self, request: &ChatRequest) -> usize {
        self(request)
    }
}
