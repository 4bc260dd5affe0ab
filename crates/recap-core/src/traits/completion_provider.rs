use crate::errors::ProviderError;
use crate::models::{ChatRequest, Completion};

/// Executes one completion call against a model.
///
/// Implementations must not retry internally; retry policy is applied by
/// the caller so that backoff and classification stay in one place.
pub trait ICompletionProvider: Send + Sync {
    fn complete(
        &self,
        model: &str,
        request: &ChatRequest,
        temperature: f64,
    ) -> Result<Completion, ProviderError>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}

impl<T: ICompletionProvider + ?Sized> ICompletionProvider for std::sync::Arc<T> {
    fn complete(
        &self,
        model: &str,
        request: &ChatRequest,
        temperature: f64,
    ) -> Result<Completion, ProviderError> {
        (**self).complete(model, request, temperature)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
