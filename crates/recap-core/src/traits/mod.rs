//! Collaborator seams. The core algorithms only ever talk to these.

pub mod completion_provider;
pub mod message_builder;
pub mod size_estimator;

pub use completion_provider::ICompletionProvider;
pub use message_builder::{IMessageBuilder, ITextMessageBuilder};
pub use size_estimator::ISizeEstimator;
