//! Completion provider implementations.

#[cfg(feature = "http")]
pub mod openai;

#[cfg(feature = "http")]
pub use openai::OpenAiCompatProvider;
