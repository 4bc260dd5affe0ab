//! # recap-core
//!
//! Foundation crate for the recap summarization pipeline.
//! Defines the data model, collaborator traits, errors, config, tracing
//! setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::RecapConfig;
pub use errors::{RecapError, RecapResult};
pub use models::{ChatRequest, ChunkPayload, Completion, JobContext, JobSource, Segment};
