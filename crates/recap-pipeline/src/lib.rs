//! # recap-pipeline
//!
//! Drives a summarization job end to end: plan chunks, summarize each one,
//! then merge partial results round by round until one remains. Every
//! successful provider call is checkpointed so an interrupted job resumes
//! without repeating paid work.
//!
//! Jobs are executed sequentially; [`scheduling`] provides the serial
//! execution policy shared by callers that submit from many threads.

pub mod engine;
pub mod messages;
pub mod provider;
pub mod scheduling;

mod checkpointing;
mod pipeline;

pub use engine::{JobReport, SummarizationEngine};
pub use messages::{ChatMessageBuilder, MergeMessageBuilder};
pub use scheduling::{JobHandle, JobQueue, SerialExecutor};
