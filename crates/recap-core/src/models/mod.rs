//! Data model shared by every crate in the workspace.

pub mod chat_request;
pub mod checkpoint;
pub mod chunk;
pub mod completion;
pub mod job;
pub mod segment;

pub use chat_request::{ChatMessage, ChatRequest, ContentPart, ImageUrl};
pub use checkpoint::{Checkpoint, CheckpointPhase, JobPhase};
pub use chunk::ChunkPayload;
pub use completion::Completion;
pub use job::{JobContext, JobSource};
pub use segment::Segment;
