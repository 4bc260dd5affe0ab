//! Job scheduling policy: at most one job runs at any instant.
//!
//! [`SerialExecutor`] serializes callers that already own a thread;
//! [`JobQueue`] owns a single worker thread and runs submitted jobs FIFO.

pub mod queue;
pub mod serial;

pub use queue::{JobHandle, JobQueue};
pub use serial::SerialExecutor;
