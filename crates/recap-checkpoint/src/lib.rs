//! # recap-checkpoint
//!
//! One JSON checkpoint per job key, replaced atomically after every
//! successful provider call. A checkpoint is only honored when its source
//! signature matches the job being run; stale or corrupt files are deleted.

pub mod key;
pub mod signature;
pub mod store;

pub use key::sanitize_key;
pub use signature::SourceSignature;
pub use store::CheckpointStore;
