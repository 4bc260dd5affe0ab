//! # recap-retry
//!
//! Classifies provider failures as transient or fatal and re-runs transient
//! ones with exponential backoff. Quota exhaustion is always fatal.

pub mod classify;
pub mod policy;
pub mod sleeper;

pub use classify::RetryClassify;
pub use policy::RetryPolicy;
pub use sleeper::{RecordingSleeper, Sleeper, ThreadSleeper};
