//! # recap-chunking
//!
//! Turns an arbitrary-length ordered stream of segments and images into a
//! short ordered list of requests, each within a hard byte budget.
//! Greedy packing with binary-search splitting of oversized segments and
//! proportional image distribution; plus a flat text grouper for merges.

pub mod chunker;
pub mod estimator;
pub mod grouper;
mod images;
mod split;

pub use chunker::RequestChunker;
pub use estimator::{ContentLengthEstimator, JsonSizeEstimator};
pub use grouper::TextGrouper;
