//! Directory ingestion.
//!
//! Walks a directory with include/exclude glob patterns and ingests
//! every matching UTF-8 file as one message.

pub mod pipeline;
pub mod walker;

pub use pipeline::IngestPipeline;
pub use walker::FileWalker;
