//! Core domain logic
//!
//! This module contains all business logic, independent of the
//! command-line front end.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **segment**: Block and statement segmentation
//! - **tokenizer**: ASCII tokenization
//! - **index**: Inverted index with BM25 ranking
//! - **search**: Query validation and preparation
//! - **store**: Message store over the index
//! - **ingest**: File walking and directory ingestion
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod index;
pub mod ingest;
pub mod search;
pub mod segment;
pub mod services;
pub mod store;
pub mod tokenizer;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{MemlexError, Result};
pub use services::Services;
pub use store::LexicalStore;
