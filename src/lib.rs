//! memlex - lexical memory search for agent transcripts
//!
//! Splits agent messages into blocks (prose, fenced code, lists)
//! and statements, indexes the whole message and every part in an
//! in-memory inverted index, and answers AND/OR keyword queries
//! ranked with BM25.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - segment (blocks and statements)
//!   - tokenizer (ASCII tokens)
//!   - index (posting lists, document registry, BM25)
//!   - search (query preparation)
//!   - store (messages and their nodes over the index)
//!   - ingest (file walking, directory ingestion)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use memlex::{Config, LexicalStore, QueryMode};
//!
//! let mut store = LexicalStore::new(&Config::default());
//! store.ingest("We picked Postgres. Redis stays as the cache.", None).unwrap();
//!
//! let response = store.search("redis cache", QueryMode::All, Some(5)).unwrap();
//! assert_eq!(response.results[0].text, "Redis stays as the cache.");
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{MemlexError, Result};
pub use crate::core::index::{DocumentId, InvertedIndex, SearchHit};
pub use crate::core::search::QueryMode;
pub use crate::core::segment::{segment_blocks, segment_statements, Block, BlockKind, TextSpan};
pub use crate::core::services::Services;
pub use crate::core::store::LexicalStore;
pub use crate::core::tokenizer::tokenize;
pub use crate::core::types::*;
