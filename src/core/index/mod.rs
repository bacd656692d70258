//! In-memory inverted index with BM25 ranking.
//!
//! Maps each token to a posting list (one posting per document),
//! keeps a registry of added documents and running corpus
//! statistics, and answers AND/OR queries ranked by BM25.
//!
//! # Concurrency
//!
//! The index has no internal locking. Mutation takes `&mut self`
//! and queries take `&self`; sharing across threads is up to the
//! caller (see [`crate::core::services::Services`]).
//!
//! # Example
//!
//! ```
//! use memlex::core::config::IndexConfig;
//! use memlex::core::index::InvertedIndex;
//!
//! let mut index = InvertedIndex::new(&IndexConfig::default());
//! index.add(1, &["hello", "world", "test"]).unwrap();
//! index.add(2, &["hello", "everyone", "test"]).unwrap();
//!
//! let hits = index.search_and(&["hello", "world"], 10);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].document_id, 1);
//! ```

mod bm25;
mod posting;
mod registry;
mod search;

pub use bm25::{Bm25Params, DEFAULT_B, DEFAULT_K1};
pub use posting::{Posting, TokenEntry};
pub use registry::{DocumentRecord, IndexStatistics};
pub use search::SearchHit;

use std::collections::{HashMap, HashSet};

use crate::core::config::IndexConfig;
use crate::core::error::{MemlexError, Result};
use registry::DocumentRegistry;

/// Caller-assigned document identifier
pub type DocumentId = u64;

/// Upper bound on up-front allocation from sizing hints
const MAX_PRESIZED_BUCKETS: usize = 1 << 16;
const MAX_PRESIZED_DOCUMENTS: usize = 1 << 16;

/// Token -> posting list index over a set of documents
#[derive(Debug)]
pub struct InvertedIndex {
    entries: HashMap<String, TokenEntry>,
    registry: DocumentRegistry,
    bm25: Bm25Params,
}

impl InvertedIndex {
    /// Create an empty index with default BM25 parameters.
    ///
    /// `max_tokens` and `max_documents` are sizing hints for the
    /// initial allocation only; both structures grow past them.
    pub fn new(config: &IndexConfig) -> Self {
        Self::with_bm25(config, Bm25Params::default())
    }

    pub fn with_bm25(config: &IndexConfig, bm25: Bm25Params) -> Self {
        let buckets = config
            .max_tokens
            .clamp(1, MAX_PRESIZED_BUCKETS)
            .next_power_of_two();
        let documents = config.max_documents.min(MAX_PRESIZED_DOCUMENTS);

        tracing::debug!(buckets, documents, "Creating inverted index");

        Self {
            entries: HashMap::with_capacity(buckets),
            registry: DocumentRegistry::with_capacity(documents),
            bm25,
        }
    }

    pub fn bm25(&self) -> Bm25Params {
        self.bm25
    }

    /// Add a document's token sequence.
    ///
    /// Empty strings in `tokens` are skipped but still occupy a
    /// position. Fails with `AlreadyExists` if `document_id` is
    /// active, `InvalidArgument` if no non-empty token is given and
    /// `OutOfMemory` if growth fails; on failure the index is left
    /// exactly as it was.
    pub fn add<S: AsRef<str>>(&mut self, document_id: DocumentId, tokens: &[S]) -> Result<()> {
        if self.registry.contains(document_id) {
            return Err(MemlexError::AlreadyExists(document_id));
        }

        let mut seen = HashSet::new();
        let mut token_count: u32 = 0;
        for token in tokens.iter().map(AsRef::as_ref) {
            if token.is_empty() {
                continue;
            }
            token_count = token_count.saturating_add(1);
            seen.insert(token);
        }
        if seen.is_empty() {
            return Err(MemlexError::InvalidArgument(format!(
                "document {document_id} has no tokens"
            )));
        }

        // Reserve everything up front so no failure happens mid-update
        self.registry.try_reserve()?;
        let mut fresh = Vec::new();
        for &token in &seen {
            match self.entries.get_mut(token) {
                Some(entry) => entry.try_reserve(1)?,
                None => {
                    fresh.try_reserve(1)?;
                    fresh.push(TokenEntry::try_new(token)?);
                }
            }
        }
        self.entries.try_reserve(fresh.len())?;

        for entry in fresh {
            self.entries.insert(entry.token().to_owned(), entry);
        }
        self.registry.register(document_id, token_count);

        for (position, token) in tokens.iter().map(AsRef::as_ref).enumerate() {
            if token.is_empty() {
                continue;
            }
            if let Some(entry) = self.entries.get_mut(token) {
                entry.record(document_id, u32::try_from(position).unwrap_or(u32::MAX));
            }
        }

        tracing::debug!(
            document_id,
            token_count,
            distinct = seen.len(),
            "Added document to index"
        );
        Ok(())
    }

    /// Remove an active document.
    ///
    /// The document's record is tombstoned and its postings dropped
    /// from every list; tokens left with no postings disappear.
    pub fn remove(&mut self, document_id: DocumentId) -> Result<()> {
        let record = self.registry.tombstone(document_id)?;

        self.entries.retain(|_, entry| {
            entry.remove_document(document_id);
            !entry.is_empty()
        });

        tracing::debug!(
            document_id,
            token_count = record.token_count,
            "Removed document from index"
        );
        Ok(())
    }

    pub fn statistics(&self) -> IndexStatistics {
        self.registry.statistics()
    }

    /// Whether `document_id` is active.
    pub fn contains(&self, document_id: DocumentId) -> bool {
        self.registry.contains(document_id)
    }

    /// Record of an active document.
    pub fn document(&self, document_id: DocumentId) -> Option<&DocumentRecord> {
        self.registry.get(document_id)
    }

    /// Every record ever added, tombstoned ones included.
    pub fn records(&self) -> &[DocumentRecord] {
        self.registry.records()
    }

    pub fn entry(&self, token: &str) -> Option<&TokenEntry> {
        self.entries.get(token)
    }

    pub fn document_frequency(&self, token: &str) -> usize {
        self.entry(token).map_or(0, TokenEntry::document_frequency)
    }

    /// Number of distinct tokens with at least one posting.
    pub fn vocabulary_size(&self) -> usize {
        self.entries.len()
    }

    pub fn active_documents(&self) -> usize {
        self.registry.statistics().active_documents
    }

    pub fn is_empty(&self) -> bool {
        self.active_documents() == 0
    }
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new(&IndexConfig::default())
    }
}
