//! Document registry and corpus statistics.
//!
//! Removed documents are tombstoned, not deleted: their record stays
//! in the registry while they stop counting towards statistics.

use serde::Serialize;
use std::collections::HashMap;

use crate::core::error::{MemlexError, Result};
use crate::core::index::DocumentId;

/// Registry entry for one added document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    pub document_id: DocumentId,
    pub token_count: u32,
    pub tombstoned: bool,
}

/// Running statistics over active (non-tombstoned) documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IndexStatistics {
    pub total_tokens: u64,
    pub active_documents: usize,
    /// `total_tokens / active_documents`, or 0 with no active documents
    pub average_document_length: f64,
}

impl IndexStatistics {
    fn recompute_average(&mut self) {
        self.average_document_length = if self.active_documents == 0 {
            0.0
        } else {
            self.total_tokens as f64 / self.active_documents as f64
        };
    }
}

#[derive(Debug, Default)]
pub(crate) struct DocumentRegistry {
    records: Vec<DocumentRecord>,
    /// Active document id -> slot in `records`
    active: HashMap<DocumentId, usize>,
    stats: IndexStatistics,
}

impl DocumentRegistry {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            active: HashMap::with_capacity(capacity),
            stats: IndexStatistics::default(),
        }
    }

    pub(crate) fn contains(&self, document_id: DocumentId) -> bool {
        self.active.contains_key(&document_id)
    }

    /// Active record for `document_id`.
    pub(crate) fn get(&self, document_id: DocumentId) -> Option<&DocumentRecord> {
        self.active.get(&document_id).map(|&slot| &self.records[slot])
    }

    pub(crate) fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub(crate) fn statistics(&self) -> IndexStatistics {
        self.stats
    }

    /// Reserve room for one more registration.
    pub(crate) fn try_reserve(&mut self) -> Result<()> {
        self.records.try_reserve(1)?;
        self.active.try_reserve(1)?;
        Ok(())
    }

    /// Register a document. The caller has checked it is not active
    /// and reserved capacity.
    pub(crate) fn register(&mut self, document_id: DocumentId, token_count: u32) {
        let slot = self.records.len();
        self.records.push(DocumentRecord {
            document_id,
            token_count,
            tombstoned: false,
        });
        self.active.insert(document_id, slot);

        self.stats.total_tokens += u64::from(token_count);
        self.stats.active_documents += 1;
        self.stats.recompute_average();
    }

    /// Tombstone an active document, returning its record.
    pub(crate) fn tombstone(&mut self, document_id: DocumentId) -> Result<DocumentRecord> {
        let slot = self
            .active
            .remove(&document_id)
            .ok_or(MemlexError::NotFound(document_id))?;

        let record = &mut self.records[slot];
        record.tombstoned = true;

        self.stats.total_tokens -= u64::from(record.token_count);
        self.stats.active_documents -= 1;
        self.stats.recompute_average();

        Ok(*record)
    }
}
