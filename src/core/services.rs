//! Unified service container for memlex
//!
//! Provides shared access to the configuration and the store.

use crate::core::config::Config;
use crate::core::error::{MemlexError, Result};
use crate::core::ingest::IngestPipeline;
use crate::core::store::LexicalStore;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Unified services container
///
/// Clones share the same store. Searches take the read lock;
/// ingestion and removal take the write lock.
#[derive(Clone)]
pub struct Services {
    /// Lexical store holding every ingested message
    pub store: Arc<RwLock<LexicalStore>>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let store = Arc::new(RwLock::new(LexicalStore::new(&config)));

        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Shared access to the store
    pub fn read_store(&self) -> Result<RwLockReadGuard<'_, LexicalStore>> {
        self.store
            .read()
            .map_err(|_| MemlexError::Internal("Store lock poisoned".to_string()))
    }

    /// Exclusive access to the store
    pub fn write_store(&self) -> Result<RwLockWriteGuard<'_, LexicalStore>> {
        self.store
            .write()
            .map_err(|_| MemlexError::Internal("Store lock poisoned".to_string()))
    }

    /// Create an IngestPipeline with request-specific patterns
    ///
    /// Empty pattern lists fall back to the configured ones.
    pub fn create_pipeline(
        &self,
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
    ) -> Result<IngestPipeline> {
        let ingest = &self.config.ingest;
        let include = if include_patterns.is_empty() {
            ingest.include_patterns.clone()
        } else {
            include_patterns
        };
        let exclude = if exclude_patterns.is_empty() {
            ingest.exclude_patterns.clone()
        } else {
            exclude_patterns
        };

        IngestPipeline::new(include, exclude, ingest.max_file_size_mb)
    }
}
