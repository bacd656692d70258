//! Ingestion pipeline orchestration.
//!
//! Coordinates the directory ingestion workflow:
//! 1. Walk directory tree
//! 2. Read file contents
//! 3. Ingest each file as one message

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::config::IngestConfig;
use crate::core::error::{MemlexError, Result};
use crate::core::ingest::FileWalker;
use crate::core::store::LexicalStore;
use crate::core::types::{IngestReceipt, IngestStats};

/// Ingests files under a directory into a [`LexicalStore`]
pub struct IngestPipeline {
    walker: FileWalker,
}

impl IngestPipeline {
    /// Create a new ingest pipeline
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for files to include
    /// * `exclude_patterns` - Glob patterns for files to exclude
    /// * `max_file_size_mb` - Maximum file size in megabytes
    pub fn new(
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        let walker = FileWalker::new(include_patterns, exclude_patterns, max_file_size_mb)?;
        Ok(Self { walker })
    }

    pub fn from_config(config: &IngestConfig) -> Result<Self> {
        Self::new(
            config.include_patterns.clone(),
            config.exclude_patterns.clone(),
            config.max_file_size_mb,
        )
    }

    /// Ingest every matching file under `root`.
    ///
    /// Each file becomes one message whose source is its path.
    /// Unreadable, non-UTF-8 and empty files are logged and skipped
    /// without stopping the run.
    pub fn ingest_directory(&self, root: &Path, store: &mut LexicalStore) -> Result<IngestStats> {
        let start = Instant::now();

        tracing::info!("Starting file collection from {:?}", root);
        let files = self.walker.collect_files(root)?;
        tracing::info!("Found {} files to ingest", files.len());

        let mut stats = IngestStats::default();

        for (idx, file_path) in files.iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} files processed", idx, files.len());
            }

            match self.process_file(file_path, store) {
                Ok((receipt, bytes)) => {
                    stats.files_ingested += 1;
                    stats.messages += 1;
                    stats.documents += receipt.documents;
                    stats.bytes += bytes;

                    tracing::debug!(
                        "Ingested {:?} as message {} ({} documents)",
                        file_path,
                        receipt.message_id,
                        receipt.documents
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to process {:?}: {}", file_path, e);
                    stats.files_skipped += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Ingestion complete: {} files ingested, {} skipped, \
             {} documents indexed in {}ms",
            stats.files_ingested,
            stats.files_skipped,
            stats.documents,
            stats.duration_ms
        );

        Ok(stats)
    }

    /// Read one file and ingest it as a message
    fn process_file(&self, path: &Path, store: &mut LexicalStore) -> Result<(IngestReceipt, u64)> {
        let contents = fs::read_to_string(path).map_err(|e| {
            // Likely a binary file
            if e.kind() == std::io::ErrorKind::InvalidData {
                MemlexError::InvalidArgument(format!("Skipping non-UTF-8 file: {path:?}"))
            } else {
                MemlexError::IoError(e)
            }
        })?;

        let source = path.to_string_lossy();
        let receipt = store.ingest(&contents, Some(source.as_ref()))?;
        Ok((receipt, contents.len() as u64))
    }
}
