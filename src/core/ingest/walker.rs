//! File system walker with pattern-based filtering.
//!
//! Collects transcript and note files under a directory. Walk errors
//! (permission denied, etc.) are logged and skipped.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{MemlexError, Result};

/// File system walker with pattern-based filtering
pub struct FileWalker {
    /// Patterns to include (e.g., "*.md", "*.txt")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "**/.git/**")
    exclude_patterns: Vec<Pattern>,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

fn compile_patterns(patterns: Vec<String>, kind: &str) -> Result<Vec<Pattern>> {
    patterns
        .into_iter()
        .map(|p| {
            Pattern::new(&p).map_err(|e| {
                MemlexError::ConfigError(format!("Invalid {kind} pattern '{p}': {e}"))
            })
        })
        .collect()
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// Fails with `ConfigError` if any pattern is not valid glob
    /// syntax.
    pub fn new(
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        Ok(Self {
            include_patterns: compile_patterns(include_patterns, "include")?,
            exclude_patterns: compile_patterns(exclude_patterns, "exclude")?,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Collect all matching files under `root`, sorted by path.
    ///
    /// `root` may also be a single file, which is returned if it
    /// passes the size limit regardless of patterns.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(MemlexError::InvalidArgument(format!(
                "Path does not exist: {}",
                root.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();

                    if let Ok(metadata) = entry.metadata() {
                        if metadata.len() > self.max_file_size_bytes {
                            tracing::debug!(
                                "Skipping large file: {:?} ({} bytes)",
                                path,
                                metadata.len()
                            );
                            continue;
                        }
                    }

                    if path == root || self.matches_patterns(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        Ok(files)
    }

    /// Skip hidden and excluded directories. Never filters the root.
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root {
            return true;
        }

        if !entry.file_type().is_dir() {
            return true;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                return false;
            }
        }

        if let Some(pattern) = self.exclude_patterns.iter().find(|p| p.matches_path(path)) {
            tracing::debug!("Skipping excluded directory: {:?} ({})", path, pattern);
            return false;
        }

        true
    }

    /// Check if a file path matches the include/exclude patterns
    fn matches_patterns(&self, path: &Path) -> bool {
        let Some(path_str) = path.to_str() else {
            return false;
        };
        let file_name = path.file_name().and_then(|f| f.to_str());

        // Empty include list takes everything
        let included = self.include_patterns.is_empty()
            || self
                .include_patterns
                .iter()
                .any(|p| p.matches(path_str) || file_name.is_some_and(|f| p.matches(f)));

        included
            && !self
                .exclude_patterns
                .iter()
                .any(|p| p.matches(path_str) || p.matches_path(path))
    }
}
