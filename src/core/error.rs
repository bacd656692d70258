//! Error types and error handling for the memlex indexing engine.
//!
//! This module defines the error types used throughout the
//! crate. Segmentation and tokenization never fail; errors come
//! from index mutation, query validation and the configuration
//! and file layers around them.

use crate::core::index::DocumentId;
use thiserror::Error;

/// Result type alias for memlex operations
pub type Result<T> = std::result::Result<T, MemlexError>;

/// Main error type for memlex
#[derive(Error, Debug)]
pub enum MemlexError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Out of memory: {0}")]
    OutOfMemory(String),

    #[error("Document already exists: {0}")]
    AlreadyExists(DocumentId),

    #[error("Document not found: {0}")]
    NotFound(DocumentId),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl MemlexError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, MemlexError::NotFound(_))
    }

    /// Check if this is a conflict error (already exists)
    pub fn is_conflict(&self) -> bool {
        matches!(self, MemlexError::AlreadyExists(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            MemlexError::InvalidArgument(_) | MemlexError::ConfigError(_)
        )
    }
}

impl From<std::collections::TryReserveError> for MemlexError {
    fn from(err: std::collections::TryReserveError) -> Self {
        MemlexError::OutOfMemory(err.to_string())
    }
}
