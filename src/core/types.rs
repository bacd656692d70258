//! Core data types for memlex.
//!
//! Node records, ingestion receipts and search responses shared by
//! the store, the ingest pipeline and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::index::DocumentId;
use crate::core::segment::BlockKind;

/// What a node in the store represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A whole ingested message
    Message,
    /// A block of the message
    Block(BlockKind),
    /// A statement inside a block
    Statement,
}

impl NodeKind {
    pub fn is_message(&self) -> bool {
        matches!(self, NodeKind::Message)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Message => write!(f, "message"),
            NodeKind::Block(kind) => write!(f, "{} block", kind.as_str()),
            NodeKind::Statement => write!(f, "statement"),
        }
    }
}

/// A document in the store: a message or one of its parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Document id in the index
    pub id: DocumentId,

    /// Id of the message node this node belongs to
    pub message_id: DocumentId,

    pub kind: NodeKind,

    /// Enclosing node (block for statements, message for blocks)
    pub parent: Option<DocumentId>,

    /// Byte offset where the node starts in the message
    pub start_offset: usize,

    /// Byte offset where the node ends in the message
    pub end_offset: usize,

    /// Code fence language hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl NodeRecord {
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }
}

/// Result of ingesting one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReceipt {
    /// Id of the message node
    pub message_id: DocumentId,

    /// Block nodes indexed
    pub blocks: usize,

    /// Statement nodes indexed
    pub statements: usize,

    /// Total documents indexed (message + blocks + statements)
    pub documents: usize,
}

/// Statistics from ingesting a directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    /// Number of files ingested as messages
    pub files_ingested: usize,

    /// Number of files skipped (unreadable, binary, empty)
    pub files_skipped: usize,

    /// Messages created
    pub messages: usize,

    /// Documents indexed across all messages
    pub documents: usize,

    /// Bytes of text ingested
    pub bytes: u64,

    /// Ingestion duration in milliseconds
    pub duration_ms: u64,
}

/// A single search result resolved back to its node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub document_id: DocumentId,

    /// BM25 relevance score (higher = more relevant)
    pub score: f64,

    pub kind: NodeKind,

    pub message_id: DocumentId,

    /// Where the message came from (file path, caller label)
    pub source: Option<String>,

    /// Node text
    pub text: String,
}

/// Response from search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Original query string
    pub query: String,

    /// Query tokens actually evaluated
    pub tokens: Vec<String>,

    /// Search results
    pub results: Vec<SearchResult>,

    /// Number of results returned
    pub count: usize,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}
