//! In-memory lexical store for agent messages.
//!
//! Each ingested message is decomposed into blocks and statements,
//! and every part that yields tokens becomes its own document in the
//! inverted index. Node ids are allocated from one monotonic counter
//! starting at 1 and are never reused.

use std::collections::HashMap;
use std::time::Instant;

use crate::core::config::{Config, SearchConfig};
use crate::core::error::{MemlexError, Result};
use crate::core::index::{Bm25Params, DocumentId, IndexStatistics, InvertedIndex};
use crate::core::search::{prepare_query, QueryMode};
use crate::core::segment::{Segmenter, TextSpan};
use crate::core::tokenizer::Tokenizer;
use crate::core::types::{IngestReceipt, NodeKind, NodeRecord, SearchResponse, SearchResult};

/// A stored message and the nodes indexed from it
#[derive(Debug)]
struct StoredMessage {
    content: String,
    source: Option<String>,
    /// Node ids in allocation order, the message node first
    nodes: Vec<DocumentId>,
}

/// Messages, their nodes and the index over them
#[derive(Debug)]
pub struct LexicalStore {
    index: InvertedIndex,
    segmenter: Segmenter,
    tokenizer: Tokenizer,
    search: SearchConfig,
    nodes: HashMap<DocumentId, NodeRecord>,
    messages: HashMap<DocumentId, StoredMessage>,
    next_id: DocumentId,
}

impl LexicalStore {
    pub fn new(config: &Config) -> Self {
        let bm25 = Bm25Params::new(config.search.k1, config.search.b);

        Self {
            index: InvertedIndex::with_bm25(&config.index, bm25),
            segmenter: Segmenter::from_config(&config.segmenter),
            tokenizer: Tokenizer::new(config.index.max_token_len),
            search: config.search.clone(),
            nodes: HashMap::new(),
            messages: HashMap::new(),
            next_id: 1,
        }
    }

    /// Ingest one message.
    ///
    /// Indexes the whole message, each block and each statement that
    /// yields at least one token. Fails with `InvalidArgument` when
    /// the content is blank or has no tokens at all. If indexing
    /// fails part-way, the nodes already indexed for this message are
    /// removed again before the error is returned.
    pub fn ingest(&mut self, content: &str, source: Option<&str>) -> Result<IngestReceipt> {
        if content.trim().is_empty() {
            return Err(MemlexError::InvalidArgument(
                "Message content cannot be empty".to_string(),
            ));
        }

        let mut indexed = Vec::new();
        match self.index_message(content, &mut indexed) {
            Ok(receipt) => {
                self.messages.insert(
                    receipt.message_id,
                    StoredMessage {
                        content: content.to_owned(),
                        source: source.map(str::to_owned),
                        nodes: indexed,
                    },
                );

                tracing::debug!(
                    message_id = receipt.message_id,
                    blocks = receipt.blocks,
                    statements = receipt.statements,
                    source = source.unwrap_or("-"),
                    "Ingested message"
                );
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(
                    "Ingest failed after {} nodes, rolling back: {}",
                    indexed.len(),
                    e
                );
                self.discard_nodes(&indexed);
                Err(e)
            }
        }
    }

    fn index_message(
        &mut self,
        content: &str,
        indexed: &mut Vec<DocumentId>,
    ) -> Result<IngestReceipt> {
        let message_id = self.index_node(
            TextSpan::whole(content),
            NodeKind::Message,
            None,
            None,
            None,
            indexed,
        )?
        .ok_or_else(|| {
            MemlexError::InvalidArgument("Message has no searchable tokens".to_string())
        })?;

        let mut receipt = IngestReceipt {
            message_id,
            blocks: 0,
            statements: 0,
            documents: 1,
        };

        let segmenter = self.segmenter.clone();
        for block in segmenter.segment_blocks(content) {
            let Some(block_id) = self.index_node(
                block.span,
                NodeKind::Block(block.kind),
                Some(message_id),
                Some(message_id),
                block.language.clone(),
                indexed,
            )?
            else {
                continue;
            };
            receipt.blocks += 1;

            for statement in segmenter.segment_statements(&block) {
                let node = self.index_node(
                    statement,
                    NodeKind::Statement,
                    Some(message_id),
                    Some(block_id),
                    None,
                    indexed,
                )?;
                if node.is_some() {
                    receipt.statements += 1;
                }
            }
        }

        receipt.documents += receipt.blocks + receipt.statements;
        Ok(receipt)
    }

    /// Index one span as a node. Returns `None` when the span has no
    /// tokens; such spans get no id and no record.
    fn index_node(
        &mut self,
        span: TextSpan<'_>,
        kind: NodeKind,
        message_id: Option<DocumentId>,
        parent: Option<DocumentId>,
        language: Option<String>,
        indexed: &mut Vec<DocumentId>,
    ) -> Result<Option<DocumentId>> {
        let tokens = self
            .tokenizer
            .tokenize(span.as_str(), self.search.max_document_tokens);
        if tokens.is_empty() {
            return Ok(None);
        }

        indexed.try_reserve(1)?;
        let id = self.allocate_id()?;
        self.index.add(id, &tokens)?;
        indexed.push(id);

        self.nodes.insert(
            id,
            NodeRecord {
                id,
                message_id: message_id.unwrap_or(id),
                kind,
                parent,
                start_offset: span.offset(),
                end_offset: span.end(),
                language,
            },
        );
        Ok(Some(id))
    }

    fn allocate_id(&mut self) -> Result<DocumentId> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| MemlexError::Internal("Document id space exhausted".to_string()))?;
        Ok(id)
    }

    /// Remove nodes from the index and the node table, ignoring ids
    /// that are already gone.
    fn discard_nodes(&mut self, ids: &[DocumentId]) -> usize {
        let mut removed = 0;
        for id in ids.iter().rev() {
            if self.index.remove(*id).is_ok() {
                removed += 1;
            }
            self.nodes.remove(id);
        }
        removed
    }

    /// Remove a message and every node indexed from it.
    ///
    /// Returns the number of documents removed. Fails with `NotFound`
    /// if `message_id` is not a live message.
    pub fn remove_message(&mut self, message_id: DocumentId) -> Result<usize> {
        let message = self
            .messages
            .remove(&message_id)
            .ok_or(MemlexError::NotFound(message_id))?;

        let removed = self.discard_nodes(&message.nodes);
        tracing::debug!(message_id, removed, "Removed message");
        Ok(removed)
    }

    /// Search the store.
    ///
    /// `k` defaults to `default_k` and is clamped to `max_k`. Every hit
    /// is resolved back to its node text and message source.
    pub fn search(&self, query: &str, mode: QueryMode, k: Option<usize>) -> Result<SearchResponse> {
        let start = Instant::now();

        let tokens = prepare_query(query, &self.search, &self.tokenizer)?;
        let k_limit = k.unwrap_or(self.search.default_k).min(self.search.max_k);

        let hits = match mode {
            QueryMode::All => self.index.search_and(&tokens, k_limit),
            QueryMode::Any => self.index.search_or(&tokens, k_limit),
        };

        let mut results = Vec::with_capacity(hits.len());
        for hit in hits {
            let node = self.nodes.get(&hit.document_id).ok_or_else(|| {
                MemlexError::Internal(format!("Hit {} has no node record", hit.document_id))
            })?;
            let message = self.messages.get(&node.message_id).ok_or_else(|| {
                MemlexError::Internal(format!("Node {} has no message", node.id))
            })?;

            let text = message
                .content
                .get(node.start_offset..node.end_offset)
                .ok_or_else(|| {
                    MemlexError::Internal(format!("Node {} has an invalid range", node.id))
                })?;

            results.push(SearchResult {
                document_id: hit.document_id,
                score: hit.score,
                kind: node.kind,
                message_id: node.message_id,
                source: message.source.clone(),
                text: text.to_string(),
            });
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        let count = results.len();
        tracing::debug!(
            mode = mode.as_str(),
            tokens = tokens.len(),
            count,
            duration_ms,
            "Search complete"
        );

        Ok(SearchResponse {
            query: query.to_string(),
            tokens,
            results,
            count,
            duration_ms,
        })
    }

    pub fn node(&self, id: DocumentId) -> Option<&NodeRecord> {
        self.nodes.get(&id)
    }

    /// Text of a live node.
    pub fn node_text(&self, id: DocumentId) -> Option<&str> {
        let node = self.nodes.get(&id)?;
        let message = self.messages.get(&node.message_id)?;
        message.content.get(node.start_offset..node.end_offset)
    }

    /// Source label of a live message.
    pub fn message_source(&self, message_id: DocumentId) -> Option<&str> {
        self.messages.get(&message_id)?.source.as_deref()
    }

    /// Ids of the nodes indexed for a live message, message node first.
    pub fn message_nodes(&self, message_id: DocumentId) -> Option<&[DocumentId]> {
        self.messages.get(&message_id).map(|m| m.nodes.as_slice())
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.index.vocabulary_size()
    }

    pub fn statistics(&self) -> IndexStatistics {
        self.index.statistics()
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}

impl Default for LexicalStore {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
