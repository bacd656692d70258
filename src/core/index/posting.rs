//! Postings and per-token posting lists.

use serde::Serialize;

use crate::core::error::Result;
use crate::core::index::DocumentId;

/// One token's occurrence record for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Posting {
    pub document_id: DocumentId,
    /// Occurrences of the token within the document
    pub term_frequency: u32,
    /// Index of the first occurrence in the document's token sequence
    pub first_position: u32,
}

/// A token and its posting list, one posting per document.
#[derive(Debug, Clone)]
pub struct TokenEntry {
    token: String,
    postings: Vec<Posting>,
}

impl TokenEntry {
    /// Allocate an entry for `token` with room for one posting,
    /// reporting allocation failure instead of aborting.
    pub(crate) fn try_new(token: &str) -> Result<Self> {
        let mut owned = String::new();
        owned.try_reserve_exact(token.len())?;
        owned.push_str(token);

        let mut postings = Vec::new();
        postings.try_reserve(1)?;

        Ok(Self {
            token: owned,
            postings,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Postings in the order their documents were added.
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    /// Number of documents containing the token.
    pub fn document_frequency(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn posting_for(&self, document_id: DocumentId) -> Option<&Posting> {
        self.postings.iter().find(|p| p.document_id == document_id)
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.postings.try_reserve(additional)?;
        Ok(())
    }

    /// Count one occurrence of the token at `position` in `document_id`.
    ///
    /// A document's occurrences are recorded in a single pass, so an
    /// existing posting for it is always the last one in the list.
    pub(crate) fn record(&mut self, document_id: DocumentId, position: u32) {
        match self.postings.last_mut() {
            Some(last) if last.document_id == document_id => {
                last.term_frequency = last.term_frequency.saturating_add(1);
            }
            _ => self.postings.push(Posting {
                document_id,
                term_frequency: 1,
                first_position: position,
            }),
        }
    }

    /// Drop the posting for `document_id`, keeping the others in order.
    pub(crate) fn remove_document(&mut self, document_id: DocumentId) -> bool {
        let before = self.postings.len();
        self.postings.retain(|p| p.document_id != document_id);
        self.postings.len() != before
    }
}
