//! AND/OR query evaluation.
//!
//! Both modes sum one BM25 contribution per matched query token and
//! rank with a stable descending sort, so equal scores keep the
//! order in which documents were discovered.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::core::index::{DocumentId, InvertedIndex, Posting, TokenEntry};

/// A ranked query result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit {
    pub document_id: DocumentId,
    pub score: f64,
}

impl InvertedIndex {
    /// Documents containing every matched query token.
    ///
    /// Query tokens with no entry in the index are ignored rather
    /// than emptying the result. The shortest posting list drives
    /// candidate discovery.
    pub fn search_and<S: AsRef<str>>(&self, query: &[S], k: usize) -> Vec<SearchHit> {
        let matched = self.matched_entries(query);
        if matched.is_empty() || k == 0 {
            return Vec::new();
        }

        let probe_idx = matched
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| entry.document_frequency())
            .map_or(0, |(i, _)| i);

        // One lookup per matched token; the probe's own is its posting
        let lookups: Vec<Option<HashMap<DocumentId, &Posting>>> = matched
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                (i != probe_idx).then(|| {
                    entry
                        .postings()
                        .iter()
                        .map(|p| (p.document_id, p))
                        .collect()
                })
            })
            .collect();

        let mut hits = Vec::new();
        'candidates: for probe in matched[probe_idx].postings() {
            let mut score = 0.0;
            for (entry, lookup) in matched.iter().zip(&lookups) {
                let posting = match lookup {
                    Some(lookup) => match lookup.get(&probe.document_id) {
                        Some(posting) => *posting,
                        None => continue 'candidates,
                    },
                    None => probe,
                };
                score += self.term_score(entry, posting);
            }
            hits.push(SearchHit {
                document_id: probe.document_id,
                score,
            });
        }

        tracing::trace!(
            query_tokens = query.len(),
            matched_tokens = matched.len(),
            candidates = matched[probe_idx].document_frequency(),
            hits = hits.len(),
            "Evaluated AND query"
        );
        rank(hits, k)
    }

    /// Documents containing any matched query token.
    pub fn search_or<S: AsRef<str>>(&self, query: &[S], k: usize) -> Vec<SearchHit> {
        let matched = self.matched_entries(query);
        if matched.is_empty() || k == 0 {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = Vec::new();
        let mut slots: HashMap<DocumentId, usize> = HashMap::new();

        for entry in &matched {
            for posting in entry.postings() {
                let contribution = self.term_score(entry, posting);
                let slot = *slots.entry(posting.document_id).or_insert_with(|| {
                    hits.push(SearchHit {
                        document_id: posting.document_id,
                        score: 0.0,
                    });
                    hits.len() - 1
                });
                hits[slot].score += contribution;
            }
        }

        tracing::trace!(
            query_tokens = query.len(),
            matched_tokens = matched.len(),
            hits = hits.len(),
            "Evaluated OR query"
        );
        rank(hits, k)
    }

    fn matched_entries<S: AsRef<str>>(&self, query: &[S]) -> Vec<&TokenEntry> {
        if self.is_empty() {
            return Vec::new();
        }
        query
            .iter()
            .map(AsRef::as_ref)
            .filter(|token| !token.is_empty())
            .filter_map(|token| self.entry(token))
            .collect()
    }

    fn term_score(&self, entry: &TokenEntry, posting: &Posting) -> f64 {
        let stats = self.statistics();
        let doc_len = self
            .document(posting.document_id)
            .map_or(0, |record| record.token_count);

        self.bm25().term_score(
            posting.term_frequency,
            entry.document_frequency(),
            doc_len,
            stats.active_documents,
            stats.average_document_length,
        )
    }
}

/// Stable sort by descending score, keep the top `k`.
fn rank(mut hits: Vec<SearchHit>, k: usize) -> Vec<SearchHit> {
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits.truncate(k);
    hits
}
