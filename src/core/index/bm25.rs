//! BM25 term scoring.
//!
//! `score = idf * tf*(k1+1) / (tf + k1*(1 - b + b*dl/avgdl))`
//! with `idf = ln((N - df + 0.5) / (df + 0.5) + 1)`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_K1: f64 = 1.2;
pub const DEFAULT_B: f64 = 0.75;

/// BM25 parameters: `k1` saturates term frequency, `b` scales
/// document length normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    pub k1: f64,
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self {
            k1: DEFAULT_K1,
            b: DEFAULT_B,
        }
    }
}

impl Bm25Params {
    pub fn new(k1: f64, b: f64) -> Self {
        Self { k1, b }
    }

    /// Inverse document frequency of a token found in `df` of
    /// `active_documents` documents. Always positive.
    pub fn idf(active_documents: usize, df: usize) -> f64 {
        let n = active_documents as f64;
        let df = df as f64;
        ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
    }

    /// Length-normalized term frequency component.
    pub fn tf_component(&self, tf: u32, doc_len: u32, avg_doc_len: f64) -> f64 {
        let tf = f64::from(tf);
        let length_ratio = if avg_doc_len > 0.0 {
            f64::from(doc_len) / avg_doc_len
        } else {
            1.0
        };
        tf * (self.k1 + 1.0) / (tf + self.k1 * (1.0 - self.b + self.b * length_ratio))
    }

    /// Score contribution of one token for one document.
    pub fn term_score(
        &self,
        tf: u32,
        df: usize,
        doc_len: u32,
        active_documents: usize,
        avg_doc_len: f64,
    ) -> f64 {
        Self::idf(active_documents, df) * self.tf_component(tf, doc_len, avg_doc_len)
    }
}
