//! Query handling for BM25 search.
//!
//! Query strings are validated and tokenized here; evaluation runs
//! against the inverted index through [`crate::core::store::LexicalStore::search`].

mod query;

pub use query::{prepare_query, QueryMode};
