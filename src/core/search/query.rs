//! Query validation and preparation.
//!
//! Turns a raw query string into the distinct token list evaluated
//! against the index.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::config::SearchConfig;
use crate::core::error::{MemlexError, Result};
use crate::core::tokenizer::Tokenizer;

/// How query tokens combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Every matched token must occur (AND)
    #[default]
    All,
    /// Any token may occur (OR)
    Any,
}

impl QueryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::All => "all",
            QueryMode::Any => "any",
        }
    }
}

/// Validate a query string and tokenize it.
///
/// Fails with `InvalidArgument` when the query is blank or longer
/// than `max_query_length` characters. Tokens are bounded by
/// `max_query_tokens` and deduplicated in first-seen order. A valid
/// query may still produce no tokens (e.g. `"a ?"`).
///
/// # Examples
///
/// ```
/// use memlex::core::config::SearchConfig;
/// use memlex::core::search::prepare_query;
/// use memlex::core::tokenizer::Tokenizer;
///
/// let tokens = prepare_query("Hello hello, World", &SearchConfig::default(), &Tokenizer::default()).unwrap();
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
pub fn prepare_query(
    query: &str,
    config: &SearchConfig,
    tokenizer: &Tokenizer,
) -> Result<Vec<String>> {
    if query.trim().is_empty() {
        return Err(MemlexError::InvalidArgument(
            "Query cannot be empty".to_string(),
        ));
    }

    let length = query.chars().count();
    if length > config.max_query_length {
        return Err(MemlexError::InvalidArgument(format!(
            "Query too long: {length} characters (max {})",
            config.max_query_length
        )));
    }

    let mut seen = HashSet::new();
    let tokens = tokenizer
        .tokenize(query, config.max_query_tokens)
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect();

    Ok(tokens)
}
