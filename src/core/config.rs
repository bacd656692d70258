//! Configuration management for memlex.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{MemlexError, Result};
use crate::core::index::{DEFAULT_B, DEFAULT_K1};
use crate::core::segment::{DEFAULT_MAX_BLOCKS, DEFAULT_MAX_LANGUAGE_LEN, DEFAULT_MAX_STATEMENTS};
use crate::core::tokenizer::{MAX_TOKEN_LEN, MIN_TOKEN_LEN};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub segmenter: SegmenterConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
}

/// Segmentation bounds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SegmenterConfig {
    /// Blocks kept per message (the rest are dropped)
    #[serde(default = "default_max_blocks")]
    pub max_blocks: usize,

    /// Statements kept per block (the rest are dropped)
    #[serde(default = "default_max_statements")]
    pub max_statements: usize,

    /// Maximum code fence language hint length in bytes
    #[serde(default = "default_max_language_len")]
    pub max_language_len: usize,
}

/// Index sizing hints.
///
/// `max_tokens` and `max_documents` size the initial allocation
/// only. `max_token_len` bounds the length of each token produced
/// by the tokenizer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Expected distinct tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Expected documents
    #[serde(default = "default_max_documents")]
    pub max_documents: usize,

    /// Per-token length bound in bytes
    #[serde(default = "default_max_token_len")]
    pub max_token_len: usize,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Maximum results per query
    #[serde(default = "default_max_k")]
    pub max_k: usize,

    /// Maximum query string length in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// Maximum tokens taken from a query
    #[serde(default = "default_max_query_tokens")]
    pub max_query_tokens: usize,

    /// Maximum tokens indexed per node
    #[serde(default = "default_max_document_tokens")]
    pub max_document_tokens: usize,

    /// BM25 term frequency saturation
    #[serde(default = "default_k1")]
    pub k1: f64,

    /// BM25 length normalization
    #[serde(default = "default_b")]
    pub b: f64,
}

/// Directory ingestion configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

// Default value functions
fn default_max_blocks() -> usize {
    DEFAULT_MAX_BLOCKS
}

fn default_max_statements() -> usize {
    DEFAULT_MAX_STATEMENTS
}

fn default_max_language_len() -> usize {
    DEFAULT_MAX_LANGUAGE_LEN
}

fn default_max_tokens() -> usize {
    4096
}

fn default_max_documents() -> usize {
    1024
}

fn default_max_token_len() -> usize {
    MAX_TOKEN_LEN
}

fn default_k() -> usize {
    10
}

fn default_max_k() -> usize {
    100
}

fn default_max_query_length() -> usize {
    500
}

fn default_max_query_tokens() -> usize {
    64
}

fn default_max_document_tokens() -> usize {
    65_536
}

fn default_k1() -> f64 {
    DEFAULT_K1
}

fn default_b() -> f64 {
    DEFAULT_B
}

fn default_max_file_size() -> usize {
    10
}

fn default_include_patterns() -> Vec<String> {
    vec![
        "*.md".to_string(),
        "*.txt".to_string(),
        "*.markdown".to_string(),
        "*.log".to_string(),
    ]
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/target/**".to_string(),
    ]
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_blocks: default_max_blocks(),
            max_statements: default_max_statements(),
            max_language_len: default_max_language_len(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            max_documents: default_max_documents(),
            max_token_len: default_max_token_len(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            max_k: default_max_k(),
            max_query_length: default_max_query_length(),
            max_query_tokens: default_max_query_tokens(),
            max_document_tokens: default_max_document_tokens(),
            k1: default_k1(),
            b: default_b(),
        }
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| MemlexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. MEMLEX_CONFIG env var
    /// 2. XDG config file (~/.config/memlex/config.toml)
    /// 3. ./memlex.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("MEMLEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("memlex.toml").exists() {
                Self::from_file("memlex.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        fn parse_var<T: std::str::FromStr>(name: &str, target: &mut T) {
            if let Ok(raw) = env::var(name) {
                match raw.parse() {
                    Ok(value) => *target = value,
                    Err(_) => tracing::warn!("Ignoring unparsable {}={:?}", name, raw),
                }
            }
        }

        // Segmenter configuration
        parse_var("MEMLEX_MAX_BLOCKS", &mut self.segmenter.max_blocks);
        parse_var("MEMLEX_MAX_STATEMENTS", &mut self.segmenter.max_statements);

        // Index configuration
        parse_var("MEMLEX_MAX_TOKENS", &mut self.index.max_tokens);
        parse_var("MEMLEX_MAX_DOCUMENTS", &mut self.index.max_documents);
        parse_var("MEMLEX_MAX_TOKEN_LEN", &mut self.index.max_token_len);

        // Search configuration
        parse_var("MEMLEX_DEFAULT_K", &mut self.search.default_k);
        parse_var("MEMLEX_MAX_K", &mut self.search.max_k);
        parse_var("MEMLEX_MAX_QUERY_LENGTH", &mut self.search.max_query_length);
        parse_var("MEMLEX_BM25_K1", &mut self.search.k1);
        parse_var("MEMLEX_BM25_B", &mut self.search.b);

        // Ingest configuration
        parse_var("MEMLEX_MAX_FILE_SIZE_MB", &mut self.ingest.max_file_size_mb);
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate segmenter config
        if self.segmenter.max_blocks == 0 {
            return Err(MemlexError::ConfigError(
                "Max blocks must be non-zero".to_string(),
            ));
        }

        if self.segmenter.max_statements == 0 {
            return Err(MemlexError::ConfigError(
                "Max statements must be non-zero".to_string(),
            ));
        }

        // Validate index config
        if !(MIN_TOKEN_LEN..=MAX_TOKEN_LEN).contains(&self.index.max_token_len) {
            return Err(MemlexError::ConfigError(format!(
                "Max token length must be between {MIN_TOKEN_LEN} and {MAX_TOKEN_LEN}"
            )));
        }

        // Validate search config
        if self.search.default_k == 0 {
            return Err(MemlexError::ConfigError(
                "Default k must be non-zero".to_string(),
            ));
        }

        if self.search.default_k > self.search.max_k {
            return Err(MemlexError::ConfigError(
                "Default k cannot exceed max k".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(MemlexError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.search.max_query_tokens == 0 || self.search.max_document_tokens == 0 {
            return Err(MemlexError::ConfigError(
                "Token limits must be non-zero".to_string(),
            ));
        }

        if !(self.search.k1.is_finite() && self.search.k1 >= 0.0) {
            return Err(MemlexError::ConfigError(
                "BM25 k1 must be a non-negative number".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.search.b) {
            return Err(MemlexError::ConfigError(
                "BM25 b must be between 0 and 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Max blocks: {}", self.segmenter.max_blocks);
        tracing::info!("  Max statements: {}", self.segmenter.max_statements);
        tracing::info!(
            "  Index sizing: {} tokens, {} documents",
            self.index.max_tokens,
            self.index.max_documents
        );
        tracing::info!("  Max token length: {} bytes", self.index.max_token_len);
        tracing::info!("  Default k: {}", self.search.default_k);
        tracing::info!("  Max k: {}", self.search.max_k);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  BM25: k1={} b={}", self.search.k1, self.search.b);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.ingest.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.ingest.exclude_patterns.len()
        );
    }
}
