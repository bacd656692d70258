//! Hierarchical text segmentation.
//!
//! Decomposes a message into ordered blocks (paragraphs, lists,
//! fenced code) and each block into ordered statements (sentences
//! for prose, lines for code). Segmentation is a pure function
//! over borrowed text: every [`Block`] and [`TextSpan`] points into
//! the caller's buffer and cannot outlive it.
//!
//! Output counts are bounded. Blocks or statements past the limit
//! are silently dropped rather than reported as errors.
//!
//! # Example
//!
//! ```
//! use memlex::core::segment::{segment_blocks, segment_statements, BlockKind};
//!
//! let content = "Para one.\n\n```py\nprint(1)\n```\n\nPara two.";
//! let blocks = segment_blocks(content);
//!
//! assert_eq!(blocks.len(), 3);
//! assert_eq!(blocks[1].kind, BlockKind::Code);
//! assert_eq!(blocks[1].language.as_deref(), Some("py"));
//! assert_eq!(segment_statements(&blocks[0])[0].as_str(), "Para one.");
//! ```

mod abbreviations;
mod blocks;
mod span;
mod statements;

pub use abbreviations::is_abbreviation;
pub use blocks::{Block, BlockKind};
pub use span::TextSpan;

use crate::core::config::SegmenterConfig;

/// Default cap on blocks per message
pub const DEFAULT_MAX_BLOCKS: usize = 256;

/// Default cap on statements per block
pub const DEFAULT_MAX_STATEMENTS: usize = 1024;

/// Default cap on the code fence language hint, in bytes
pub const DEFAULT_MAX_LANGUAGE_LEN: usize = 32;

/// Segmenter with configurable output bounds.
#[derive(Debug, Clone)]
pub struct Segmenter {
    max_blocks: usize,
    max_statements: usize,
    max_language_len: usize,
}

impl Segmenter {
    pub fn new(max_blocks: usize, max_statements: usize, max_language_len: usize) -> Self {
        Self {
            max_blocks,
            max_statements,
            max_language_len,
        }
    }

    pub fn from_config(config: &SegmenterConfig) -> Self {
        Self::new(
            config.max_blocks,
            config.max_statements,
            config.max_language_len,
        )
    }

    pub fn max_blocks(&self) -> usize {
        self.max_blocks
    }

    pub fn max_statements(&self) -> usize {
        self.max_statements
    }

    /// Split content into ordered, non-empty blocks.
    pub fn segment_blocks<'a>(&self, content: &'a str) -> Vec<Block<'a>> {
        blocks::split_blocks(content, self.max_blocks, self.max_language_len)
    }

    /// Split a block into ordered, trimmed, non-empty statements.
    pub fn segment_statements<'a>(&self, block: &Block<'a>) -> Vec<TextSpan<'a>> {
        statements::split_statements(block, self.max_statements)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_BLOCKS,
            DEFAULT_MAX_STATEMENTS,
            DEFAULT_MAX_LANGUAGE_LEN,
        )
    }
}

/// Split content into blocks using the default bounds.
pub fn segment_blocks(content: &str) -> Vec<Block<'_>> {
    Segmenter::default().segment_blocks(content)
}

/// Split a block into statements using the default bounds.
pub fn segment_statements<'a>(block: &Block<'a>) -> Vec<TextSpan<'a>> {
    Segmenter::default().segment_statements(block)
}
