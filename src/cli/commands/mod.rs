//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod info;
pub mod search;
pub mod segment;
pub mod tokenize;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use info::InfoArgs;
pub use search::SearchArgs;
pub use segment::SegmentArgs;
pub use tokenize::TokenizeArgs;

use std::fs;
use std::path::Path;

/// Message text from `--text` or a file path, in that order.
pub(crate) fn read_input(
    text: Option<String>,
    file: Option<&Path>,
) -> Result<String, Box<dyn std::error::Error>> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()).into()),
        (None, None) => Err("Provide a file or --text".into()),
    }
}
