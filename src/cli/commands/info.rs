//! Info command - show version and store information

use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::tokenizer::{MAX_TOKEN_LEN, MIN_TOKEN_LEN};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Ingest this directory and report store statistics
    #[arg(long, short = 'p')]
    pub path: Option<PathBuf>,
}

/// Store statistics after ingesting a directory
#[derive(Debug, Serialize)]
pub struct StoreInfo {
    pub messages: usize,
    pub documents: usize,
    pub vocabulary: usize,
    pub total_tokens: u64,
    pub average_document_length: f64,
    pub files_skipped: usize,
}

/// Version and store information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub ranking: String,
    pub token_length: (usize, usize),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreInfo>,
}

/// Execute the info command
pub fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = match &args.path {
        Some(path) => {
            let pipeline = services.create_pipeline(Vec::new(), Vec::new())?;
            let mut store = services.write_store()?;
            let stats = pipeline.ingest_directory(path, &mut store)?;
            let index_stats = store.statistics();

            Some(StoreInfo {
                messages: store.message_count(),
                documents: index_stats.active_documents,
                vocabulary: store.vocabulary_size(),
                total_tokens: index_stats.total_tokens,
                average_document_length: index_stats.average_document_length,
                files_skipped: stats.files_skipped,
            })
        }
        None => None,
    };

    let search = &services.config.search;
    let info = InfoResponse {
        name: "memlex".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ranking: format!("BM25 (k1={}, b={})", search.k1, search.b),
        token_length: (MIN_TOKEN_LEN, services.config.index.max_token_len.min(MAX_TOKEN_LEN)),
        store,
    };

    match format {
        OutputFormat::Human => {
            println!("memlex {}", info.version);
            println!("Ranking: {}", info.ranking);
            println!(
                "Token length: {}..={} bytes",
                info.token_length.0, info.token_length.1
            );
            if let Some(store) = &info.store {
                println!("Messages: {}", store.messages);
                println!("Documents: {}", store.documents);
                println!("Vocabulary: {}", store.vocabulary);
                println!("Total tokens: {}", store.total_tokens);
                println!(
                    "Average document length: {:.2}",
                    store.average_document_length
                );
                if store.files_skipped > 0 {
                    println!("Files skipped: {}", store.files_skipped);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
