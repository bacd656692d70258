//! Config command - show current configuration

use crate::cli::output::print_header;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the configuration as TOML (ready to save as config.toml)
    #[arg(long)]
    pub toml: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    pub config_file_exists: bool,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();

    if args.toml {
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }

    let config_file = XdgDirs::new().config_file();
    let response = ConfigResponse {
        config_file: config_file.to_string_lossy().into_owned(),
        config_file_exists: config_file.exists(),
        config,
    };

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            let state = if response.config_file_exists {
                "found"
            } else {
                "not found, using defaults"
            };
            println!("  config_file: {} ({state})", response.config_file);
            println!("  segmenter:");
            println!("    max_blocks: {}", config.segmenter.max_blocks);
            println!("    max_statements: {}", config.segmenter.max_statements);
            println!("    max_language_len: {}", config.segmenter.max_language_len);
            println!("  index:");
            println!("    max_tokens: {}", config.index.max_tokens);
            println!("    max_documents: {}", config.index.max_documents);
            println!("    max_token_len: {}", config.index.max_token_len);
            println!("  search:");
            println!("    default_k: {}", config.search.default_k);
            println!("    max_k: {}", config.search.max_k);
            println!("    max_query_length: {}", config.search.max_query_length);
            println!("    max_query_tokens: {}", config.search.max_query_tokens);
            println!(
                "    max_document_tokens: {}",
                config.search.max_document_tokens
            );
            println!("    k1: {}", config.search.k1);
            println!("    b: {}", config.search.b);
            println!("  ingest:");
            println!("    max_file_size_mb: {}", config.ingest.max_file_size_mb);
            println!("    include_patterns: {:?}", config.ingest.include_patterns);
            println!("    exclude_patterns: {:?}", config.ingest.exclude_patterns);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
