//! Tokenize command - show the tokens indexed for some text

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::tokenizer::Tokenizer;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the tokenize command
#[derive(Args, Debug)]
pub struct TokenizeArgs {
    /// File containing the text
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Text to tokenize (instead of a file)
    #[arg(long, short = 't')]
    pub text: Option<String>,

    /// Maximum number of tokens to produce
    #[arg(long, short = 'n')]
    pub max_tokens: Option<usize>,

    /// Show token counts instead of the token sequence
    #[arg(long)]
    pub counts: bool,
}

/// Tokenize response
#[derive(Debug, Serialize)]
pub struct TokenizeOutput {
    pub total_tokens: usize,
    pub distinct_tokens: usize,
    pub tokens: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<BTreeMap<String, usize>>,
}

/// Execute the tokenize command
pub fn execute(
    args: TokenizeArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = super::read_input(args.text, args.file.as_deref())?;
    let config = &services.config;
    let tokenizer = Tokenizer::new(config.index.max_token_len);
    let max_tokens = args
        .max_tokens
        .unwrap_or(config.search.max_document_tokens);

    let tokens = tokenizer.tokenize(&text, max_tokens);
    let mut counts = BTreeMap::new();
    for token in &tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }

    let output = TokenizeOutput {
        total_tokens: tokens.len(),
        distinct_tokens: counts.len(),
        tokens,
        counts: args.counts.then_some(counts),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} token(s), {} distinct",
                colors::number(&output.total_tokens.to_string()),
                colors::number(&output.distinct_tokens.to_string())
            );
            match &output.counts {
                Some(counts) => {
                    for (token, count) in counts {
                        println!("  {token} {}", colors::dim(&count.to_string()));
                    }
                }
                None => println!("{}", output.tokens.join(" ")),
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
