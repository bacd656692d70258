//! Search command - ingest a directory and search it

use crate::cli::output::{
    colors, format_score, hit_heading, ingest_summary, preview_line, print_warning,
};
use crate::cli::OutputFormat;
use crate::core::index::DocumentId;
use crate::core::search::QueryMode;
use crate::core::services::Services;
use crate::core::types::{IngestStats, NodeKind};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (keywords)
    pub query: String,

    /// Directory (or file) of messages to search
    #[arg(long, short = 'p')]
    pub path: PathBuf,

    /// Maximum number of results (defaults to search.default_k)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Match any query token instead of all of them
    #[arg(long)]
    pub any: bool,

    /// Only show document ids and scores (no content)
    #[arg(long)]
    pub ids_only: bool,

    /// File patterns to include (defaults to ingest.include_patterns)
    #[arg(long = "include", short = 'i')]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (defaults to ingest.exclude_patterns)
    #[arg(long = "exclude", short = 'e')]
    pub exclude_patterns: Vec<String>,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub document_id: DocumentId,
    pub score: f64,
    pub kind: NodeKind,
    pub message_id: DocumentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub mode: QueryMode,
    pub tokens: Vec<String>,
    pub ingest: IngestStats,
    pub total_results: usize,
    pub duration_ms: u64,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = services.create_pipeline(args.include_patterns, args.exclude_patterns)?;
    let ingest = {
        let mut store = services.write_store()?;
        pipeline.ingest_directory(&args.path, &mut store)?
    };

    let mode = if args.any {
        QueryMode::Any
    } else {
        QueryMode::All
    };
    let response = services
        .read_store()?
        .search(&args.query, mode, args.limit)?;

    let output = SearchResponseOutput {
        query: response.query,
        mode,
        tokens: response.tokens,
        ingest,
        total_results: response.count,
        duration_ms: response.duration_ms,
        results: response
            .results
            .into_iter()
            .enumerate()
            .map(|(i, r)| SearchResultItem {
                rank: i + 1,
                document_id: r.document_id,
                score: r.score,
                kind: r.kind,
                message_id: r.message_id,
                source: r.source,
                text: (!args.ids_only).then_some(r.text),
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => print_human(&output, args.ids_only),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_human(output: &SearchResponseOutput, ids_only: bool) {
    println!("{}", colors::dim(&ingest_summary(&output.ingest)));
    if output.ingest.files_skipped > 0 {
        print_warning(&format!(
            "{} file(s) skipped (unreadable, binary or empty)",
            output.ingest.files_skipped
        ));
    }

    if output.results.is_empty() {
        println!("No results found for '{}'", colors::label(&output.query));
        return;
    }

    println!(
        "Found {} result(s) for '{}' ({}):\n",
        colors::number(&output.total_results.to_string()),
        colors::label(&output.query),
        output.mode.as_str()
    );

    for result in &output.results {
        if ids_only {
            println!(
                "{} {}",
                result.document_id,
                colors::score(&format_score(result.score))
            );
            continue;
        }

        println!(
            "{}",
            hit_heading(
                result.rank,
                result.source.as_deref(),
                result.kind,
                result.document_id,
                result.message_id,
                result.score
            )
        );
        if let Some(text) = &result.text {
            for line in text.lines().take(5) {
                println!("    {}", colors::dim(&preview_line(line, 100)));
            }
        }
        println!();
    }
}
