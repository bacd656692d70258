//! Segment command - split a message into blocks and statements

use crate::cli::output::{colors, print_header};
use crate::cli::OutputFormat;
use crate::core::segment::{BlockKind, Segmenter};
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the segment command
#[derive(Args, Debug)]
pub struct SegmentArgs {
    /// File containing the message
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Message text (instead of a file)
    #[arg(long, short = 't')]
    pub text: Option<String>,

    /// Only show blocks, not statements
    #[arg(long)]
    pub blocks_only: bool,
}

/// A statement in the output
#[derive(Debug, Serialize)]
pub struct StatementOutput {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// A block in the output
#[derive(Debug, Serialize)]
pub struct BlockOutput {
    pub index: usize,
    pub kind: BlockKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub start: usize,
    pub end: usize,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statements: Option<Vec<StatementOutput>>,
}

/// Segment response
#[derive(Debug, Serialize)]
pub struct SegmentOutput {
    pub bytes: usize,
    pub total_blocks: usize,
    pub blocks: Vec<BlockOutput>,
}

/// Build the segmentation output for a message
pub fn segment_message(segmenter: &Segmenter, content: &str, blocks_only: bool) -> SegmentOutput {
    let blocks: Vec<BlockOutput> = segmenter
        .segment_blocks(content)
        .iter()
        .enumerate()
        .map(|(index, block)| BlockOutput {
            index,
            kind: block.kind,
            language: block.language.clone(),
            start: block.span.offset(),
            end: block.span.end(),
            text: block.text().to_string(),
            statements: (!blocks_only).then(|| {
                segmenter
                    .segment_statements(block)
                    .iter()
                    .map(|s| StatementOutput {
                        start: s.offset(),
                        end: s.end(),
                        text: s.as_str().to_string(),
                    })
                    .collect()
            }),
        })
        .collect();

    SegmentOutput {
        bytes: content.len(),
        total_blocks: blocks.len(),
        blocks,
    }
}

/// Execute the segment command
pub fn execute(
    args: SegmentArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = super::read_input(args.text, args.file.as_deref())?;
    let segmenter = Segmenter::from_config(&services.config.segmenter);
    let output = segment_message(&segmenter, &content, args.blocks_only);

    match format {
        OutputFormat::Human => {
            print_header(&format!(
                "{} block(s) in {} bytes",
                output.total_blocks, output.bytes
            ));
            for block in &output.blocks {
                let kind = match &block.language {
                    Some(language) => format!("{} ({language})", block.kind.as_str()),
                    None => block.kind.as_str().to_string(),
                };
                println!(
                    "\n[{}] {} {}",
                    colors::rank(&block.index.to_string()),
                    colors::label(&kind),
                    colors::dim(&format!("{}..{}", block.start, block.end))
                );
                match &block.statements {
                    Some(statements) => {
                        for statement in statements {
                            println!("    - {}", statement.text);
                        }
                    }
                    None => {
                        for line in block.text.lines() {
                            println!("    {}", colors::dim(line));
                        }
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
