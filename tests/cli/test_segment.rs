//! Tests for the segment and tokenize CLI commands

use crate::cli::test_helpers::{create_cli_test_services, create_message_file};
use memlex::cli::commands::segment::{execute, segment_message, SegmentArgs};
use memlex::cli::commands::tokenize::{execute as execute_tokenize, TokenizeArgs};
use memlex::cli::OutputFormat;
use memlex::core::config::SegmenterConfig;
use memlex::core::segment::{BlockKind, Segmenter};

const MESSAGE: &str = "Dr. Lee fixed the build. It passes now.\n\n\
```rust\nfn main() {}\n```\n\n1. merge\n2. tag release\n";

/// Test segmenting text given on the command line
#[test]
fn test_segment_text_human() {
    let services = create_cli_test_services();
    let args = SegmentArgs {
        file: None,
        text: Some(MESSAGE.to_string()),
        blocks_only: false,
    };
    assert!(execute(args, &services, OutputFormat::Human).is_ok());
}

/// Test segmenting a file in JSON format
#[test]
fn test_segment_file_json() {
    let services = create_cli_test_services();
    let (_dir, path) = create_message_file(MESSAGE);

    let args = SegmentArgs {
        file: Some(path),
        text: None,
        blocks_only: true,
    };
    assert!(execute(args, &services, OutputFormat::Json).is_ok());
}

/// Test that a missing file is reported
#[test]
fn test_segment_missing_file() {
    let services = create_cli_test_services();
    let args = SegmentArgs {
        file: Some("/nonexistent/message.md".into()),
        text: None,
        blocks_only: false,
    };
    assert!(execute(args, &services, OutputFormat::Human).is_err());
}

/// Test the segmentation output structure
#[test]
fn test_segment_output_structure() {
    let output = segment_message(&Segmenter::default(), MESSAGE, false);

    assert_eq!(output.bytes, MESSAGE.len());
    assert_eq!(output.total_blocks, 3);

    let kinds: Vec<_> = output.blocks.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BlockKind::Text, BlockKind::Code, BlockKind::List]);

    let text = &output.blocks[0];
    let statements: Vec<_> = text
        .statements
        .as_ref()
        .unwrap()
        .iter()
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(statements, vec!["Dr. Lee fixed the build.", "It passes now."]);

    let list = &output.blocks[2];
    assert_eq!(list.statements.as_ref().unwrap().len(), 2);
    for block in &output.blocks {
        assert_eq!(&MESSAGE[block.start..block.end], block.text);
    }
}

/// Test that configured bounds apply to the output
#[test]
fn test_segment_respects_bounds() {
    let segmenter = Segmenter::from_config(&SegmenterConfig {
        max_blocks: 1,
        ..SegmenterConfig::default()
    });
    let output = segment_message(&segmenter, MESSAGE, true);
    assert_eq!(output.total_blocks, 1);
}

/// Test tokenizing text with counts
#[test]
fn test_tokenize_text_counts() {
    let services = create_cli_test_services();
    let args = TokenizeArgs {
        file: None,
        text: Some("The cat and the hat. THE END".to_string()),
        max_tokens: None,
        counts: true,
    };
    assert!(execute_tokenize(args, &services, OutputFormat::Json).is_ok());
}

/// Test tokenizing a file with a token limit
#[test]
fn test_tokenize_file_limited() {
    let services = create_cli_test_services();
    let (_dir, path) = create_message_file(MESSAGE);

    let args = TokenizeArgs {
        file: Some(path),
        text: None,
        max_tokens: Some(3),
        counts: false,
    };
    assert!(execute_tokenize(args, &services, OutputFormat::Human).is_ok());
}
