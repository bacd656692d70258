//! Tests for CLI output rendering
//!
//! Covers the lines the search command prints for humans:
//! - Ingest summaries
//! - Hit headings and score formatting
//! - Preview lines for multi-byte transcript text

use crate::common::TranscriptRepo;
use crate::cli::test_helpers::create_cli_test_services;
use memlex::cli::output::{format_score, hit_heading, ingest_summary, preview_line};
use memlex::core::search::QueryMode;
use memlex::core::segment::BlockKind;
use memlex::core::types::{IngestStats, NodeKind};

/// Summary reports messages, documents, size and time
#[test]
fn test_ingest_summary_fields() {
    let stats = IngestStats {
        files_ingested: 3,
        files_skipped: 1,
        messages: 3,
        documents: 27,
        bytes: 3 * 1024 + 512,
        duration_ms: 1_250,
    };

    assert_eq!(
        ingest_summary(&stats),
        "Ingested 3 message(s), 27 documents (3.5 KB) in 1.25s"
    );
}

/// Summary of a real ingest matches the stats it came from
#[test]
fn test_ingest_summary_after_ingest() {
    let repo = TranscriptRepo::small();
    let services = create_cli_test_services();
    let pipeline = services.create_pipeline(vec![], vec![]).unwrap();
    let stats = pipeline
        .ingest_directory(repo.path(), &mut services.write_store().unwrap())
        .unwrap();

    let summary = ingest_summary(&stats);
    assert!(summary.starts_with("Ingested 3 message(s), "));
    assert!(summary.contains(&format!("{} documents", stats.documents)));
}

/// Scores keep four decimals so near-ties stay distinguishable
#[test]
fn test_format_score_precision() {
    assert_eq!(format_score(0.0), "0.0000");
    assert_eq!(format_score(1.23456), "1.2346");
    assert_ne!(format_score(0.81234), format_score(0.81236));
}

/// Heading names rank, source, node kind, ids and score
#[test]
fn test_hit_heading_contents() {
    let heading = hit_heading(
        2,
        Some("sessions/2024-05-01.md"),
        NodeKind::Block(BlockKind::Code),
        17,
        4,
        3.14159,
    );

    assert!(heading.contains('2'));
    assert!(heading.contains("sessions/2024-05-01.md"));
    assert!(heading.contains("code block"));
    assert!(heading.contains("doc 17, message 4, score 3.1416"));
}

/// Messages ingested without a source show a placeholder
#[test]
fn test_hit_heading_without_source() {
    let heading = hit_heading(1, None, NodeKind::Statement, 5, 1, 0.5);
    assert!(heading.contains('-'));
    assert!(heading.contains("statement"));
}

/// Headings built from real search results carry the hit's fields
#[test]
fn test_hit_heading_from_search_result() {
    let services = create_cli_test_services();
    services
        .write_store()
        .unwrap()
        .ingest("Rotate the API keys. Check the backup job!", Some("todo.txt"))
        .unwrap();

    let response = services
        .read_store()
        .unwrap()
        .search("backup job", QueryMode::All, Some(1))
        .unwrap();
    let hit = &response.results[0];

    let heading = hit_heading(
        1,
        hit.source.as_deref(),
        hit.kind,
        hit.document_id,
        hit.message_id,
        hit.score,
    );
    assert!(heading.contains("todo.txt"));
    assert!(heading.contains(&format_score(hit.score)));
}

/// Preview lines never split a multi-byte character
#[test]
fn test_preview_line_multibyte() {
    let line = "Fix the 🐛 in auth. ".repeat(10);
    let preview = preview_line(&line, 25);

    assert_eq!(preview.chars().count(), 25);
    assert!(preview.starts_with("Fix the 🐛 in auth."));
    assert!(preview.ends_with("..."));
    assert_eq!(preview_line("Café au lait.", 25), "Café au lait.");
}
