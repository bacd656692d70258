//! Tests for the search CLI command
//!
//! Tests the search command handler with various scenarios:
//! - Valid queries with results
//! - Empty results
//! - Invalid queries and paths
//! - Output format variations

use crate::cli::test_helpers::{
    create_cli_test_services, create_cli_test_services_with, create_test_repo, search_test_files,
};
use memlex::cli::commands::search::{execute, SearchArgs};
use memlex::cli::OutputFormat;
use memlex::core::search::QueryMode;
use std::path::Path;

fn search_args(query: &str, path: &Path) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        path: path.to_path_buf(),
        limit: None,
        any: false,
        ids_only: false,
        include_patterns: vec![],
        exclude_patterns: vec![],
    }
}

/// Test search with valid query returning results
#[test]
fn test_search_valid_query_human() {
    let services = create_cli_test_services();
    let repo = create_test_repo(&search_test_files());

    let result = execute(search_args("canary", repo.path()), &services, OutputFormat::Human);
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());

    // Four transcript files match the default patterns
    let store = services.read_store().unwrap();
    assert_eq!(store.message_count(), 4);
}

/// Test search with valid query in JSON format
#[test]
fn test_search_valid_query_json() {
    let services = create_cli_test_services();
    let repo = create_test_repo(&search_test_files());

    let mut args = search_args("deploy", repo.path());
    args.limit = Some(3);
    let result = execute(args, &services, OutputFormat::Json);
    assert!(
        result.is_ok(),
        "JSON search should succeed: {:?}",
        result.err()
    );
}

/// Test search with no matches
#[test]
fn test_search_empty_results() {
    let services = create_cli_test_services();
    let repo = create_test_repo(&search_test_files());

    let result = execute(
        search_args("xyznonexistent", repo.path()),
        &services,
        OutputFormat::Human,
    );
    assert!(result.is_ok(), "Empty results should not be an error");
}

/// Test any-mode search and ids-only output
#[test]
fn test_search_any_ids_only() {
    let services = create_cli_test_services();
    let repo = create_test_repo(&search_test_files());

    let mut args = search_args("rollback postmortem", repo.path());
    args.any = true;
    args.ids_only = true;
    assert!(execute(args, &services, OutputFormat::Json).is_ok());

    let store = services.read_store().unwrap();
    let all = store
        .search("rollback postmortem", QueryMode::All, None)
        .unwrap();
    let any = store
        .search("rollback postmortem", QueryMode::Any, None)
        .unwrap();
    assert_eq!(all.count, 0);
    assert!(any.count >= 2);
}

/// Test custom include patterns limit what is ingested
#[test]
fn test_search_include_patterns() {
    let services = create_cli_test_services();
    let repo = create_test_repo(&search_test_files());

    let mut args = search_args("canary", repo.path());
    args.include_patterns = vec!["*.txt".to_string()];
    assert!(execute(args, &services, OutputFormat::Human).is_ok());

    assert_eq!(services.read_store().unwrap().message_count(), 1);
}

/// Test that a blank query is rejected
#[test]
fn test_search_blank_query() {
    let services = create_cli_test_services();
    let repo = create_test_repo(&search_test_files());

    let result = execute(search_args("   ", repo.path()), &services, OutputFormat::Human);
    assert!(result.is_err(), "Blank query should fail");
}

/// Test that an over-long query is rejected
#[test]
fn test_search_query_too_long() {
    let services = create_cli_test_services_with(|c| c.search.max_query_length = 10);
    let repo = create_test_repo(&search_test_files());

    let result = execute(
        search_args("canary deploy pipeline", repo.path()),
        &services,
        OutputFormat::Json,
    );
    assert!(result.is_err(), "Query over the length limit should fail");
}

/// Test that a missing directory is reported
#[test]
fn test_search_missing_path() {
    let services = create_cli_test_services();

    let result = execute(
        search_args("canary", Path::new("/nonexistent/transcripts")),
        &services,
        OutputFormat::Human,
    );
    assert!(result.is_err(), "Missing path should fail");
}

/// Test search over a single file path
#[test]
fn test_search_single_file() {
    let services = create_cli_test_services();
    let repo = create_test_repo(&search_test_files());

    let result = execute(
        search_args("kubectl", &repo.path().join("2024-06-01.md")),
        &services,
        OutputFormat::Human,
    );
    assert!(result.is_ok());
    assert_eq!(services.read_store().unwrap().message_count(), 1);
}
