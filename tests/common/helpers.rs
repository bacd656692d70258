// Test helper functions

use memlex::core::config::{Config, IndexConfig};
use memlex::core::index::InvertedIndex;
use memlex::core::services::Services;
use memlex::core::types::IngestStats;
use std::path::Path;

use super::fixtures::SCENARIO_DOCS;

/// Create test services with default configuration
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services() -> Services {
    Services::new(Config::default())
}

/// Index holding the three-document scenario corpus
#[allow(dead_code)] // Used in integration tests
pub fn scenario_index() -> InvertedIndex {
    let mut index = InvertedIndex::new(&IndexConfig::default());
    for (id, tokens) in SCENARIO_DOCS {
        index.add(id, &tokens).expect("scenario add");
    }
    index
}

/// Assert that ingest stats are consistent
#[allow(dead_code)] // Used in integration tests
pub fn assert_valid_stats(stats: &IngestStats) {
    assert!(
        stats.files_ingested > 0,
        "Expected files_ingested > 0, got {}",
        stats.files_ingested
    );
    assert_eq!(
        stats.messages, stats.files_ingested,
        "Every ingested file should be one message"
    );
    assert!(
        stats.documents >= stats.messages,
        "Expected documents ({}) >= messages ({})",
        stats.documents,
        stats.messages
    );
    assert!(stats.bytes > 0, "Expected bytes > 0");
}

/// Ingest a directory with the configured patterns
#[allow(dead_code)] // Used in integration tests
pub fn ingest_test_repository(services: &Services, repo_path: &Path) -> IngestStats {
    ingest_test_repository_with_patterns(services, repo_path, vec![], vec![])
}

/// Ingest a directory with custom patterns
#[allow(dead_code)] // Used in integration tests
pub fn ingest_test_repository_with_patterns(
    services: &Services,
    repo_path: &Path,
    include_patterns: Vec<String>,
    exclude_patterns: Vec<String>,
) -> IngestStats {
    let pipeline = services
        .create_pipeline(include_patterns, exclude_patterns)
        .expect("Failed to create pipeline");
    let mut store = services.write_store().expect("Store lock");
    pipeline
        .ingest_directory(repo_path, &mut store)
        .expect("Failed to ingest directory")
}
