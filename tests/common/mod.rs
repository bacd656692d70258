// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{TranscriptRepo, Utf8TestData, SCENARIO_DOCS};
#[allow(unused_imports)]
pub use helpers::{
    assert_valid_stats, create_test_services, ingest_test_repository,
    ingest_test_repository_with_patterns, scenario_index,
};
