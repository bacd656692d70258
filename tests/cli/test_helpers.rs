//! CLI test helpers
//!
//! Provides utilities for testing CLI commands including:
//! - Transcript directory creation with specific file content
//! - Arc<Services> wrappers matching CLI execute() signatures

use memlex::core::config::Config;
use memlex::core::services::Services;
use std::sync::Arc;
use tempfile::TempDir;

/// Create test services wrapped in Arc (matching CLI execute() signatures)
pub fn create_cli_test_services() -> Arc<Services> {
    Arc::new(Services::new(Config::default()))
}

/// Create test services from a modified default configuration
pub fn create_cli_test_services_with(configure: impl FnOnce(&mut Config)) -> Arc<Services> {
    let mut config = Config::default();
    configure(&mut config);
    Arc::new(Services::new(config))
}

/// Create a transcript directory with specified files
///
/// # Arguments
/// * `files` - Slice of (relative_path, content) tuples
///
/// # Returns
/// TempDir containing the files (keep alive during test)
pub fn create_test_repo(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
    temp
}

/// Standard transcript files for search tests
pub fn search_test_files() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "2024-06-01.md",
            "The deploy failed on staging. Rollback took ten minutes.\n\n\
             ```sh\nkubectl rollout undo deployment/api\n```\n",
        ),
        (
            "2024-06-02.md",
            "We added a canary stage to the deploy pipeline. \
             Canary traffic starts at five percent.\n\n\
             - watch error rates\n- promote after one hour\n",
        ),
        (
            "2024-06-03.log",
            "Postmortem scheduled for Friday. Owners: platform team.",
        ),
        ("notes/scratch.txt", "Remember the canary dashboard link."),
        ("image.bin", "ignored by default patterns"),
    ]
}

/// Write a short message to a file and return its directory
pub fn create_message_file(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp = create_test_repo(&[("message.md", content)]);
    let path = temp.path().join("message.md");
    (temp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_repo() {
        let files = [("test.txt", "hello"), ("dir/nested.txt", "world")];
        let repo = create_test_repo(&files);

        assert!(repo.path().join("test.txt").exists());
        assert!(repo.path().join("dir/nested.txt").exists());

        let content = std::fs::read_to_string(repo.path().join("test.txt")).unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_create_cli_test_services() {
        let services = create_cli_test_services();
        assert!(services.config.search.default_k > 0);
        assert_eq!(services.read_store().unwrap().message_count(), 0);
    }

    #[test]
    fn test_create_cli_test_services_with() {
        let services = create_cli_test_services_with(|c| c.search.default_k = 3);
        assert_eq!(services.config.search.default_k, 3);
    }

    #[test]
    fn test_search_test_files_not_empty() {
        let files = search_test_files();
        assert!(files.len() >= 4);
    }
}
