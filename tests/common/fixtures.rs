// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Three-document corpus used across ranking tests
#[allow(dead_code)] // Used in integration tests
pub const SCENARIO_DOCS: [(u64, [&str; 3]); 3] = [
    (1, ["hello", "world", "test"]),
    (2, ["hello", "everyone", "test"]),
    (3, ["goodbye", "world", "test"]),
];

/// Directory of transcript files for ingestion tests
#[allow(dead_code)] // Used in integration tests
pub struct TranscriptRepo {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TranscriptRepo {
    /// A small set of agent session notes
    #[allow(dead_code)] // Used in integration tests
    pub fn small() -> Self {
        Self::with_files(&[
            (
                "sessions/2024-05-01.md",
                "The user wants faster builds. We enabled incremental compilation.\n\n\
                 ```toml\n[profile.dev]\nincremental = true\n```\n\n\
                 Build time dropped from 90s to 20s.",
            ),
            (
                "sessions/2024-05-02.md",
                "Dr. Rivera reviewed the cache design. She asked for an LRU.\n\n\
                 - evict oldest entries first\n- cap memory at 512 MB\n",
            ),
            (
                "notes/todo.txt",
                "Rotate the API keys. Check the backup job! Why did it fail?",
            ),
            ("notes/empty.txt", ""),
            ("assets/logo.png", "not really an image"),
        ])
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Get path to the repository
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// UTF-8 test data for safety validation
#[allow(dead_code)] // Used in integration tests
pub struct Utf8TestData {
    pub emoji: Vec<&'static str>,
    pub multibyte: Vec<&'static str>,
    pub mixed: Vec<&'static str>,
    pub edge_cases: Vec<&'static str>,
}

impl Utf8TestData {
    #[allow(dead_code)] // Used in integration tests
    pub fn new() -> Self {
        Self {
            emoji: vec![
                "Hello 👋 World. Next one 🦀!",
                "Testing 🧪 code. Done ✅",
                "🚀 Launch time. Warning ⚠️ ahead?",
                "Celebrate 🎉🎊🥳. Really.",
            ],
            multibyte: vec![
                "中文测试。Second sentence here.",
                "مرحبا بالعالم. Hello again.",
                "שלום עולם. Shalom world.",
                "Привет мир. Hi world.",
                "こんにちは世界. Konnichiwa.",
                "Γειά σου κόσμε. Greek text.",
            ],
            mixed: vec![
                "Fix the 🐛 in auth.\n\n```rust\nlet s = \"中文\";\n```\n\nThen ship 🚢.",
                "- 第一 item\n- second 項目\n",
                "Café au lait. Naïve résumé! Über straße?",
            ],
            edge_cases: vec![
                "🦀",
                "中",
                "\n\n\n",
                "   \t  \n  ",
                "é.",
                "```\n🦀\n```",
                "~~~ 日本語\ncode\n~~~",
            ],
        }
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn all(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.emoji
            .iter()
            .chain(&self.multibyte)
            .chain(&self.mixed)
            .chain(&self.edge_cases)
            .copied()
    }
}

impl Default for Utf8TestData {
    fn default() -> Self {
        Self::new()
    }
}
