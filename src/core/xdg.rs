//! XDG Base Directory Support
//!
//! Resolves where memlex looks for its configuration file on
//! Linux/Unix systems.

use std::env;
use std::path::PathBuf;

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// XDG directory structure for memlex
///
/// memlex keeps nothing on disk, so only the config directory is
/// resolved.
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. MEMLEX_CONFIG_DIR
    /// 2. XDG_CONFIG_HOME
    /// 3. XDG default (~/.config)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("MEMLEX_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("memlex");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("memlex")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // Explicit override
        if let Ok(file) = env::var("MEMLEX_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::info!("XDG directories resolved:");
        tracing::info!("  Config: {:?}", self.config_dir);
        tracing::info!("  Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
