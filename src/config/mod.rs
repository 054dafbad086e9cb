//! Configuration management for chatmgr

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/chatmgr/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/chatmgr)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path, or defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Resolve the workspace storage directory.
    ///
    /// `override_dir` (from the command line) wins over the config file,
    /// which wins over the VS Code default for this OS.
    pub fn storage_directory(&self, override_dir: Option<&str>) -> Option<PathBuf> {
        let configured = override_dir
            .filter(|d| !d.is_empty())
            .or_else(|| Some(self.storage.directory.as_str()).filter(|d| !d.is_empty()));

        match configured {
            Some(dir) => Some(expand_home(dir)),
            None => default_storage_directory(),
        }
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(dir: &str) -> PathBuf {
    if let Some(stripped) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(dir)
}

/// VS Code's workspace storage directory for the current OS.
pub fn default_storage_directory() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    let relative: &[&str] = if cfg!(target_os = "windows") {
        &["AppData", "Roaming", "Code", "User", "workspaceStorage"]
    } else if cfg!(target_os = "macos") {
        &["Library", "Application Support", "Code", "User", "workspaceStorage"]
    } else if cfg!(target_os = "linux") {
        &[".config", "Code", "User", "workspaceStorage"]
    } else {
        return None;
    };
    Some(relative.iter().fold(home, |path, part| path.join(part)))
}
