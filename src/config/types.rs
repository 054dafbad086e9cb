//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub vault: VaultConfig,
}

/// Workspace storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Workspace storage directory; empty means the VS Code default for this OS
    #[serde(default)]
    pub directory: String,
}

/// Rendering and ordering defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Replace typographic quotes with ASCII ones
    #[serde(default = "default_sanitize")]
    pub sanitize: bool,
    /// Default workspace sort spec (e.g. "-lastUpdate")
    #[serde(default)]
    pub sort_workspaces: String,
    /// Default chat sort spec
    #[serde(default)]
    pub sort_chats: String,
}

pub fn default_sanitize() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sanitize: default_sanitize(),
            sort_workspaces: String::new(),
            sort_chats: String::new(),
        }
    }
}

/// Obsidian vault export defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaultConfig {
    /// Full path to the vault; overrides `name` and `basedir`
    #[serde(default)]
    pub directory: String,
    /// Vault directory name under `basedir`
    #[serde(default)]
    pub name: String,
    /// Parent directory for vaults; empty means ~/Documents or ~/My Documents
    #[serde(default)]
    pub basedir: String,
    /// Note folder relative to the vault root
    #[serde(default)]
    pub note_folder: String,
    /// Require `.obsidian/workspace.json` inside the vault
    #[serde(default = "default_verify")]
    pub verify: bool,
}

pub fn default_verify() -> bool {
    true
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            directory: String::new(),
            name: String::new(),
            basedir: String::new(),
            note_folder: String::new(),
            verify: default_verify(),
        }
    }
}
