//! Chat manager library
//!
//! Reads GitHub Copilot chat sessions from VS Code workspace storage and
//! reconstructs readable markdown transcripts from them.

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod transcript;
pub mod vault;
pub mod workspace;

pub use config::Config;
pub use transcript::{ExchangeRecord, Session};
pub use vault::{Vault, VaultOptions};
pub use workspace::{Workspace, Workspaces};
