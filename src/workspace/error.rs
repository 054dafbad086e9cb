//! Workspace loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a workspace directory.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("workspace folder does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("workspace does not contain any chat sessions: {path}")]
    NoChatSessions { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid workspace metadata in {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl WorkspaceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WorkspaceError::Io {
            path: path.into(),
            source,
        }
    }

    /// A directory without chat sessions is not a defect, just not a workspace of interest.
    pub fn is_expected_skip(&self) -> bool {
        matches!(self, WorkspaceError::NoChatSessions { .. })
    }
}
