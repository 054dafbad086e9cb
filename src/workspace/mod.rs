//! Workspace discovery.
//!
//! VS Code keeps one directory per workspace under its workspace storage
//! directory:
//!
//! ```text
//! workspaceStorage/
//!   <workspace id>/
//!     workspace.json          {"folder": "file:///home/me/project"}
//!     chatSessions/
//!       <chat id>.json        session document
//! ```

mod error;
pub mod sort;

pub use error::WorkspaceError;
pub use sort::{sort_by_spec, SortKeys, SortSpec};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, error, warn};

use crate::transcript::Session;

/// Sub-directory holding session documents.
pub const CHAT_SESSIONS_DIR: &str = "chatSessions";

/// Optional per-workspace metadata file.
pub const METADATA_FILE: &str = "workspace.json";

/// All workspaces with chat sessions under a storage directory.
#[derive(Debug, Clone)]
pub struct Workspaces {
    storage_dir: PathBuf,
    workspaces: Vec<Workspace>,
}

impl Workspaces {
    /// Scan `storage_dir` for workspaces.
    ///
    /// Never fails: a missing storage directory yields an empty collection,
    /// and unusable workspace directories are skipped with a diagnostic.
    pub fn load(storage_dir: &Path) -> Self {
        let mut workspaces = Self {
            storage_dir: storage_dir.to_path_buf(),
            workspaces: Vec::new(),
        };

        let entries = match fs::read_dir(storage_dir) {
            Ok(entries) => entries,
            Err(e) => {
                error!(path = %storage_dir.display(), "storage directory is not readable: {}", e);
                return workspaces;
            }
        };

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();

        for dir in dirs {
            match Workspace::load(&dir) {
                Ok(workspace) => workspaces.workspaces.push(workspace),
                Err(e) if e.is_expected_skip() => debug!("{}", e),
                Err(e) => warn!(path = %dir.display(), "skipping invalid workspace directory: {}", e),
            }
        }

        workspaces
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Workspace> {
        self.workspaces.iter()
    }

    /// Find a workspace by id prefix. Accepts elided ids like `abc123...`.
    pub fn find(&self, id: &str) -> Option<&Workspace> {
        position_by_prefix(&self.workspaces, id, |w| w.id()).map(|i| &self.workspaces[i])
    }

    /// Like [`find`](Self::find), for callers that re-sort the workspace's chats.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Workspace> {
        position_by_prefix(&self.workspaces, id, |w| w.id()).map(|i| &mut self.workspaces[i])
    }

    /// Order workspaces by `spec`; an invalid attribute leaves them as they are.
    pub fn sort(&mut self, spec: &SortSpec) {
        sort_by_spec(&mut self.workspaces, spec);
    }
}

impl<'a> IntoIterator for &'a Workspaces {
    type Item = &'a Workspace;
    type IntoIter = std::slice::Iter<'a, Workspace>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One workspace directory and its parsed chat sessions.
#[derive(Debug, Clone)]
pub struct Workspace {
    id: String,
    path: PathBuf,
    folder: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
    chats: Vec<Session>,
}

impl Workspace {
    /// Load a workspace directory.
    ///
    /// # Errors
    ///
    /// - [`WorkspaceError::NotFound`] if `dir` does not exist
    /// - [`WorkspaceError::NoChatSessions`] if it has no `chatSessions/`
    /// - [`WorkspaceError::Metadata`] if `workspace.json` is not valid JSON
    pub fn load(dir: &Path) -> Result<Self, WorkspaceError> {
        if !dir.is_dir() {
            return Err(WorkspaceError::NotFound {
                path: dir.to_path_buf(),
            });
        }

        let sessions_dir = dir.join(CHAT_SESSIONS_DIR);
        if !sessions_dir.is_dir() {
            return Err(WorkspaceError::NoChatSessions { path: sessions_dir });
        }

        let id = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let meta = fs::metadata(dir).map_err(|e| WorkspaceError::io(dir, e))?;
        let created = file_time(meta.created().or_else(|_| meta.modified()));

        let folder = read_folder(&dir.join(METADATA_FILE))?;
        let (chats, newest) = load_chats(&sessions_dir)?;

        Ok(Self {
            id,
            path: dir.to_path_buf(),
            folder,
            created,
            updated: newest.unwrap_or(created),
            chats,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Project folder URI from `workspace.json`, or empty.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Modification time of the newest session file.
    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    pub fn chats(&self) -> &[Session] {
        &self.chats
    }

    /// Find a chat by id prefix.
    pub fn find(&self, id: &str) -> Option<&Session> {
        position_by_prefix(&self.chats, id, |c| c.id()).map(|i| &self.chats[i])
    }

    /// Order chats by `spec`; an invalid attribute leaves them as they are.
    pub fn sort(&mut self, spec: &SortSpec) {
        sort_by_spec(&mut self.chats, spec);
    }
}

/// Index of the first item whose id starts with `id`, ignoring case,
/// surrounding whitespace and a trailing ellipsis.
fn position_by_prefix<T>(items: &[T], id: &str, id_of: impl Fn(&T) -> &str) -> Option<usize> {
    let needle = id.trim().trim_end_matches('.').to_lowercase();
    if needle.is_empty() {
        return None;
    }
    items
        .iter()
        .position(|item| id_of(item).to_lowercase().starts_with(&needle))
}

fn file_time(time: std::io::Result<SystemTime>) -> DateTime<Utc> {
    time.map(DateTime::<Utc>::from).unwrap_or_default()
}

/// Read the `folder` field of the metadata file. A missing file is not fatal.
fn read_folder(path: &Path) -> Result<String, WorkspaceError> {
    if !path.exists() {
        warn!(path = %path.display(), "workspace metadata file does not exist");
        return Ok(String::new());
    }

    let contents = fs::read_to_string(path).map_err(|e| WorkspaceError::io(path, e))?;
    let metadata: serde_json::Value =
        serde_json::from_str(&contents).map_err(|source| WorkspaceError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(metadata
        .get("folder")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string())
}

/// Parse every session file in `dir`, in name order.
///
/// Returns the sessions and the newest file modification time.
fn load_chats(dir: &Path) -> Result<(Vec<Session>, Option<DateTime<Utc>>), WorkspaceError> {
    let mut files: Vec<(PathBuf, DateTime<Utc>)> = fs::read_dir(dir)
        .map_err(|e| WorkspaceError::io(dir, e))?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let meta = entry.metadata().ok()?;
            meta.is_file()
                .then(|| (entry.path(), file_time(meta.modified())))
        })
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let newest = files.iter().map(|(_, modified)| *modified).max();

    let chats: Vec<Session> = files
        .par_iter()
        .filter_map(|(path, modified)| load_chat(path, *modified))
        .collect();

    Ok((chats, newest))
}

fn load_chat(path: &Path, modified: DateTime<Utc>) -> Option<Session> {
    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(file = %path.display(), "failed to read chat session: {}", e);
            return None;
        }
    };

    match Session::build(text, &id, modified) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!(file = %path.display(), "failed to load chat session: {}", e);
            None
        }
    }
}
