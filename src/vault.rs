//! Obsidian vault note export.
//!
//! A vault is a directory containing `.obsidian/workspace.json`. Notes are
//! markdown files with a YAML frontmatter block.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::output::format::timestamp;

/// Vault settings directory.
pub const OBSIDIAN_DIR: &str = ".obsidian";

/// `document-type` written into every exported note.
pub const DOCUMENT_TYPE: &str = "copilot chat";

/// Errors that can occur while locating a vault or writing a note.
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("vault directory could not be determined; specify --vault or both --vault-name and --vault-basedir")]
    Unresolved,

    #[error("vault directory does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("not a valid Obsidian vault; missing {missing}: {path}")]
    NotAVault { path: PathBuf, missing: &'static str },

    #[error("note file could not be determined; specify --note or --note-title")]
    NoteUnresolved,

    #[error("note directory does not exist: {path}")]
    NoteDirMissing { path: PathBuf },

    #[error("note file already exists (use --note-overwrite to allow replacement): {path}")]
    NoteExists { path: PathBuf },

    #[error("failed to write note {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the vault is and which note to write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VaultOptions {
    /// Full path to the vault; overrides `name` and `basedir`
    pub vault: Option<String>,
    pub name: Option<String>,
    pub basedir: Option<String>,
    /// Skip the `.obsidian/workspace.json` check
    pub no_verify: bool,
    /// Note folder relative to the vault root
    pub note_folder: String,
    /// Note title without `.md`
    pub note_title: Option<String>,
    /// Note path relative to the vault root; overrides folder and title
    pub note: Option<String>,
    pub overwrite: bool,
}

/// A verified vault and the resolved note path inside it.
#[derive(Debug, Clone)]
pub struct Vault {
    dir: PathBuf,
    note_file: PathBuf,
    overwrite: bool,
}

impl Vault {
    /// Resolve and validate the vault and note location.
    pub fn open(options: &VaultOptions) -> Result<Self, VaultError> {
        let dir = vault_dir(options).ok_or(VaultError::Unresolved)?;
        if !dir.is_dir() {
            return Err(VaultError::NotFound { path: dir });
        }
        if !options.no_verify {
            verify(&dir)?;
        }

        let note_file = note_path(&dir, options).ok_or(VaultError::NoteUnresolved)?;
        let note_dir = note_file.parent().unwrap_or(&dir).to_path_buf();
        if !note_dir.is_dir() {
            return Err(VaultError::NoteDirMissing { path: note_dir });
        }

        debug!(vault = %dir.display(), note = %note_file.display(), "Obsidian vault resolved");
        Ok(Self {
            dir,
            note_file,
            overwrite: options.overwrite,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn note_file(&self) -> &Path {
        &self.note_file
    }

    /// Write the note, refusing to replace an existing file unless allowed.
    pub fn write_note(&self, contents: &str) -> Result<(), VaultError> {
        if self.note_file.is_file() && !self.overwrite {
            return Err(VaultError::NoteExists {
                path: self.note_file.clone(),
            });
        }
        fs::write(&self.note_file, contents).map_err(|source| VaultError::Io {
            path: self.note_file.clone(),
            source,
        })
    }
}

fn vault_dir(options: &VaultOptions) -> Option<PathBuf> {
    let non_empty = |s: &Option<String>| s.clone().filter(|s| !s.is_empty());

    if let Some(vault) = non_empty(&options.vault) {
        return Some(PathBuf::from(vault));
    }
    match (non_empty(&options.basedir), non_empty(&options.name)) {
        (Some(basedir), Some(name)) => Some(Path::new(&basedir).join(name)),
        _ => None,
    }
}

fn verify(dir: &Path) -> Result<(), VaultError> {
    let obsidian = dir.join(OBSIDIAN_DIR);
    if !obsidian.is_dir() {
        return Err(VaultError::NotAVault {
            path: dir.to_path_buf(),
            missing: ".obsidian directory",
        });
    }
    if !obsidian.join("workspace.json").is_file() {
        return Err(VaultError::NotAVault {
            path: obsidian,
            missing: "workspace.json file",
        });
    }
    Ok(())
}

fn note_path(vault: &Path, options: &VaultOptions) -> Option<PathBuf> {
    let note = options.note.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let title = options
        .note_title
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut path = match (note, title) {
        (Some(note), _) => vault.join(note),
        (None, Some(title)) => vault.join(&options.note_folder).join(title),
        (None, None) => return None,
    };

    if path.extension().map_or(true, |ext| ext != "md") {
        let mut name = path.file_name()?.to_os_string();
        name.push(".md");
        path.set_file_name(name);
    }
    Some(path)
}

/// Default parent directory for vaults: the first existing of
/// `~/Documents` and `~/My Documents`.
pub fn default_vault_basedir() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    ["Documents", "My Documents"]
        .iter()
        .map(|candidate| home.join(candidate))
        .find(|dir| dir.is_dir())
}

/// YAML frontmatter for a new note.
pub fn frontmatter(created: DateTime<Utc>, updated: DateTime<Utc>, tags: &[String]) -> String {
    let mut fm = String::from("---\n");
    fm.push_str(&format!("created: {}\n", timestamp(created)));
    fm.push_str(&format!("created-ts: {}\n", epoch_seconds(created)));
    fm.push_str(&format!("updated: {}\n", timestamp(updated)));
    fm.push_str(&format!("updated-ts: {}\n", epoch_seconds(updated)));
    fm.push_str(&format!("document-type: {}\n", DOCUMENT_TYPE));
    if !tags.is_empty() {
        fm.push_str("tags:\n");
        for tag in tags {
            fm.push_str(&format!("  - {}\n", tag));
        }
    }
    fm.push_str("---\n\n");
    fm
}

fn epoch_seconds(time: DateTime<Utc>) -> String {
    format!("{:.3}", time.timestamp_millis() as f64 / 1000.0)
}
