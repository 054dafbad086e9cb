//! Unit tests for vault note export

use chatmgr::output::markdown::{self, TranscriptMode};
use chatmgr::vault::{self, Vault, VaultError, VaultOptions};
use chatmgr::Workspaces;
use std::fs;
use tempfile::TempDir;

use crate::helpers::{StorageFixture, SAMPLE_CHAT, SAMPLE_WORKSPACE};

fn obsidian_vault(temp: &TempDir) -> std::path::PathBuf {
    let dir = temp.path().join("Vault");
    fs::create_dir_all(dir.join(".obsidian")).unwrap();
    fs::create_dir_all(dir.join("Copilot")).unwrap();
    fs::write(dir.join(".obsidian").join("workspace.json"), "{}").unwrap();
    dir
}

#[test]
fn exported_note_has_frontmatter_and_transcript() {
    let storage = StorageFixture::with_sample();
    let workspaces = Workspaces::load(storage.path());
    let workspace = workspaces.find(SAMPLE_WORKSPACE).unwrap();
    let chat = workspace.find(SAMPLE_CHAT).unwrap();

    let temp = TempDir::new().unwrap();
    let dir = obsidian_vault(&temp);
    let options = VaultOptions {
        vault: Some(dir.to_string_lossy().to_string()),
        note_folder: "Copilot".to_string(),
        note_title: Some("Reading files".to_string()),
        ..VaultOptions::default()
    };
    let vault = Vault::open(&options).unwrap();

    let mut note = vault::frontmatter(chat.created(), chat.updated(), &["copilot".to_string()]);
    note.push_str(&markdown::chat_transcript(chat, TranscriptMode::Rendered, true));
    vault.write_note(&note).unwrap();

    let written = fs::read_to_string(dir.join("Copilot").join("Reading files.md")).unwrap();
    assert!(written.starts_with("---\ncreated: "));
    assert!(written.contains("created-ts: 1700000000.000\n"));
    assert!(written.contains("document-type: copilot chat\n"));
    assert!(written.contains("tags:\n  - copilot\n---\n\n"));
    assert!(written.contains("## Request 1\nHow do I read a file in Rust?\n"));
    assert!(written.contains("Here's how:"));
}

#[test]
fn vault_dir_must_exist() {
    let temp = TempDir::new().unwrap();
    let options = VaultOptions {
        vault: Some(temp.path().join("missing").to_string_lossy().to_string()),
        note_title: Some("n".to_string()),
        ..VaultOptions::default()
    };
    assert!(matches!(
        Vault::open(&options).unwrap_err(),
        VaultError::NotFound { .. }
    ));
}

#[test]
fn missing_workspace_json_fails_verification() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("Vault");
    fs::create_dir_all(dir.join(".obsidian")).unwrap();
    let options = VaultOptions {
        vault: Some(dir.to_string_lossy().to_string()),
        note_title: Some("n".to_string()),
        ..VaultOptions::default()
    };
    let err = Vault::open(&options).unwrap_err();
    assert!(err.to_string().contains("workspace.json"));
}

#[test]
fn note_location_is_required() {
    let temp = TempDir::new().unwrap();
    let dir = obsidian_vault(&temp);
    let options = VaultOptions {
        vault: Some(dir.to_string_lossy().to_string()),
        ..VaultOptions::default()
    };
    assert!(matches!(
        Vault::open(&options).unwrap_err(),
        VaultError::NoteUnresolved
    ));
}
