//! Vault export through the binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::helpers::StorageFixture;

fn vault_in(storage: &StorageFixture) -> PathBuf {
    let vault = storage.path().join("vault");
    fs::create_dir_all(vault.join(".obsidian")).unwrap();
    fs::write(vault.join(".obsidian").join("workspace.json"), "{}").unwrap();
    vault
}

fn export_cmd(storage: &StorageFixture, vault: &Path) -> Command {
    let mut cmd = Command::cargo_bin("chatmgr").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("HOME", storage.path())
        .env("XDG_CONFIG_HOME", storage.path().join(".config"))
        .env_remove("OBSIDIAN_VAULT")
        .env_remove("OBSIDIAN_VAULT_NAME")
        .env_remove("OBSIDIAN_VAULT_BASEDIR")
        .env_remove("OBSIDIAN_NOTE_FOLDER")
        .args(["--storage", &storage.path_str()])
        .args(["export", "-w", "3f2a9c", "-c", "71bd0e"])
        .args(["--vault", &vault.to_string_lossy()])
        .args(["--note-title", "Reading files", "--tag", "rust"]);
    cmd
}

#[test]
fn export_writes_note_with_frontmatter() {
    let storage = StorageFixture::with_sample();
    let vault = vault_in(&storage);

    export_cmd(&storage, &vault)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote").and(predicate::str::contains("Reading files.md")));

    let note = fs::read_to_string(vault.join("Reading files.md")).unwrap();
    assert!(note.starts_with("---\ncreated: "));
    assert!(note.contains("document-type: copilot chat\n"));
    assert!(note.contains("tags:\n  - rust\n"));
    assert!(note.contains("# Chat Session Details"));
    assert!(note.contains("## Copilot Response 1:\nHere's how:"));
}

#[test]
fn existing_note_needs_overwrite_flag() {
    let storage = StorageFixture::with_sample();
    let vault = vault_in(&storage);

    export_cmd(&storage, &vault).assert().success();
    export_cmd(&storage, &vault)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    export_cmd(&storage, &vault)
        .arg("--note-overwrite")
        .assert()
        .success();
}

#[test]
fn unverified_vault_is_rejected() {
    let storage = StorageFixture::with_sample();
    let vault = storage.path().join("plain-dir");
    fs::create_dir_all(&vault).unwrap();

    export_cmd(&storage, &vault)
        .assert()
        .failure()
        .stderr(predicate::str::contains(".obsidian"));
    export_cmd(&storage, &vault)
        .arg("--vault-noverify")
        .assert()
        .success();
}

#[test]
fn parse_only_export_writes_nothing() {
    let storage = StorageFixture::with_sample();
    let vault = vault_in(&storage);

    export_cmd(&storage, &vault)
        .arg("--parse-only")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(!vault.join("Reading files.md").exists());
}
