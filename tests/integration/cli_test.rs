//! End-to-end tests of the chatmgr binary against a temp storage tree.

use std::path::Path;
use std::process::Command;

use crate::helpers::{StorageFixture, SAMPLE_WORKSPACE};

/// Run chatmgr with an isolated home and config directory.
fn run_chatmgr(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_chatmgr"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .expect("Failed to execute chatmgr");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn with_storage(storage: &StorageFixture, args: &[&str]) -> (String, String, i32) {
    let storage_dir = storage.path_str();
    let mut full = vec!["--storage", storage_dir.as_str()];
    full.extend_from_slice(args);
    run_chatmgr(storage.path(), &full)
}

/// Local timestamps depend on the machine's time zone and file times.
fn timestamp_filters() -> Vec<(&'static str, &'static str)> {
    vec![(r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}", "[TIMESTAMP]")]
}

#[test]
fn list_shows_workspace_table() {
    let storage = StorageFixture::with_sample();
    let (stdout, stderr, code) = with_storage(&storage, &["list"]);

    assert_eq!(code, 0, "stderr: {}", stderr);
    let stdout = stdout.replace(&storage.path_str(), "[STORAGE]");
    insta::with_settings!({
        filters => timestamp_filters()
    }, {
        insta::assert_snapshot!(stdout, @r###"
        # Available Workspaces
        **Workspace storage:** [STORAGE]  
        **Workspaces with chat sessions:** 1

        | ID | Workspace Folder | Created | Last Updated | Chats |
        |----|------------------|---------|--------------|-------|
        | 3f2a9c... | /home/dev/my project | [TIMESTAMP] | [TIMESTAMP] | 1 |
        "###);
    });
}

#[test]
fn view_workspace_lists_chats() {
    let storage = StorageFixture::with_sample();
    let (stdout, _, code) = with_storage(&storage, &["view", "-w", "3f2a9c"]);

    assert_eq!(code, 0);
    assert!(stdout.contains(&format!("**Workspace ID:** {}", SAMPLE_WORKSPACE)));
    insta::with_settings!({
        filters => timestamp_filters()
    }, {
        insta::assert_snapshot!(stdout, @r###"
        # Workspace Details
        **Workspace ID:** 3f2a9c4b8d7e6f5a4b3c2d1e0f9a8b7c  
        **Workspace Folder:** /home/dev/my project  
        **Created:** [TIMESTAMP]  
        **Last Updated:** [TIMESTAMP]  
        **Chat Sessions:** 1

        | Chat ID | Created | Requests | Size |
        |---------|---------|----------|------|
        | 71bd0e... | [TIMESTAMP] | 4 | 317 |
        "###);
    });
}

#[test]
fn view_chat_renders_transcript() {
    let storage = StorageFixture::with_sample();
    let (stdout, _, code) = with_storage(&storage, &["view", "-w", "3f2a9c", "-c", "71bd0e"]);

    assert_eq!(code, 0);
    insta::with_settings!({
        filters => timestamp_filters()
    }, {
        insta::assert_snapshot!(stdout, @r###"
        # Chat Session Details
        **Workspace ID:** 3f2a9c4b8d7e6f5a4b3c2d1e0f9a8b7c  
        **Chat ID:** 71bd0e22-5c1a-4f7e-9a3b-2d8c6e4f1a0b  
        **Created:** [TIMESTAMP]  
        **Size (chars):** 317  
        **Requests:** 4

        ## Request 1
        How do I read a file in Rust?

        ## Copilot Response 1:
        Here's how:

        ```rust
        let s = fs::read_to_string("a.txt")?;
        ```

        ---

        ## Request 2
        Rename the helper

        ## Copilot Response 2:
        Renamed `load` to `read_config`.
        Edited file: `/home/dev/my project/src/config.rs`
        - added 11 chars line 12
        - deleted line 20 to 24



        ---

        ## Request 3
        Where is it defined?

        ## Copilot Response 3:
        It lives in `/home/dev/my project/src/config.rs`.

        ---

        ## Request 4
        Thanks!

        ## Copilot Response 4:
        _No response_

        ---
        "###);
    });
}

#[test]
fn no_sanitize_keeps_typographic_quotes() {
    let storage = StorageFixture::with_sample();
    let (stdout, _, code) = with_storage(
        &storage,
        &["--no-sanitize", "view", "-w", "3f2a9c", "-c", "71bd0e"],
    );

    assert_eq!(code, 0);
    assert!(stdout.contains("Here\u{2019}s how:"));
}

#[test]
fn raw_modes_dump_json() {
    let storage = StorageFixture::with_sample();

    let (stdout, _, code) =
        with_storage(&storage, &["view", "-w", "3f2a9c", "-c", "71bd0e", "--raw"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("## Request 1 (raw JSON input):\n```\n"));
    assert!(stdout.contains("## Copilot Response 1 (raw JSON input):"));

    let (stdout, _, code) =
        with_storage(&storage, &["view", "-w", "3f2a9c", "-c", "71bd0e", "--raw-all"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("## Request & Response 1 (raw JSON input):"));
}

#[test]
fn unknown_workspace_fails() {
    let storage = StorageFixture::with_sample();
    let (stdout, stderr, code) = with_storage(&storage, &["view", "-w", "deadbeef"]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("workspace not found: deadbeef"));
}

#[test]
fn unknown_chat_fails() {
    let storage = StorageFixture::with_sample();
    let (_, stderr, code) = with_storage(&storage, &["view", "-w", "3f2a9c", "-c", "zzz"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("chat session not found in workspace"));
}

#[test]
fn chat_requires_workspace() {
    let storage = StorageFixture::with_sample();
    let (_, _, code) = with_storage(&storage, &["view", "-c", "71bd0e"]);
    assert_eq!(code, 2);
}

#[test]
fn missing_storage_directory_fails() {
    let storage = StorageFixture::new();
    let missing = storage.path().join("nope");
    let (_, stderr, code) = run_chatmgr(
        storage.path(),
        &["--storage", &missing.to_string_lossy(), "list"],
    );

    assert_eq!(code, 1);
    assert!(stderr.contains("Workspace directory does not exist"));
}

#[test]
fn parse_only_prints_nothing() {
    let storage = StorageFixture::with_sample();
    let (stdout, _, code) = with_storage(
        &storage,
        &["--parse-only", "view", "-w", "3f2a9c", "-c", "71bd0e"],
    );

    assert_eq!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn verbose_reports_skipped_records() {
    let storage = StorageFixture::with_sample();
    let (_, stderr, code) = with_storage(&storage, &["-v", "--parse-only", "list"]);

    assert_eq!(code, 0);
    assert_eq!(stderr.matches("newFancyKind").count(), 1);
    assert_eq!(stderr.matches("skipping exchange:").count(), 2);

    let warnings: Vec<&str> = stderr
        .lines()
        .filter(|line| line.contains("WARN skipping unparseable exchange"))
        .collect();
    assert_eq!(warnings.len(), 1, "stderr: {}", stderr);
    assert!(warnings[0].contains("missing 'range'"));
    assert!(warnings[0].contains(r#"{"text":"x"}"#));
}

#[test]
fn silent_skips_stay_hidden_without_verbose() {
    let storage = StorageFixture::with_sample();
    let (_, stderr, code) = with_storage(&storage, &["--parse-only", "list"]);

    assert_eq!(code, 0);
    assert!(!stderr.contains("skipping exchange:"));
    assert!(!stderr.contains("DEBUG"));
    assert!(stderr.contains("WARN skipping unparseable exchange"));
}

#[test]
fn sortkeys_lists_both_key_sets() {
    let home = tempfile::TempDir::new().unwrap();
    let (stdout, _, code) = run_chatmgr(home.path(), &["sortkeys"]);

    assert_eq!(code, 0);
    insta::assert_snapshot!(stdout, @r###"
    Workspace sort keys: id, createDate, lastUpdate, folder
    Chat sort keys: id, createDate, lastUpdate
    "###);
}

#[test]
fn config_path_and_show() {
    let home = tempfile::TempDir::new().unwrap();

    let (stdout, _, code) = run_chatmgr(home.path(), &["config", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim_end().ends_with("config.toml"));

    let (stdout, _, code) = run_chatmgr(home.path(), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("[output]"));
    assert!(stdout.contains("sanitize = true"));
}

#[test]
fn completions_for_bash() {
    let home = tempfile::TempDir::new().unwrap();
    let (stdout, _, code) = run_chatmgr(home.path(), &["completions", "bash"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("_chatmgr"));
}
