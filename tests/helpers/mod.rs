//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Id of the workspace created by [`StorageFixture::with_sample`].
pub const SAMPLE_WORKSPACE: &str = "3f2a9c4b8d7e6f5a4b3c2d1e0f9a8b7c";

/// Id of the chat created by [`StorageFixture::with_sample`].
pub const SAMPLE_CHAT: &str = "71bd0e22-5c1a-4f7e-9a3b-2d8c6e4f1a0b";

/// A throwaway VS Code workspace storage tree.
pub struct StorageFixture {
    pub temp: TempDir,
}

impl StorageFixture {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Storage with one workspace holding the `chat_session.json` fixture.
    pub fn with_sample() -> Self {
        let fixture = Self::new();
        fixture.add_workspace(SAMPLE_WORKSPACE, Some("file:///home/dev/my%20project"));
        fixture.add_chat(
            SAMPLE_WORKSPACE,
            SAMPLE_CHAT,
            &load_fixture("chat_session.json"),
        );
        fixture
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn path_str(&self) -> String {
        self.path().to_string_lossy().to_string()
    }

    /// Create a workspace directory with an empty `chatSessions/` folder.
    pub fn add_workspace(&self, id: &str, folder: Option<&str>) -> PathBuf {
        let dir = self.path().join(id);
        fs::create_dir_all(dir.join("chatSessions")).expect("Failed to create workspace dir");
        if let Some(folder) = folder {
            let metadata = serde_json::json!({ "folder": folder });
            fs::write(dir.join("workspace.json"), metadata.to_string())
                .expect("Failed to write workspace.json");
        }
        dir
    }

    /// Write a session document into a workspace.
    pub fn add_chat(&self, workspace: &str, chat: &str, body: &str) -> PathBuf {
        let path = self
            .path()
            .join(workspace)
            .join("chatSessions")
            .join(format!("{}.json", chat));
        fs::write(&path, body).expect("Failed to write chat session");
        path
    }
}

/// A minimal session document with one exchange per `(prompt, response)`.
pub fn session_json(exchanges: &[(&str, &str)]) -> String {
    let requests: Vec<serde_json::Value> = exchanges
        .iter()
        .map(|(prompt, response)| {
            serde_json::json!({
                "message": { "text": prompt },
                "response": [ { "value": response } ]
            })
        })
        .collect();
    serde_json::json!({ "requests": requests }).to_string()
}
