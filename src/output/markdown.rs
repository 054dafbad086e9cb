//! Markdown documents printed by the CLI and written to notes.

use std::fmt::Write;

use super::format::{folder_display, short_id, timestamp};
use super::sanitize::sanitize_text;
use crate::transcript::Session;
use crate::workspace::{Workspace, Workspaces};

/// How exchanges of a chat are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranscriptMode {
    /// Rendered prompt and response text.
    #[default]
    Rendered,
    /// Raw `message` and `response` JSON per exchange.
    Raw,
    /// The whole raw record per exchange.
    RawAll,
}

/// Table of all workspaces.
pub fn workspace_summary(workspaces: &Workspaces) -> String {
    let mut md = String::from("# Available Workspaces\n");
    let _ = writeln!(
        md,
        "**Workspace storage:** {}  ",
        folder_display(&workspaces.storage_dir().to_string_lossy())
    );
    let _ = writeln!(md, "**Workspaces with chat sessions:** {}\n", workspaces.len());
    md.push_str("| ID | Workspace Folder | Created | Last Updated | Chats |\n");
    md.push_str("|----|------------------|---------|--------------|-------|\n");
    for w in workspaces {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} | {} |",
            short_id(w.id()),
            folder_display(w.folder()),
            timestamp(w.created()),
            timestamp(w.updated()),
            w.chats().len()
        );
    }
    md
}

/// One workspace with its chat table.
pub fn workspace_detail(workspace: &Workspace) -> String {
    let mut md = String::from("# Workspace Details\n");
    let _ = writeln!(md, "**Workspace ID:** {}  ", workspace.id());
    let _ = writeln!(md, "**Workspace Folder:** {}  ", folder_display(workspace.folder()));
    let _ = writeln!(md, "**Created:** {}  ", timestamp(workspace.created()));
    let _ = writeln!(md, "**Last Updated:** {}  ", timestamp(workspace.updated()));
    let _ = writeln!(md, "**Chat Sessions:** {}\n", workspace.chats().len());
    md.push_str("| Chat ID | Created | Requests | Size |\n");
    md.push_str("|---------|---------|----------|------|\n");
    for chat in workspace.chats() {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} |",
            short_id(chat.id()),
            timestamp(chat.created()),
            chat.len(),
            chat.size()
        );
    }
    md
}

/// Header block for a single chat.
pub fn chat_header(workspace: &Workspace, chat: &Session) -> String {
    let mut md = String::from("# Chat Session Details\n");
    let _ = writeln!(md, "**Workspace ID:** {}  ", workspace.id());
    let _ = writeln!(md, "**Chat ID:** {}  ", chat.id());
    let _ = writeln!(md, "**Created:** {}  ", timestamp(chat.created()));
    let _ = writeln!(md, "**Size (chars):** {}  ", chat.size());
    let _ = writeln!(md, "**Requests:** {}\n", chat.len());
    md
}

/// Every exchange of a chat, separated by horizontal rules.
///
/// Exchange text (not headings) is passed through [`sanitize_text`] when
/// `sanitize` is set.
pub fn chat_transcript(chat: &Session, mode: TranscriptMode, sanitize: bool) -> String {
    let clean = |text: &str| {
        if sanitize {
            sanitize_text(text)
        } else {
            text.to_string()
        }
    };

    let mut md = String::new();
    for (i, exchange) in chat.exchanges().iter().enumerate() {
        let n = i + 1;
        match mode {
            TranscriptMode::Rendered => {
                let _ = writeln!(md, "## Request {}\n{}\n", n, clean(exchange.prompt()));
                let _ = writeln!(
                    md,
                    "## Copilot Response {}:\n{}\n",
                    n,
                    clean(exchange.display_response())
                );
            }
            TranscriptMode::Raw => {
                let _ = writeln!(
                    md,
                    "## Request {} (raw JSON input):\n```\n{}\n```\n",
                    n,
                    clean(&exchange.raw_prompt())
                );
                let _ = writeln!(
                    md,
                    "## Copilot Response {} (raw JSON input):\n```\n{}\n```\n",
                    n,
                    clean(&exchange.raw_response())
                );
            }
            TranscriptMode::RawAll => {
                let _ = writeln!(
                    md,
                    "## Request & Response {} (raw JSON input):\n```\n{}\n```\n",
                    n,
                    clean(&format!("{:#}", exchange.raw_record()))
                );
            }
        }
        md.push_str("---\n\n");
    }
    md
}
