//! View command handler

use anyhow::{anyhow, Result};

use chatmgr::cli::SortArgs;
use chatmgr::output::markdown::{self, TranscriptMode};

use super::{sort_spec, Context};

/// Show a workspace's chat table, or one chat's transcript.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    ctx: &Context,
    workspace_id: &str,
    chat_id: Option<&str>,
    sort: &SortArgs,
    mode: TranscriptMode,
) -> Result<()> {
    let mut workspaces = ctx.load_workspaces();
    let workspace = workspaces
        .find_mut(workspace_id)
        .ok_or_else(|| anyhow!("workspace not found: {}", workspace_id))?;

    let Some(chat_id) = chat_id else {
        if let Some(spec) = sort_spec(sort, &ctx.config.output.sort_chats) {
            workspace.sort(&spec);
        }
        return ctx.emit(&markdown::workspace_detail(workspace));
    };
    let workspace = &*workspace;

    let chat = workspace.find(chat_id).ok_or_else(|| {
        anyhow!(
            "chat session not found in workspace {}: {}",
            workspace.id(),
            chat_id
        )
    })?;

    ctx.emit(&markdown::chat_header(workspace, chat))?;
    ctx.emit(&markdown::chat_transcript(chat, mode, ctx.sanitize))
}
