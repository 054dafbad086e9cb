//! Export command handler

use anyhow::{anyhow, Result};
use tracing::info;

use chatmgr::cli::VaultArgs;
use chatmgr::config::VaultConfig;
use chatmgr::output::markdown::{self, TranscriptMode};
use chatmgr::vault::{self, Vault, VaultOptions};

use super::Context;

/// Merge vault flags (which already fold in the OBSIDIAN_* environment)
/// with the config file and built-in defaults.
pub fn vault_options(args: &VaultArgs, config: &VaultConfig) -> VaultOptions {
    let or_config = |flag: &Option<String>, configured: &str| {
        flag.clone()
            .or_else(|| Some(configured.to_string()).filter(|s| !s.is_empty()))
    };

    let basedir = or_config(&args.vault_basedir, &config.basedir).or_else(|| {
        vault::default_vault_basedir().map(|dir| dir.to_string_lossy().to_string())
    });

    VaultOptions {
        vault: or_config(&args.vault, &config.directory),
        name: or_config(&args.vault_name, &config.name),
        basedir,
        no_verify: args.vault_noverify || !config.verify,
        note_folder: or_config(&args.note_folder, &config.note_folder).unwrap_or_default(),
        note_title: args.note_title.clone(),
        note: args.note.clone(),
        overwrite: args.note_overwrite,
    }
}

/// Write one chat transcript as a vault note.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    ctx: &Context,
    workspace_id: &str,
    chat_id: &str,
    args: &VaultArgs,
    tags: &[String],
) -> Result<()> {
    let workspaces = ctx.load_workspaces();
    let workspace = workspaces
        .find(workspace_id)
        .ok_or_else(|| anyhow!("workspace not found: {}", workspace_id))?;
    let chat = workspace.find(chat_id).ok_or_else(|| {
        anyhow!(
            "chat session not found in workspace {}: {}",
            workspace.id(),
            chat_id
        )
    })?;

    let vault = Vault::open(&vault_options(args, &ctx.config.vault))?;

    let mut note = vault::frontmatter(chat.created(), chat.updated(), tags);
    note.push_str(&markdown::chat_header(workspace, chat));
    note.push_str(&markdown::chat_transcript(
        chat,
        TranscriptMode::Rendered,
        ctx.sanitize,
    ));

    if !ctx.print {
        info!(note = %vault.note_file().display(), "parse-only mode, note not written");
        return Ok(());
    }

    vault.write_note(&note)?;
    println!("Wrote {}", vault.note_file().display());
    Ok(())
}
