//! CLI definitions for chatmgr
//!
//! The clap structures live in the library so tests and completions
//! generation can reach them.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles matching the markdown console colors.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "chatmgr")]
#[command(about = "GitHub Copilot chat manager - browse, render and export VS Code chat sessions")]
#[command(
    long_about = "GitHub Copilot chat manager.

Reads the chat sessions GitHub Copilot stores in VS Code's workspace storage
and renders them as markdown transcripts.

QUICK START:
    chatmgr list                          List workspaces with chat sessions
    chatmgr view -w 3f2a9c                Show the chats of one workspace
    chatmgr view -w 3f2a9c -c 71bd0e      Show one chat transcript
    chatmgr export -w 3f2a9c -c 71bd0e --vault ~/Notes --note-title chat

Ids may be shortened to any unique prefix, including the elided form
shown in tables (e.g. 3f2a9c...).

If --storage is not given, the [storage] directory from the config file is
used, falling back to VS Code's default location for this OS."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Workspace storage directory
    #[arg(long, global = true, value_name = "DIR")]
    pub storage: Option<String>,

    /// Enable debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only report warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Load and parse everything but print nothing
    #[arg(long, global = true)]
    pub parse_only: bool,

    /// Keep typographic quotes in transcript text
    #[arg(long, global = true)]
    pub no_sanitize: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List workspaces that have chat sessions
    #[command(
        visible_alias = "ls",
        long_about = "List every workspace with chat sessions as a markdown table.

Shows the (elided) workspace id, project folder, creation time, last
update and number of chats.

EXAMPLES:
    chatmgr list
    chatmgr list -s lastUpdate -r      Most recently updated first"
    )]
    List {
        #[command(flatten)]
        sort: SortArgs,
    },

    /// Show a workspace, or one chat transcript with --chat
    #[command(long_about = "Show the details of a workspace and its chat table.

With --chat, show the full transcript of one chat session instead.
--raw shows each exchange's raw prompt and response JSON; --raw-all shows
each whole raw record.

EXAMPLES:
    chatmgr view -w 3f2a9c
    chatmgr view -w 3f2a9c -s -createDate
    chatmgr view -w 3f2a9c -c 71bd0e
    chatmgr view -w 3f2a9c -c 71bd0e --raw")]
    View {
        /// Workspace id or id prefix
        #[arg(short, long, value_name = "ID")]
        workspace: String,

        /// Chat id or id prefix
        #[arg(short, long, value_name = "ID")]
        chat: Option<String>,

        #[command(flatten)]
        sort: SortArgs,

        /// Show raw JSON of each prompt and response
        #[arg(long, requires = "chat", conflicts_with = "raw_all")]
        raw: bool,

        /// Show the whole raw JSON record of each exchange
        #[arg(long, requires = "chat")]
        raw_all: bool,
    },

    /// Print the attribute names accepted by --sort
    Sortkeys,

    /// Export a chat transcript as a note into an Obsidian vault
    #[command(long_about = "Write a chat transcript, with YAML frontmatter, into an Obsidian vault.

The vault is given by --vault, or by --vault-basedir plus --vault-name.
The note is given by --note (relative to the vault), or by --note-folder
plus --note-title. \".md\" is appended when missing.

These environment variables are recognized:
    OBSIDIAN_VAULT            Full path to vault
    OBSIDIAN_VAULT_NAME       Vault directory name
    OBSIDIAN_VAULT_BASEDIR    Parent directory for vaults
    OBSIDIAN_NOTE_FOLDER      Note folder within the vault

EXAMPLE:
    chatmgr export -w 3f2a9c -c 71bd0e --vault ~/Notes --note-title \"Refactor chat\" --tag copilot")]
    Export {
        /// Workspace id or id prefix
        #[arg(short, long, value_name = "ID")]
        workspace: String,

        /// Chat id or id prefix
        #[arg(short, long, value_name = "ID")]
        chat: String,

        #[command(flatten)]
        vault: VaultArgs,

        /// Tag to add to the note frontmatter (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    #[command(long_about = "Print a shell completion script to stdout.

EXAMPLES:
    chatmgr completions bash > ~/.local/share/bash-completion/completions/chatmgr
    chatmgr completions zsh > ~/.zfunc/_chatmgr")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

/// Sort options for tables.
#[derive(Args, Debug, Clone, Default)]
pub struct SortArgs {
    /// Sort attribute; prefix with '-' for descending (see `sortkeys`)
    #[arg(short, long, value_name = "NAME", allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Reverse the sort order
    #[arg(short, long)]
    pub reverse: bool,
}

/// Vault and note location options.
#[derive(Args, Debug, Clone, Default)]
pub struct VaultArgs {
    /// Full path to the vault; overrides --vault-name and --vault-basedir
    #[arg(long, value_name = "DIR", env = "OBSIDIAN_VAULT")]
    pub vault: Option<String>,

    /// Name of the vault directory
    #[arg(long, value_name = "NAME", env = "OBSIDIAN_VAULT_NAME")]
    pub vault_name: Option<String>,

    /// Parent directory for vaults (default: ~/Documents or ~/My Documents)
    #[arg(long, value_name = "DIR", env = "OBSIDIAN_VAULT_BASEDIR")]
    pub vault_basedir: Option<String>,

    /// Skip vault validation; only the directory must exist
    #[arg(long)]
    pub vault_noverify: bool,

    /// Note folder relative to the vault root
    #[arg(long, value_name = "RELPATH", env = "OBSIDIAN_NOTE_FOLDER")]
    pub note_folder: Option<String>,

    /// Note title (without ".md")
    #[arg(long, value_name = "TITLE")]
    pub note_title: Option<String>,

    /// Note path relative to the vault; overrides --note-folder and --note-title
    #[arg(long, value_name = "FILE")]
    pub note: Option<String>,

    /// Allow replacing an existing note
    #[arg(long)]
    pub note_overwrite: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
}
