//! Command handlers for the chatmgr CLI.
//!
//! Each submodule handles one subcommand. Shared setup (config, storage
//! directory, output switches) lives in [`Context`].

pub mod completions;
pub mod config;
pub mod export;
pub mod list;
pub mod sortkeys;
pub mod view;

use anyhow::{bail, Context as _, Result};
use std::path::PathBuf;
use tracing::info;

use chatmgr::cli::{GlobalArgs, SortArgs};
use chatmgr::output;
use chatmgr::workspace::{SortSpec, Workspaces};
use chatmgr::Config;

/// Settings every workspace-reading command needs.
pub struct Context {
    pub config: Config,
    pub storage_dir: PathBuf,
    /// Replace typographic quotes in transcript text
    pub sanitize: bool,
    /// False in --parse-only mode
    pub print: bool,
}

impl Context {
    /// Resolve config and storage directory from the global flags.
    pub fn new(global: &GlobalArgs) -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config, global)
    }

    pub fn with_config(config: Config, global: &GlobalArgs) -> Result<Self> {
        let storage_dir = config
            .storage_directory(global.storage.as_deref())
            .context("No workspace storage directory given and no default for this OS")?;
        if !storage_dir.is_dir() {
            bail!("Workspace directory does not exist: {}", storage_dir.display());
        }

        if global.parse_only && !global.verbose {
            info!("run with --verbose for more parsing details");
        }

        Ok(Self {
            sanitize: config.output.sanitize && !global.no_sanitize,
            print: !global.parse_only,
            config,
            storage_dir,
        })
    }

    pub fn load_workspaces(&self) -> Workspaces {
        Workspaces::load(&self.storage_dir)
    }

    /// Print markdown unless in parse-only mode.
    pub fn emit(&self, markdown: &str) -> Result<()> {
        if self.print {
            output::print_markdown(markdown).context("Failed to write to stdout")?;
        }
        Ok(())
    }
}

/// Sort spec from the command line, else the configured default.
pub fn sort_spec(args: &SortArgs, configured: &str) -> Option<SortSpec> {
    let spec = args.sort.as_deref().unwrap_or(configured);
    SortSpec::with_reverse(spec, args.reverse)
}
