//! chatmgr - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use chatmgr::cli::{Cli, Commands, ConfigCommands};
use chatmgr::logging;
use chatmgr::output::TranscriptMode;

use commands::Context;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose, cli.global.quiet)?;

    match cli.command {
        Commands::List { sort } => {
            let ctx = Context::new(&cli.global)?;
            commands::list::handle(&ctx, &sort)
        }
        Commands::View {
            workspace,
            chat,
            sort,
            raw,
            raw_all,
        } => {
            let ctx = Context::new(&cli.global)?;
            let mode = if raw {
                TranscriptMode::Raw
            } else if raw_all {
                TranscriptMode::RawAll
            } else {
                TranscriptMode::Rendered
            };
            commands::view::handle(&ctx, &workspace, chat.as_deref(), &sort, mode)
        }
        Commands::Sortkeys => {
            commands::sortkeys::handle();
            Ok(())
        }
        Commands::Export {
            workspace,
            chat,
            vault,
            tags,
        } => {
            let ctx = Context::new(&cli.global)?;
            commands::export::handle(&ctx, &workspace, &chat, &vault, &tags)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
