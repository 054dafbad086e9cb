//! Diagnostic output setup.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Log level for the given verbosity flags. `verbose` wins over `quiet`.
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// Install a stderr subscriber so diagnostics never mix with markdown on stdout.
pub fn init(verbose: bool, quiet: bool) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
