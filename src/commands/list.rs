//! List command handler

use anyhow::Result;

use chatmgr::cli::SortArgs;
use chatmgr::output::markdown;

use super::{sort_spec, Context};

/// Print the workspace summary table.
#[cfg(not(tarpaulin_include))]
pub fn handle(ctx: &Context, sort: &SortArgs) -> Result<()> {
    let mut workspaces = ctx.load_workspaces();
    if let Some(spec) = sort_spec(sort, &ctx.config.output.sort_workspaces) {
        workspaces.sort(&spec);
    }
    ctx.emit(&markdown::workspace_summary(&workspaces))
}
