//! Sortkeys command handler

use chatmgr::transcript::Session;
use chatmgr::workspace::{SortKeys, Workspace};

/// One line per sortable type: `Workspace sort keys: id, createDate, ...`.
pub fn sortkeys_text() -> String {
    format!(
        "{} sort keys: {}\n{} sort keys: {}\n",
        Workspace::NAME,
        Workspace::KEYS.join(", "),
        Session::NAME,
        Session::KEYS.join(", ")
    )
}

#[cfg(not(tarpaulin_include))]
pub fn handle() {
    print!("{}", sortkeys_text());
}
