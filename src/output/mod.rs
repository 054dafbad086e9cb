//! Markdown output: formatting helpers, document builders and the console printer.

pub mod console;
pub mod format;
pub mod markdown;
pub mod sanitize;

pub use console::print_markdown;
pub use format::{elide_id, folder_display, short_id, timestamp};
pub use markdown::TranscriptMode;
pub use sanitize::sanitize_text;
