//! Terminal output for markdown documents.
//!
//! Markdown is printed as-is, with headings, bold labels and rules
//! highlighted via ANSI escapes when stdout is a color-capable terminal.

use std::io::{self, Write};

/// ANSI color codes for CLI output
pub mod ansi {
    /// Green (ANSI 32), used for headings and labels
    pub const GREEN: &str = "\x1b[32m";
    /// Bold
    pub const BOLD: &str = "\x1b[1m";
    /// Dark gray (ANSI 90), used for rules and table separators
    pub const DARK_GRAY: &str = "\x1b[90m";
    /// Reset color
    pub const RESET: &str = "\x1b[0m";
}

/// True unless `NO_COLOR` is set or stdout is not a terminal.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Write markdown to stdout, highlighted when [`use_color`] allows.
pub fn print_markdown(markdown: &str) -> io::Result<()> {
    let text = if use_color() {
        colorize_markdown(markdown)
    } else {
        markdown.to_string()
    };
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}

/// Highlight markdown structure with ANSI escapes.
pub fn colorize_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_fence = false;

    for line in text.split_inclusive('\n') {
        let (body, newline) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };

        if body.trim_start().starts_with("```") {
            in_fence = !in_fence;
            out.push_str(&format!("{}{}{}{}", ansi::DARK_GRAY, body, ansi::RESET, newline));
            continue;
        }

        if in_fence {
            out.push_str(line);
        } else {
            out.push_str(&colorize_line(body));
            out.push_str(newline);
        }
    }
    out
}

fn colorize_line(line: &str) -> String {
    if line.starts_with('#') {
        return format!("{}{}{}{}", ansi::GREEN, ansi::BOLD, line, ansi::RESET);
    }

    let trimmed = line.trim();
    if is_rule(trimmed) {
        return format!("{}{}{}", ansi::DARK_GRAY, line, ansi::RESET);
    }

    if let Some(rest) = line.strip_prefix("**") {
        if let Some(end) = rest.find("**") {
            let (label, tail) = rest.split_at(end);
            return format!(
                "{}{}{}{}",
                ansi::GREEN,
                label,
                ansi::RESET,
                &tail[2..]
            );
        }
    }

    line.to_string()
}

/// `---` rules and `|----|----|` table separators.
fn is_rule(line: &str) -> bool {
    !line.is_empty()
        && line.contains('-')
        && line.chars().all(|c| matches!(c, '-' | '|' | ' ' | ':'))
}
