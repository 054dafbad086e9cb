//! Display formatting for ids, folders and timestamps.

use chrono::{DateTime, Local, Utc};

/// Default number of leading id characters kept by [`elide_id`].
pub const ID_PREFIX_LEN: usize = 6;

/// Shorten a long id to `prefix...` (or `prefix...suffix` when `end > 0`).
///
/// Ids shorter than `begin + end + 4` are returned unchanged, so elision
/// always saves at least one character.
pub fn elide_id(id: &str, begin: usize, end: usize) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() < begin + end + 4 {
        return id.to_string();
    }

    let head: String = chars[..begin].iter().collect();
    if end == 0 {
        format!("{}...", head)
    } else {
        let tail: String = chars[chars.len() - end..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

/// Elide with the default prefix length.
pub fn short_id(id: &str) -> String {
    elide_id(id, ID_PREFIX_LEN, 0)
}

/// Turn a folder URI like `file:///c%3A/src` into a readable path.
pub fn folder_display(folder: &str) -> String {
    let decoded = urlencoding::decode(folder)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| folder.to_string());
    let path = decoded.strip_prefix("file://").unwrap_or(&decoded);

    // Windows drive paths arrive as /c:/...
    let bytes = path.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':' {
        return path[1..].to_string();
    }
    path.to_string()
}

/// Local time as `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
