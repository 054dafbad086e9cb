//! Attribute-name sorting for workspaces and chats.
//!
//! A sort spec is an attribute name, optionally prefixed with `-` for
//! descending order: `lastUpdate`, `-createDate`.

use std::cmp::Ordering;

use tracing::warn;

use super::Workspace;
use crate::transcript::Session;

/// Parsed sort specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub attribute: String,
    pub descending: bool,
}

impl SortSpec {
    /// Parse a spec string. Empty (or a bare `-`) means no sorting.
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        let (attribute, descending) = match spec.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (spec, false),
        };
        if attribute.is_empty() {
            return None;
        }
        Some(Self {
            attribute: attribute.to_string(),
            descending,
        })
    }

    /// Parse a spec and flip its direction when `reverse` is set.
    pub fn with_reverse(spec: &str, reverse: bool) -> Option<Self> {
        Self::parse(spec).map(|mut s| {
            s.descending ^= reverse;
            s
        })
    }
}

/// Types that can be ordered by a named attribute.
pub trait SortKeys {
    /// Label used in diagnostics.
    const NAME: &'static str;
    /// Valid attribute names, in display order.
    const KEYS: &'static [&'static str];

    /// Compare by `key`, which is guaranteed to be one of [`Self::KEYS`].
    fn compare_by(&self, other: &Self, key: &str) -> Ordering;
}

/// Stable-sort `items` by `spec`.
///
/// Returns `false` (leaving the order untouched) when the attribute is
/// not a valid key for `T`.
pub fn sort_by_spec<T: SortKeys>(items: &mut [T], spec: &SortSpec) -> bool {
    let key = spec.attribute.as_str();
    if !T::KEYS.contains(&key) {
        warn!(attribute = key, "Invalid sort attribute for {}: {}", T::NAME, key);
        return false;
    }

    items.sort_by(|a, b| {
        let ord = a.compare_by(b, key);
        if spec.descending {
            ord.reverse()
        } else {
            ord
        }
    });
    true
}

impl SortKeys for Workspace {
    const NAME: &'static str = "Workspace";
    const KEYS: &'static [&'static str] = &["id", "createDate", "lastUpdate", "folder"];

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "createDate" => self.created().cmp(&other.created()),
            "lastUpdate" => self.updated().cmp(&other.updated()),
            "folder" => self.folder().cmp(other.folder()),
            _ => self.id().cmp(other.id()),
        }
    }
}

impl SortKeys for Session {
    const NAME: &'static str = "Chat";
    const KEYS: &'static [&'static str] = &["id", "createDate", "lastUpdate"];

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "createDate" => self.created().cmp(&other.created()),
            "lastUpdate" => self.updated().cmp(&other.updated()),
            _ => self.id().cmp(other.id()),
        }
    }
}
