//! Classification of response items.
//!
//! A response item is a loosely-typed JSON object discriminated by an
//! optional `kind` string. [`ResponseItem::classify`] maps every possible
//! JSON value onto exactly one variant; anything without a recognized shape
//! falls through to [`ResponseItem::Empty`].
//!
//! ```text
//! {"value": "Hello"}                                   -> PlainText
//! {"kind": "toolInvocation", "presentation": "hidden"} -> ToolMarker
//! {"kind": "textEditGroup", "uri": {...}, "edits": []} -> FileEditGroup
//! {"kind": "inlineReference", "inlineReference": {..}} -> InlineReference
//! {"kind": "undoStop"}                                 -> Ignorable
//! {"kind": "somethingNew"}                             -> Unknown
//! {}                                                   -> Empty
//! ```

use serde_json::Value;

/// Kinds that carry nothing worth rendering in a transcript.
pub const IGNORED_KINDS: &[&str] = &[
    "codeblockUri",
    "command",
    "confirmation",
    "mcpServersStarting",
    "prepareToolInvocation",
    "progressMessage",
    "progressTask",
    "progressTaskSerialized",
    "toolInvocationSerialized",
    "undoStop",
];

pub const KIND_TOOL_INVOCATION: &str = "toolInvocation";
pub const KIND_TEXT_EDIT_GROUP: &str = "textEditGroup";
pub const KIND_INLINE_REFERENCE: &str = "inlineReference";

/// One response item, borrowed from the decoded record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseItem<'a> {
    /// Kindless item with a string `value`.
    PlainText(&'a str),
    /// Tool invocation marker; `hidden` when `presentation == "hidden"`.
    ToolMarker { hidden: bool },
    /// File edit summary; the whole item is kept for validation at render time.
    FileEditGroup(&'a Value),
    /// Inline reference; the `inlineReference` payload, if present.
    InlineReference(Option<&'a Value>),
    /// A kind from [`IGNORED_KINDS`].
    Ignorable(&'a str),
    /// Any other non-empty kind.
    Unknown(&'a str),
    /// Neither a kind nor a string value.
    Empty,
}

impl<'a> ResponseItem<'a> {
    /// Classify a raw response item. Total: never fails.
    pub fn classify(item: &'a Value) -> Self {
        let Some(object) = item.as_object() else {
            return ResponseItem::Empty;
        };

        match object.get("kind").and_then(Value::as_str) {
            Some(kind) if !kind.is_empty() => Self::classify_kind(kind, item),
            _ => match object.get("value").and_then(Value::as_str) {
                Some(text) => ResponseItem::PlainText(text),
                None => ResponseItem::Empty,
            },
        }
    }

    fn classify_kind(kind: &'a str, item: &'a Value) -> Self {
        match kind {
            KIND_TOOL_INVOCATION => ResponseItem::ToolMarker {
                hidden: item.get("presentation").and_then(Value::as_str) == Some("hidden"),
            },
            KIND_TEXT_EDIT_GROUP => ResponseItem::FileEditGroup(item),
            KIND_INLINE_REFERENCE => ResponseItem::InlineReference(item.get("inlineReference")),
            _ if is_ignored_kind(kind) => ResponseItem::Ignorable(kind),
            _ => ResponseItem::Unknown(kind),
        }
    }
}

/// Whether `kind` is in the fixed ignore-set.
pub fn is_ignored_kind(kind: &str) -> bool {
    IGNORED_KINDS.contains(&kind)
}
