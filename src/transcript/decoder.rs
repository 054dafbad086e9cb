//! Record decoding.
//!
//! Extracts the prompt text, canceled flag and raw response item list from
//! one exchange record. Every field may be absent or wrongly typed:
//!
//! - `isCanceled`: non-boolean reads as `false`
//! - `message.text`: anything but a string reads as `""`
//! - `response`: absent or `null` reads as an empty list; any other
//!   non-list value is a structural defect

use serde_json::Value;

use super::error::{preview, ExchangeError};

/// A record either already parsed or still in its serialized form.
#[derive(Debug, Clone)]
pub enum RecordInput {
    Tree(Value),
    Text(String),
}

impl From<Value> for RecordInput {
    fn from(value: Value) -> Self {
        RecordInput::Tree(value)
    }
}

impl From<String> for RecordInput {
    fn from(text: String) -> Self {
        RecordInput::Text(text)
    }
}

impl From<&str> for RecordInput {
    fn from(text: &str) -> Self {
        RecordInput::Text(text.to_string())
    }
}

impl RecordInput {
    /// Resolve to a JSON object tree.
    pub fn into_tree(self) -> Result<Value, ExchangeError> {
        let value = match self {
            RecordInput::Tree(value) => value,
            RecordInput::Text(text) => serde_json::from_str(&text)
                .map_err(|e| ExchangeError::malformed(format!("invalid JSON: {}", e)))?,
        };

        if !value.is_object() {
            return Err(ExchangeError::malformed(format!(
                "record must be a JSON object, got {}",
                preview(&value.to_string())
            )));
        }
        Ok(value)
    }
}

/// The three fields of a record that rendering needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRecord<'a> {
    pub prompt: &'a str,
    pub canceled: bool,
    pub items: &'a [Value],
}

impl DecodedRecord<'_> {
    /// True when the response list was empty or absent.
    ///
    /// Display layers show a placeholder in that case; size accounting
    /// does not.
    pub fn needs_placeholder(&self) -> bool {
        self.items.is_empty()
    }
}

/// The `isCanceled` flag alone, readable even when the rest of the record
/// is malformed.
pub fn is_canceled(record: &Value) -> bool {
    record
        .get("isCanceled")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Decode a record tree without copying any of it.
pub fn decode(record: &Value) -> Result<DecodedRecord<'_>, ExchangeError> {
    let canceled = is_canceled(record);

    let prompt = record
        .get("message")
        .and_then(|m| m.get("text"))
        .and_then(Value::as_str)
        .unwrap_or("");

    let items: &[Value] = match record.get("response") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items.as_slice(),
        Some(other) => {
            return Err(ExchangeError::malformed(format!(
                "'response' is not a list: {}",
                preview(&other.to_string())
            )))
        }
    };

    Ok(DecodedRecord {
        prompt,
        canceled,
        items,
    })
}
