//! One rendered prompt/response exchange.

use serde_json::Value;

use super::decoder::{decode, is_canceled, RecordInput};
use super::error::ExchangeError;
use super::render::render_items;

/// Displayed in place of a response whose item list was empty.
pub const NO_RESPONSE_PLACEHOLDER: &str = "_No response_";

/// A successfully parsed exchange. Immutable once built.
#[derive(Debug, Clone)]
pub struct ExchangeRecord {
    prompt: String,
    response: String,
    size: usize,
    empty_response: bool,
    unknown_kinds: Vec<String>,
    raw: Value,
}

impl ExchangeRecord {
    /// Decode and render one exchange record.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::Canceled`] if the record is flagged canceled
    /// - [`ExchangeError::EmptyPrompt`] if the prompt text is empty
    /// - [`ExchangeError::MalformedInput`] for undecodable records
    /// - [`ExchangeError::UnparseableEditRegion`] for broken edit groups
    pub fn build(input: impl Into<RecordInput>) -> Result<Self, ExchangeError> {
        let raw = input.into().into_tree()?;

        // Canceled wins over any structural defect in the rest of the record.
        if is_canceled(&raw) {
            return Err(ExchangeError::Canceled);
        }
        let decoded = decode(&raw)?;
        if decoded.prompt.is_empty() {
            return Err(ExchangeError::EmptyPrompt);
        }

        let rendered = render_items(decoded.items)?;
        let prompt = decoded.prompt.to_string();
        let empty_response = decoded.needs_placeholder();
        let size = prompt.chars().count() + rendered.text.chars().count();

        Ok(Self {
            prompt,
            response: rendered.text,
            size,
            empty_response,
            unknown_kinds: rendered.unknown_kinds,
            raw,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// Prompt plus response length, in characters.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The response for display: the placeholder when the item list was empty.
    pub fn display_response(&self) -> &str {
        if self.empty_response {
            NO_RESPONSE_PLACEHOLDER
        } else {
            &self.response
        }
    }

    /// Unrecognized response kinds met while rendering.
    pub fn unknown_kinds(&self) -> &[String] {
        &self.unknown_kinds
    }

    /// The whole record as it was read.
    pub fn raw_record(&self) -> &Value {
        &self.raw
    }

    /// The raw `message` field, pretty-printed.
    pub fn raw_prompt(&self) -> String {
        format!("{:#}", self.raw.get("message").unwrap_or(&Value::Null))
    }

    /// The raw `response` list as compact JSON (`[]` when absent).
    pub fn raw_response(&self) -> String {
        match self.raw.get("response") {
            Some(response) if !response.is_null() => response.to_string(),
            _ => "[]".to_string(),
        }
    }
}
