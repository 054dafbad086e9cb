//! Response item rendering.
//!
//! Rendering is a left fold over the response list in source order. The
//! only state carried between items is the hidden-presentation flag: once a
//! hidden tool invocation has been seen, standalone code fence delimiters
//! left over from the hidden tool output are dropped for the rest of the
//! record.
//!
//! # Output shapes
//!
//! ```text
//! plain text        value, verbatim
//! file edit group   Edited file: `src/main.rs`
//!                   - deleted line 1 to 2
//!                   - added 5 chars line 3
//!                   <blank line>
//! inline reference  `path/or/name`
//! ```

use serde_json::Value;
use tracing::info;

use super::error::ExchangeError;
use super::item::ResponseItem;

/// Literal block-quote fence suppressed after hidden tool output.
pub const CODE_FENCE: &str = "```";

/// Shown when an edit group carries no usable file path.
pub const UNKNOWN_FILE: &str = "<unknown file>";

/// Shown when an inline reference has neither a path nor a name.
pub const UNKNOWN_REFERENCE: &str = "<unknown reference>";

/// Per-record rendering state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    hidden_presentation: bool,
}

impl RenderState {
    pub fn is_hidden(&self) -> bool {
        self.hidden_presentation
    }
}

/// Result of rendering one record's response list.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Rendered {
    pub text: String,
    /// Unrecognized kinds, one entry per occurrence, in source order.
    pub unknown_kinds: Vec<String>,
}

/// Folds response items into rendered text.
#[derive(Debug, Default)]
pub struct ResponseRenderer {
    state: RenderState,
    out: Rendered,
}

impl ResponseRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Render one item, appending to the accumulated output.
    pub fn push(&mut self, item: &Value) -> Result<(), ExchangeError> {
        match ResponseItem::classify(item) {
            ResponseItem::ToolMarker { hidden } => {
                if hidden {
                    self.state.hidden_presentation = true;
                }
            }
            ResponseItem::PlainText(text) => {
                if !(self.state.hidden_presentation && text.trim() == CODE_FENCE) {
                    self.out.text.push_str(text);
                }
            }
            ResponseItem::FileEditGroup(group) => render_edit_group(group, &mut self.out.text)?,
            ResponseItem::InlineReference(reference) => {
                render_inline_reference(reference, &mut self.out.text)
            }
            ResponseItem::Ignorable(_) | ResponseItem::Empty => {}
            ResponseItem::Unknown(kind) => {
                info!(kind, "skipping unhandled response kind");
                self.out.unknown_kinds.push(kind.to_string());
            }
        }
        Ok(())
    }

    pub fn finish(self) -> Rendered {
        self.out
    }
}

/// Render a whole response list with fresh per-record state.
pub fn render_items(items: &[Value]) -> Result<Rendered, ExchangeError> {
    let mut renderer = ResponseRenderer::new();
    for item in items {
        renderer.push(item)?;
    }
    Ok(renderer.finish())
}

/// One validated edit region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EditRegion {
    chars: usize,
    start_line: i64,
    end_line: i64,
}

impl EditRegion {
    fn parse(region: &Value) -> Result<Self, ExchangeError> {
        if !region.is_object() {
            return Err(ExchangeError::edit_region("edit is not an object", region));
        }

        let text = match region.get("text") {
            Some(Value::String(text)) => text,
            Some(_) => return Err(ExchangeError::edit_region("'text' is not a string", region)),
            None => return Err(ExchangeError::edit_region("missing 'text'", region)),
        };

        let range = match region.get("range") {
            Some(range) if range.is_object() => range,
            Some(_) => return Err(ExchangeError::edit_region("'range' is not an object", region)),
            None => return Err(ExchangeError::edit_region("missing 'range'", region)),
        };

        Ok(EditRegion {
            chars: text.chars().count(),
            start_line: line_number(range, "startLineNumber")?,
            end_line: line_number(range, "endLineNumber")?,
        })
    }

    fn lines(&self) -> String {
        if self.start_line == self.end_line {
            format!("line {}", self.start_line)
        } else {
            format!("line {} to {}", self.start_line, self.end_line)
        }
    }

    fn summary(&self) -> String {
        if self.chars == 0 {
            format!("- deleted {}", self.lines())
        } else {
            let unit = if self.chars == 1 { "char" } else { "chars" };
            format!("- added {} {} {}", self.chars, unit, self.lines())
        }
    }
}

fn line_number(range: &Value, field: &str) -> Result<i64, ExchangeError> {
    match range.get(field) {
        Some(value) => value.as_i64().ok_or_else(|| {
            ExchangeError::edit_region(format!("'{}' is not a line number", field), range)
        }),
        None => Err(ExchangeError::edit_region(
            format!("missing '{}'", field),
            range,
        )),
    }
}

fn render_edit_group(group: &Value, out: &mut String) -> Result<(), ExchangeError> {
    let path = group
        .get("uri")
        .and_then(|uri| uri.get("fsPath"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_FILE);

    let edit_lists: &[Value] = match group.get("edits") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(lists)) => lists.as_slice(),
        Some(other) => return Err(ExchangeError::edit_region("'edits' is not a list", other)),
    };

    // Validate everything before touching the output.
    let mut summaries = Vec::new();
    for list in edit_lists {
        let regions = list
            .as_array()
            .ok_or_else(|| ExchangeError::edit_region("edit group is not a list", list))?;
        for region in regions {
            summaries.push(EditRegion::parse(region)?.summary());
        }
    }

    start_line(out);
    out.push_str(&format!("Edited file: `{}`\n", path));
    for summary in summaries {
        out.push_str(&summary);
        out.push('\n');
    }
    out.push('\n');
    Ok(())
}

fn render_inline_reference(reference: Option<&Value>, out: &mut String) {
    let label = reference.and_then(|r| {
        r.get("fsPath")
            .and_then(Value::as_str)
            .or_else(|| r.get("name").and_then(Value::as_str))
    });

    match label {
        Some(label) => out.push_str(&format!("`{}`", label)),
        None => {
            out.push_str(&format!("`{}`", UNKNOWN_REFERENCE));
            let dump = reference.unwrap_or(&Value::Null);
            out.push_str(&format!("\n{}\n{:#}\n{}\n", CODE_FENCE, dump, CODE_FENCE));
        }
    }
}

/// Ensure the next write starts on a fresh line.
/// Edit headers always begin a line, even after text with no trailing newline.
fn start_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
