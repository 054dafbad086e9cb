//! Session aggregation.
//!
//! A session document looks like:
//!
//! ```text
//! { "requests": [Record, ...], "creationDate": 1700000000000, "lastMessageDate": 1700000500000 }
//! ```
//!
//! Each record becomes an [`ExchangeRecord`] or is dropped according to
//! [`ErrorKind::policy`](super::error::ErrorKind::policy). Only a document
//! whose top-level shape is wrong fails the whole session.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, warn};

use super::error::{preview, SessionError, SkipPolicy};
use super::exchange::ExchangeRecord;
use super::identity::content_id;

/// A session document either already parsed or still serialized.
#[derive(Debug, Clone)]
pub enum SessionInput {
    Tree(Value),
    Text(String),
}

impl From<Value> for SessionInput {
    fn from(value: Value) -> Self {
        SessionInput::Tree(value)
    }
}

impl From<String> for SessionInput {
    fn from(text: String) -> Self {
        SessionInput::Text(text)
    }
}

impl From<&str> for SessionInput {
    fn from(text: &str) -> Self {
        SessionInput::Text(text.to_string())
    }
}

/// Counts of exchanges dropped while building a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SkipCounts {
    /// Canceled exchanges and empty prompts.
    pub silent: usize,
    /// Malformed records and unparseable edit regions.
    pub diagnosed: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.silent + self.diagnosed
    }
}

/// An ordered collection of exchanges sharing one identity.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
    exchanges: Vec<ExchangeRecord>,
    size: usize,
    skipped: SkipCounts,
}

impl Session {
    /// Build a session from a raw document.
    ///
    /// `id` is used when non-empty, otherwise a content hash of the
    /// document. `last_update` seeds both timestamps; `creationDate` and
    /// `lastMessageDate` (epoch milliseconds) in the document override them.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the input is not a JSON object, or its
    /// `requests` field is present but not a list.
    pub fn build(
        input: impl Into<SessionInput>,
        id: &str,
        last_update: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let document = match input.into() {
            SessionInput::Tree(value) => value,
            SessionInput::Text(text) => serde_json::from_str(&text)?,
        };

        let Value::Object(mut fields) = document else {
            return Err(SessionError::invalid(format!(
                "expected a JSON object, got {}",
                preview(&document.to_string())
            )));
        };

        let id = if id.is_empty() {
            content_id(&Value::Object(fields.clone()))
        } else {
            id.to_string()
        };

        let created = fields
            .get("creationDate")
            .and_then(epoch_millis)
            .unwrap_or(last_update);
        let updated = fields
            .get("lastMessageDate")
            .and_then(epoch_millis)
            .unwrap_or(last_update);

        let requests = match fields.remove("requests") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(requests)) => requests,
            Some(other) => {
                return Err(SessionError::invalid(format!(
                    "'requests' is not a list: {}",
                    preview(&other.to_string())
                )))
            }
        };

        let mut session = Session {
            id,
            created,
            updated,
            exchanges: Vec::with_capacity(requests.len()),
            size: 0,
            skipped: SkipCounts::default(),
        };

        for (index, request) in requests.into_iter().enumerate() {
            session.absorb(index, ExchangeRecord::build(request))?;
        }

        Ok(session)
    }

    fn absorb(
        &mut self,
        index: usize,
        result: Result<ExchangeRecord, super::error::ExchangeError>,
    ) -> Result<(), SessionError> {
        let err = match result {
            Ok(exchange) => {
                self.size += exchange.size();
                self.exchanges.push(exchange);
                return Ok(());
            }
            Err(err) => err,
        };

        match err.policy() {
            SkipPolicy::DropSilent => {
                debug!(chat = %self.id, index, "skipping exchange: {}", err);
                self.skipped.silent += 1;
            }
            SkipPolicy::DropWithDiagnostic => {
                warn!(chat = %self.id, index, "skipping unparseable exchange: {}", err);
                self.skipped.diagnosed += 1;
            }
            SkipPolicy::AbortAll => return Err(SessionError::invalid(err.to_string())),
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    /// Total characters across all kept exchanges.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn skipped(&self) -> SkipCounts {
        self.skipped
    }

    pub fn exchanges(&self) -> &[ExchangeRecord] {
        &self.exchanges
    }

    /// `(prompt, response, size)` for every kept exchange, in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, usize)> + '_ {
        self.exchanges
            .iter()
            .map(|e| (e.prompt(), e.response(), e.size()))
    }
}

/// Parse an epoch-milliseconds value (number or numeric string).
fn epoch_millis(value: &Value) -> Option<DateTime<Utc>> {
    let millis = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.round() as i64)
}
