//! Failure taxonomy for exchange and session parsing.
//!
//! Every failure is classified by [`ErrorKind`], and every kind maps to
//! exactly one [`SkipPolicy`]. The session aggregator only consults
//! [`ErrorKind::policy`]; it never inspects error variants directly.
//!
//! | Kind                    | Policy               |
//! |-------------------------|----------------------|
//! | `CanceledExchange`      | `DropSilent`         |
//! | `EmptyPrompt`           | `DropSilent`         |
//! | `MalformedInput`        | `DropWithDiagnostic` |
//! | `UnparseableEditRegion` | `DropWithDiagnostic` |
//! | `InvalidSessionDocument`| `AbortAll`           |

use std::fmt;

use thiserror::Error;

/// Maximum length of offending content quoted in error messages.
const PREVIEW_LEN: usize = 120;

/// What the caller must do with a failed exchange or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipPolicy {
    /// Drop the exchange; note it at debug level only.
    DropSilent,
    /// Drop the exchange and emit a warning naming the defect.
    DropWithDiagnostic,
    /// The whole session cannot be constructed.
    AbortAll,
}

/// Closed classification of every failure the parser can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    CanceledExchange,
    EmptyPrompt,
    MalformedInput,
    UnparseableEditRegion,
    InvalidSessionDocument,
}

impl ErrorKind {
    /// The handling table.
    pub fn policy(self) -> SkipPolicy {
        match self {
            ErrorKind::CanceledExchange | ErrorKind::EmptyPrompt => SkipPolicy::DropSilent,
            ErrorKind::MalformedInput | ErrorKind::UnparseableEditRegion => {
                SkipPolicy::DropWithDiagnostic
            }
            ErrorKind::InvalidSessionDocument => SkipPolicy::AbortAll,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::CanceledExchange => "canceled exchange",
            ErrorKind::EmptyPrompt => "empty prompt",
            ErrorKind::MalformedInput => "malformed input",
            ErrorKind::UnparseableEditRegion => "unparseable edit region",
            ErrorKind::InvalidSessionDocument => "invalid session document",
        };
        f.write_str(name)
    }
}

/// Errors raised while building a single exchange.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("exchange was canceled")]
    Canceled,

    #[error("exchange has an empty prompt")]
    EmptyPrompt,

    #[error("malformed exchange record: {reason}")]
    MalformedInput { reason: String },

    #[error("unparseable edit region ({reason}): {value}")]
    UnparseableEditRegion { reason: String, value: String },
}

impl ExchangeError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ExchangeError::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Build an edit-region error quoting the offending JSON value.
    pub(crate) fn edit_region(reason: impl Into<String>, value: &serde_json::Value) -> Self {
        ExchangeError::UnparseableEditRegion {
            reason: reason.into(),
            value: preview(&value.to_string()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ExchangeError::Canceled => ErrorKind::CanceledExchange,
            ExchangeError::EmptyPrompt => ErrorKind::EmptyPrompt,
            ExchangeError::MalformedInput { .. } => ErrorKind::MalformedInput,
            ExchangeError::UnparseableEditRegion { .. } => ErrorKind::UnparseableEditRegion,
        }
    }

    pub fn policy(&self) -> SkipPolicy {
        self.kind().policy()
    }
}

/// Errors raised while building a whole session. Always fatal.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid session document: {reason}")]
    InvalidDocument { reason: String },
}

impl SessionError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SessionError::InvalidDocument {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidSessionDocument
    }
}

/// Truncate content for inclusion in a diagnostic.
pub(crate) fn preview(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= PREVIEW_LEN {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(PREVIEW_LEN).collect();
        format!("{}...", head)
    }
}
