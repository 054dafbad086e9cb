//! Transcript reconstruction from Copilot chat session documents.
//!
//! The pipeline for one exchange record is
//!
//! ```text
//! record -> decoder -> render (item by item) -> ExchangeRecord
//! ```
//!
//! and [`Session::build`] runs it over a session's `requests` list,
//! dropping failed exchanges according to [`ErrorKind::policy`].
//! Everything here works on in-memory JSON; no I/O happens in this module.

pub mod decoder;
pub mod error;
pub mod exchange;
pub mod identity;
pub mod item;
pub mod render;
pub mod session;

pub use decoder::{decode, is_canceled, DecodedRecord, RecordInput};
pub use error::{ErrorKind, ExchangeError, SessionError, SkipPolicy};
pub use exchange::{ExchangeRecord, NO_RESPONSE_PLACEHOLDER};
pub use identity::content_id;
pub use item::ResponseItem;
pub use render::{render_items, RenderState, Rendered, ResponseRenderer};
pub use session::{Session, SessionInput, SkipCounts};
