//! Unit tests for session parsing against a realistic session document

use chatmgr::transcript::{ExchangeRecord, Session, SkipCounts, NO_RESPONSE_PLACEHOLDER};
use chrono::DateTime;

use crate::helpers::{load_fixture, session_json};

fn sample() -> Session {
    let epoch = DateTime::from_timestamp(0, 0).unwrap();
    Session::build(load_fixture("chat_session.json"), "", epoch).unwrap()
}

#[test]
fn keeps_only_usable_exchanges() {
    let session = sample();
    let prompts: Vec<&str> = session.iter().map(|(prompt, _, _)| prompt).collect();
    assert_eq!(
        prompts,
        [
            "How do I read a file in Rust?",
            "Rename the helper",
            "Where is it defined?",
            "Thanks!"
        ]
    );
    assert_eq!(session.skipped(), SkipCounts { silent: 2, diagnosed: 1 });
}

#[test]
fn plain_text_is_concatenated_verbatim() {
    let session = sample();
    assert_eq!(
        session.exchanges()[0].response(),
        "Here\u{2019}s how:\n\n```rust\nlet s = fs::read_to_string(\"a.txt\")?;\n```"
    );
}

#[test]
fn hidden_tool_output_and_edit_summary() {
    let session = sample();
    assert_eq!(
        session.exchanges()[1].response(),
        "Renamed `load` to `read_config`.\n\
         Edited file: `/home/dev/my project/src/config.rs`\n\
         - added 11 chars line 12\n\
         - deleted line 20 to 24\n\n"
    );
}

#[test]
fn inline_reference_and_unknown_kind() {
    let session = sample();
    let exchange = &session.exchanges()[2];
    assert_eq!(
        exchange.response(),
        "It lives in `/home/dev/my project/src/config.rs`."
    );
    assert_eq!(exchange.unknown_kinds(), ["newFancyKind".to_string()]);
}

#[test]
fn empty_response_shows_placeholder_only_for_display() {
    let session = sample();
    let exchange = &session.exchanges()[3];
    assert_eq!(exchange.response(), "");
    assert_eq!(exchange.display_response(), NO_RESPONSE_PLACEHOLDER);
    assert_eq!(exchange.size(), "Thanks!".len());
}

#[test]
fn session_size_is_sum_of_kept_exchanges() {
    let session = sample();
    let total: usize = session.exchanges().iter().map(ExchangeRecord::size).sum();
    assert_eq!(session.size(), total);
}

#[test]
fn document_dates_are_used() {
    let session = sample();
    assert_eq!(session.created().timestamp(), 1_700_000_000);
    assert_eq!(session.updated().timestamp(), 1_700_000_600);
}

#[test]
fn derived_id_is_stable_across_parses() {
    let first = sample();
    let second = sample();
    assert_eq!(first.id(), second.id());
    assert_eq!(first.id().len(), 32);
}

#[test]
fn count_matches_valid_records() {
    let epoch = DateTime::from_timestamp(0, 0).unwrap();
    for n in 0..5 {
        let pairs: Vec<(String, String)> = (0..n)
            .map(|i| (format!("prompt {}", i), format!("answer {}", i)))
            .collect();
        let borrowed: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(p, r)| (p.as_str(), r.as_str()))
            .collect();
        let session = Session::build(session_json(&borrowed), "id", epoch).unwrap();
        assert_eq!(session.len(), n);
    }
}
