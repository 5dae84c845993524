use super::*;
use crate::state::search::{ChatRole, ChatTurn};

// =============================================================
// Helpers
// =============================================================

fn window() -> Vec<ChatTurn> {
    vec![
        ChatTurn::new(ChatRole::User, "What is Shesha?"),
        ChatTurn::new(ChatRole::Assistant, "Shesha is..."),
        ChatTurn::new(ChatRole::User, "And Node?"),
    ]
}

// =============================================================
// HistoryTurn serde
// =============================================================

#[test]
fn user_turn_serializes_as_single_key_object() {
    let turn = HistoryTurn::User("hi".to_owned());
    assert_eq!(serde_json::to_string(&turn).unwrap(), r#"{"user":"hi"}"#);
}

#[test]
fn assistant_turn_uses_shesha_ai_key() {
    let turn = HistoryTurn::Assistant("hello".to_owned());
    assert_eq!(serde_json::to_string(&turn).unwrap(), r#"{"sheshaAI":"hello"}"#);
}

#[test]
fn history_payload_preserves_order_and_roles() {
    let payload = history_payload(&window());
    assert_eq!(
        payload,
        vec![
            HistoryTurn::User("What is Shesha?".to_owned()),
            HistoryTurn::Assistant("Shesha is...".to_owned()),
            HistoryTurn::User("And Node?".to_owned()),
        ]
    );
}

#[test]
fn history_payload_of_empty_window_is_empty() {
    assert!(history_payload(&[]).is_empty());
}

// =============================================================
// AskRequest shape
// =============================================================

#[test]
fn ask_request_field_names_match_endpoint() {
    let request = AskRequest {
        userinput: "q".to_owned(),
        chathistory: "[]".to_owned(),
        index_name: "shesha".to_owned(),
    };
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["userinput"], "q");
    assert_eq!(body["chathistory"], "[]");
    assert_eq!(body["index_name"], "shesha");
}

// =============================================================
// AskResponse parsing
// =============================================================

#[test]
fn response_parses_message_and_sources() {
    let body = r#"{"message":{"response_message":"Shesha is...","source":["https://a","https://b"]}}"#;
    let parsed: AskResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.message.response_message, "Shesha is...");
    assert_eq!(
        parsed.message.source,
        vec!["https://a".to_owned(), "https://b".to_owned()]
    );
}

#[test]
fn response_missing_source_reads_as_empty() {
    let body = r#"{"message":{"response_message":"ok"}}"#;
    let parsed: AskResponse = serde_json::from_str(body).unwrap();
    assert!(parsed.message.source.is_empty());
}

#[test]
fn response_missing_message_text_is_an_error() {
    let body = r#"{"message":{"source":["https://a"]}}"#;
    assert!(serde_json::from_str::<AskResponse>(body).is_err());
}

#[test]
fn response_with_unrelated_envelope_is_an_error() {
    assert!(serde_json::from_str::<AskResponse>(r#"{"detail":"nope"}"#).is_err());
}

// =============================================================
// AskError display
// =============================================================

#[test]
fn status_error_names_the_status() {
    assert_eq!(
        AskError::Status(500).to_string(),
        "answering endpoint returned status 500"
    );
}

#[test]
fn network_and_parse_errors_carry_detail() {
    assert!(AskError::Network("dns".to_owned()).to_string().contains("dns"));
    assert!(AskError::Parse("eof".to_owned()).to_string().contains("eof"));
}
