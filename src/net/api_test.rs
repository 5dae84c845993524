use super::*;
use crate::net::types::{AskRequest, HistoryTurn};

// =============================================================
// Constants
// =============================================================

#[test]
fn endpoint_is_absolute_https() {
    assert!(ASK_ENDPOINT.starts_with("https://"));
    assert!(ASK_ENDPOINT.ends_with("/shesha_ai"));
}

#[test]
fn index_name_matches_docs_corpus() {
    assert_eq!(INDEX_NAME, "shesha");
}

// =============================================================
// encode_history
// =============================================================

#[test]
fn empty_window_encodes_as_empty_array() {
    assert_eq!(encode_history(&[]).unwrap(), "[]");
}

#[test]
fn window_encodes_turns_in_order() {
    let turns = vec![
        HistoryTurn::User("What is Shesha?".to_owned()),
        HistoryTurn::Assistant("Shesha is...".to_owned()),
    ];
    assert_eq!(
        encode_history(&turns).unwrap(),
        r#"[{"user":"What is Shesha?"},{"sheshaAI":"Shesha is..."}]"#
    );
}

// =============================================================
// Request body (double encoding)
// =============================================================

#[test]
fn request_body_carries_history_as_json_string() {
    let turns = vec![HistoryTurn::User("What is Shesha?".to_owned())];
    let payload = AskRequest {
        userinput: "What is Shesha?".to_owned(),
        chathistory: encode_history(&turns).unwrap(),
        index_name: INDEX_NAME.to_owned(),
    };
    let body = serde_json::to_value(&payload).unwrap();
    // chathistory must be a string containing JSON, not a nested array.
    assert_eq!(body["chathistory"], r#"[{"user":"What is Shesha?"}]"#);
}
