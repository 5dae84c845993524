//! Wire schema for the AI answering endpoint, plus the request failure
//! taxonomy.
//!
//! DESIGN
//! ======
//! The endpoint takes the chat window as a JSON-encoded *string* inside the
//! JSON body (double encoding), each turn an externally tagged single-key
//! object: `{"user": …}` or `{"sheshaAI": …}`. The DTOs here mirror that shape
//! exactly so the call site stays schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::search::{ChatRole, ChatTurn};

/// Request body for the answering endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    /// The user's query text, verbatim.
    pub userinput: String,
    /// JSON-encoded array of [`HistoryTurn`], already including the turn
    /// being asked.
    pub chathistory: String,
    /// Search-index identifier for the docs corpus.
    pub index_name: String,
}

/// Success-response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub message: AskMessage,
}

/// Answer payload inside the response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AskMessage {
    /// Markdown answer text.
    pub response_message: String,
    /// Source URLs backing the answer; an absent field reads as empty.
    #[serde(default)]
    pub source: Vec<String>,
}

/// One chat turn as the endpoint expects it: a single-key object whose key
/// names the speaker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HistoryTurn {
    #[serde(rename = "user")]
    User(String),
    #[serde(rename = "sheshaAI")]
    Assistant(String),
}

impl From<&ChatTurn> for HistoryTurn {
    fn from(turn: &ChatTurn) -> Self {
        match turn.role {
            ChatRole::User => Self::User(turn.text.clone()),
            ChatRole::Assistant => Self::Assistant(turn.text.clone()),
        }
    }
}

/// Map the session's chat window onto the wire representation, oldest first.
#[must_use]
pub fn history_payload(turns: &[ChatTurn]) -> Vec<HistoryTurn> {
    turns.iter().map(HistoryTurn::from).collect()
}

/// Why an ask request failed.
///
/// Every variant collapses to the same fallback answer at the UI; the variant
/// detail only feeds the diagnostic log line.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// The endpoint answered with a non-2xx status.
    #[error("answering endpoint returned status {0}")]
    Status(u16),
    /// The request never completed (DNS, connection, CORS, server-side stub).
    #[error("network failure: {0}")]
    Network(String),
    /// The request body could not be encoded or the response body decoded.
    #[error("malformed payload: {0}")]
    Parse(String),
}
