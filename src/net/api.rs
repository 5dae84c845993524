//! HTTP call to the remote AI answering endpoint.
//!
//! Browser (`csr`) builds make a real POST via `gloo-net`. Every other build
//! gets a stub returning a transport error, since answering only happens in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure route (non-2xx status, transport error, body encode or
//! decode) maps onto one [`AskError`] variant. The caller collapses them all
//! to the fixed fallback answer and keeps the variant for the diagnostic log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AskError, AskMessage, HistoryTurn};
#[cfg(feature = "csr")]
use super::types::{AskRequest, AskResponse};

/// AI answering endpoint for the Shesha docs corpus.
pub const ASK_ENDPOINT: &str = "https://botsa.azurewebsites.net/shesha_ai";

/// Search-index identifier sent with every request.
pub const INDEX_NAME: &str = "shesha";

/// Encode the chat window for the `chathistory` field. The endpoint wants the
/// turn array as a JSON string inside the JSON body, not as a nested array.
#[cfg(any(test, feature = "csr"))]
fn encode_history(history: &[HistoryTurn]) -> Result<String, AskError> {
    serde_json::to_string(history).map_err(|e| AskError::Parse(e.to_string()))
}

/// Ask the answering endpoint one query, with the current chat window for
/// short-term context.
///
/// # Errors
///
/// Returns [`AskError::Status`] on a non-2xx response, [`AskError::Network`]
/// on transport failure, and [`AskError::Parse`] when the request cannot be
/// encoded or the response body cannot be decoded.
#[cfg(feature = "csr")]
pub async fn ask(query: &str, history: &[HistoryTurn]) -> Result<AskMessage, AskError> {
    let payload = AskRequest {
        userinput: query.to_owned(),
        chathistory: encode_history(history)?,
        index_name: INDEX_NAME.to_owned(),
    };
    let resp = gloo_net::http::Request::post(ASK_ENDPOINT)
        .json(&payload)
        .map_err(|e| AskError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| AskError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(AskError::Status(resp.status()));
    }
    let body: AskResponse = resp.json().await.map_err(|e| AskError::Parse(e.to_string()))?;
    Ok(body.message)
}

/// Server-side stub: answering is only meaningful in the browser.
///
/// # Errors
///
/// Always returns [`AskError::Network`].
#[cfg(not(feature = "csr"))]
pub async fn ask(_query: &str, _history: &[HistoryTurn]) -> Result<AskMessage, AskError> {
    Err(AskError::Network("not available on server".to_owned()))
}
