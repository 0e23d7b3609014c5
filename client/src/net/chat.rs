//! Request guards and reply decoding, kept pure for testability.
//!
//! The HTTP calls themselves live in [`super::api`]; everything here runs
//! identically on native and WASM so the whole request/response contract
//! is unit-tested without a browser.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Placeholder shown when the chat endpoint answers with an empty body.
const NO_RESPONSE: &str = "no response";

/// Build the search URL with the query percent-encoded.
#[must_use]
pub fn search_url(query: &str) -> String {
    format!("/search_movie?query={}", urlencoding::encode(query))
}

/// Build the detail URL for a known identifier; `None` means no call is
/// issued at all.
#[must_use]
pub fn detail_request(movie_id: Option<i64>) -> Option<String> {
    movie_id.map(|id| format!("/movie/{id}"))
}

/// Why a chat send was aborted before any network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatGuard {
    /// The message text is blank after trimming.
    EmptyMessage,
    /// No movie is currently selected.
    NoSelection,
}

impl ChatGuard {
    /// User-facing text for the aborted send.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyMessage => "Please enter a message.",
            Self::NoSelection => "Select a movie first.",
        }
    }
}

/// Check the chat-send preconditions in order; each failure is terminal
/// and reported locally. Returns the selected id and the trimmed text.
///
/// # Errors
///
/// Returns the first violated [`ChatGuard`]: blank text before missing
/// selection.
pub fn chat_preconditions(text: &str, selected_id: Option<i64>) -> Result<(i64, String), ChatGuard> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ChatGuard::EmptyMessage);
    }
    let Some(id) = selected_id else {
        return Err(ChatGuard::NoSelection);
    };
    Ok((id, trimmed.to_owned()))
}

/// Decode a chat response into display text, in priority order:
///
/// 1. non-success status: surface the status and raw body verbatim;
/// 2. body that is not JSON: the raw text, or a placeholder when empty;
/// 3. JSON body: the first present of a `reply` field, a `response`
///    field, the body itself when it is a bare string, else the JSON
///    serialized back to text.
#[must_use]
pub fn decode_chat_reply(status: u16, body: &str) -> String {
    if !(200..=299).contains(&status) {
        return format!("Error: Backend returned status {status}\n{body}");
    }

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        if body.is_empty() {
            return NO_RESPONSE.to_owned();
        }
        return body.to_owned();
    };

    if let Some(reply) = value.get("reply").and_then(|v| v.as_str()) {
        return reply.to_owned();
    }
    if let Some(response) = value.get("response").and_then(|v| v.as_str()) {
        return response.to_owned();
    }
    if let Some(bare) = value.as_str() {
        return bare.to_owned();
    }
    value.to_string()
}

/// Wrap a transport-level failure for display.
#[must_use]
pub fn network_error_text(message: &str) -> String {
    format!("Network or other error: {message}")
}
