//! OpenAI chat-completions client.
//!
//! Thin HTTP wrapper for `/chat/completions`. Pure parsing in
//! `parse_chat_completions_response` for testability.

use std::time::Duration;

use serde::Serialize;

use super::config::LlmTimeouts;
use super::types::{LlmError, Message};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Build a chat-completions client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeouts: LlmTimeouts,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url, model })
    }

    /// Return the configured model name (e.g. `"gpt-4o-mini"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    pub(crate) async fn chat(
        &self,
        system: &str,
        messages: &[Message],
        temperature: f32,
    ) -> Result<String, LlmError> {
        let msgs = build_messages(system, messages);
        let body = CcRequest { model: &self.model, messages: &msgs, temperature };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_chat_completions_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
}

#[derive(serde::Deserialize)]
struct CcResponse {
    choices: Vec<CcChoice>,
}

#[derive(serde::Deserialize)]
struct CcChoice {
    message: CcMessage,
}

#[derive(serde::Deserialize)]
struct CcMessage {
    content: Option<String>,
}

// =============================================================================
// HELPERS
// =============================================================================

/// Prepend the system prompt to the conversation as the API expects.
fn build_messages(system: &str, messages: &[Message]) -> Vec<Message> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    out.push(Message { role: "system".to_owned(), content: system.to_owned() });
    out.extend(messages.iter().cloned());
    out
}

/// Extract the first choice's text from a chat-completions payload.
fn parse_chat_completions_response(json: &str) -> Result<String, LlmError> {
    let api: CcResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let choice = api
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ApiParse("response contained no choices".to_owned()))?;
    Ok(choice.message.content.unwrap_or_default())
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
