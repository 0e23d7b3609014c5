//! LLM — chat-provider adapter for the movie assistant.
//!
//! DESIGN
//! ======
//! One provider: an OpenAI-compatible chat-completions endpoint, configured
//! from environment variables. [`LlmClient`] wraps the HTTP client and
//! implements the mockable [`LlmChat`] trait consumed by the chat service.

pub mod config;
pub mod openai;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{LlmError, Message};

/// Concrete chat-provider client, configured by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: openai::OpenAiClient,
}

impl LlmClient {
    /// Build a chat client from environment variables.
    ///
    /// - `OPENAI_API_KEY`: API key (required)
    /// - `LLM_MODEL`: model name, default `gpt-4o-mini`
    /// - `LLM_BASE_URL`: custom base URL for OpenAI-compatible APIs
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// Build a chat client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = openai::OpenAiClient::new(config.api_key, config.model, config.base_url, config.timeouts)?;
        Ok(Self { inner })
    }

    /// Return the configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        self.inner.model()
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, system: &str, messages: &[Message], temperature: f32) -> Result<String, LlmError> {
        self.inner.chat(system, messages, temperature).await
    }
}
