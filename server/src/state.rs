//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the two collaborator clients behind mockable traits: the metadata
//! source and the optional chat provider.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::tmdb::MovieDb;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub tmdb: Arc<dyn MovieDb>,
    /// Optional chat client. `None` when LLM env vars are not configured;
    /// the chat endpoint then reports the condition instead of crashing.
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(tmdb: Arc<dyn MovieDb>, llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { tmdb, llm }
    }
}
