//! Chat service — movie context + user question → provider reply.
//!
//! DESIGN
//! ======
//! Receives a chat request, fetches the movie's full record from the
//! metadata source, folds it into a context prompt, and asks the chat
//! provider. The reply is plain text; the route wraps it in the response
//! envelope.

use std::fmt::Write;

use movies::MovieDetail;
use tracing::{info, warn};

use crate::llm::types::Message;
use crate::state::AppState;
use crate::tmdb::TmdbError;

const SYSTEM_PROMPT: &str = "You are a helpful movie assistant.";
const CHAT_TEMPERATURE: f32 = 0.5;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The server started without chat-provider configuration.
    #[error("chat provider not configured")]
    LlmNotConfigured,

    /// The metadata source has no record for the requested movie.
    #[error("movie details not found: {0}")]
    MovieNotFound(i64),

    /// The metadata source failed before a context prompt could be built.
    #[error("metadata error: {0}")]
    Tmdb(#[from] TmdbError),

    /// The chat provider call failed.
    #[error("chat provider error: {0}")]
    Llm(#[from] crate::llm::types::LlmError),
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Answer a user's question about one movie.
///
/// # Errors
///
/// Returns a [`ChatError`] when the provider is unconfigured, the movie is
/// unknown, or either collaborator call fails.
pub async fn chat_about_movie(state: &AppState, movie_id: i64, user_message: &str) -> Result<String, ChatError> {
    info!(%movie_id, message_len = user_message.len(), "chat: request received");

    let llm = state.llm.as_ref().ok_or(ChatError::LlmNotConfigured)?;

    let detail = match state.tmdb.details(movie_id).await {
        Ok(detail) => detail,
        Err(TmdbError::ApiResponse { status, .. }) => {
            warn!(%movie_id, %status, "chat: movie details lookup failed");
            return Err(ChatError::MovieNotFound(movie_id));
        }
        Err(e) => return Err(e.into()),
    };

    let context = build_movie_prompt(&detail);
    let messages = [Message::user(context), Message::user(user_message)];
    let reply = llm.chat(SYSTEM_PROMPT, &messages, CHAT_TEMPERATURE).await?;

    info!(%movie_id, reply_len = reply.len(), "chat: reply produced");
    Ok(reply)
}

// =============================================================================
// PROMPT
// =============================================================================

/// Fold a movie record into the context message sent ahead of the question.
fn build_movie_prompt(detail: &MovieDetail) -> String {
    let genres: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();

    let mut prompt = String::new();
    let _ = writeln!(prompt, "The user is asking about the movie '{}'.", detail.title);
    let _ = writeln!(prompt, "Movie details:");
    let _ = writeln!(prompt, "Title: {}", detail.title);
    let _ = writeln!(prompt, "Overview: {}", detail.overview);
    let _ = writeln!(prompt, "Release Date: {}", detail.release_date);
    let _ = writeln!(prompt, "Rating: {}", detail.vote_average);
    let _ = writeln!(prompt, "Genres: {}", genres.join(", "));
    match detail.runtime {
        Some(minutes) => {
            let _ = writeln!(prompt, "Runtime: {minutes} minutes");
        }
        None => {
            let _ = writeln!(prompt, "Runtime: unknown");
        }
    }
    let _ = writeln!(prompt);
    let _ = write!(
        prompt,
        "Please answer the user's question based on these details, \
         and if they ask for recommendations, use your movie knowledge."
    );
    prompt
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
