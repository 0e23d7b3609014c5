use std::sync::Arc;

use super::*;
use crate::state::test_helpers::{dummy_detail, state_with, MockLlm, MockMovieDb};

// =========================================================================
// build_movie_prompt
// =========================================================================

#[test]
fn prompt_carries_every_detail_field() {
    let prompt = build_movie_prompt(&dummy_detail());
    assert!(prompt.contains("The user is asking about the movie 'Inception'."));
    assert!(prompt.contains("Overview: A thief who steals corporate secrets."));
    assert!(prompt.contains("Release Date: 2010-07-15"));
    assert!(prompt.contains("Rating: 8.4"));
    assert!(prompt.contains("Genres: Action, Science Fiction"));
    assert!(prompt.contains("Runtime: 148 minutes"));
    assert!(prompt.contains("use your movie knowledge"));
}

#[test]
fn prompt_handles_missing_runtime() {
    let mut detail = dummy_detail();
    detail.runtime = None;
    let prompt = build_movie_prompt(&detail);
    assert!(prompt.contains("Runtime: unknown"));
}

// =========================================================================
// chat_about_movie
// =========================================================================

#[tokio::test]
async fn chat_returns_provider_reply() {
    let state = state_with(
        MockMovieDb::with_detail(dummy_detail()),
        Some(MockLlm::replying("It's great.")),
    );
    let reply = chat_about_movie(&state, 27205, "Is it good?").await.unwrap();
    assert_eq!(reply, "It's great.");
}

#[tokio::test]
async fn chat_sends_context_then_question_at_half_temperature() {
    let llm = Arc::new(MockLlm::replying("ok"));
    let state = AppState::new(
        Arc::new(MockMovieDb::with_detail(dummy_detail())),
        Some(llm.clone()),
    );
    chat_about_movie(&state, 27205, "Who directed this?").await.unwrap();

    let seen = llm.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (system, messages, temperature) = &seen[0];
    assert_eq!(system, SYSTEM_PROMPT);
    assert_eq!(messages.len(), 2);
    assert!(messages[0].content.contains("Movie details:"));
    assert_eq!(messages[1].content, "Who directed this?");
    assert!((temperature - CHAT_TEMPERATURE).abs() < f32::EPSILON);
}

#[tokio::test]
async fn chat_without_provider_is_not_configured() {
    let state = state_with(MockMovieDb::with_detail(dummy_detail()), None);
    let err = chat_about_movie(&state, 27205, "hi").await.unwrap_err();
    assert!(matches!(err, ChatError::LlmNotConfigured));
}

#[tokio::test]
async fn chat_unknown_movie_is_not_found() {
    let state = state_with(MockMovieDb::failing(404), Some(MockLlm::replying("unused")));
    let err = chat_about_movie(&state, 999, "hi").await.unwrap_err();
    assert!(matches!(err, ChatError::MovieNotFound(999)));
}
