use super::*;
use crate::state::test_helpers::{dummy_detail, state_with, MockLlm, MockMovieDb};

#[tokio::test]
async fn chat_success_wraps_reply_in_response_field() {
    let state = state_with(
        MockMovieDb::with_detail(dummy_detail()),
        Some(MockLlm::replying("It's great.")),
    );
    let request = ChatRequest { movie_id: 27205, user_message: "Is it good?".to_owned() };
    let Json(body) = chat(State(state), Json(request)).await.unwrap();
    assert_eq!(body, serde_json::json!({ "response": "It's great." }));
}

#[tokio::test]
async fn chat_missing_movie_id_is_bad_request() {
    let state = state_with(MockMovieDb::with_detail(dummy_detail()), Some(MockLlm::replying("unused")));
    let request = ChatRequest { movie_id: 0, user_message: "hi".to_owned() };
    let (status, Json(body)) = chat(State(state), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "movie_id and user_message are required");
}

#[tokio::test]
async fn chat_blank_message_is_bad_request() {
    let state = state_with(MockMovieDb::with_detail(dummy_detail()), Some(MockLlm::replying("unused")));
    let request = ChatRequest { movie_id: 27205, user_message: "   ".to_owned() };
    let (status, _) = chat(State(state), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_detail_miss_is_reported_in_band() {
    let state = state_with(MockMovieDb::failing(404), Some(MockLlm::replying("unused")));
    let request = ChatRequest { movie_id: 999, user_message: "hi".to_owned() };
    let Json(body) = chat(State(state), Json(request)).await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Movie details not found" }));
}

#[tokio::test]
async fn chat_without_provider_is_internal_error() {
    let state = state_with(MockMovieDb::with_detail(dummy_detail()), None);
    let request = ChatRequest { movie_id: 27205, user_message: "hi".to_owned() };
    let (status, _) = chat(State(state), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
