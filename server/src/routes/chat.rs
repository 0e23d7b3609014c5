//! Chat route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use movies::{ApiError, ChatRequest};
use serde::Serialize;
use tracing::error;

use crate::services::chat::{chat_about_movie, ChatError};
use crate::state::AppState;

/// Success envelope for `POST /chat`.
#[derive(Serialize)]
pub struct ChatReply {
    pub response: String,
}

/// `POST /chat` — answer a question about the selected movie.
///
/// Both fields are required; a zero/absent id or blank message is rejected
/// before any collaborator call. A detail miss is reported in-band with a
/// 200 so the browser surfaces the message text rather than a status line.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ApiError>)> {
    if request.movie_id == 0 || request.user_message.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError { error: "movie_id and user_message are required".to_owned() }),
        ));
    }

    match chat_about_movie(&state, request.movie_id, &request.user_message).await {
        Ok(reply) => Ok(Json(serde_json::json!(ChatReply { response: reply }))),
        Err(ChatError::MovieNotFound(_)) => {
            Ok(Json(serde_json::json!(ApiError { error: "Movie details not found".to_owned() })))
        }
        Err(e) => {
            error!(error = %e, "chat: request failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError { error: e.to_string() })))
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
