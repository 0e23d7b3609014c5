//! Movie search and detail routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use movies::{ApiError, MovieDetail, SearchResponse};
use serde::Deserialize;
use tracing::warn;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    query: String,
}

type ApiFailure = (StatusCode, Json<ApiError>);

fn failure(status: StatusCode, message: &str) -> ApiFailure {
    (status, Json(ApiError { error: message.to_owned() }))
}

/// `GET /search_movie?query=` — relay a title search to the metadata source.
///
/// An empty (post-trim) query is a client error and never reaches the
/// collaborator.
pub async fn search_movie(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiFailure> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(failure(StatusCode::BAD_REQUEST, "Query parameter is required"));
    }

    match state.tmdb.search(query).await {
        Ok(results) => Ok(Json(SearchResponse { results })),
        Err(e) => {
            warn!(error = %e, "search: metadata source failed");
            Err(failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch data from TMDB"))
        }
    }
}

/// `GET /movie/{id}` — relay a detail lookup to the metadata source.
pub async fn movie_details(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> Result<Json<MovieDetail>, ApiFailure> {
    match state.tmdb.details(movie_id).await {
        Ok(detail) => Ok(Json(detail)),
        Err(e) => {
            warn!(%movie_id, error = %e, "detail: metadata source failed");
            Err(failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch movie details from TMDB",
            ))
        }
    }
}

#[cfg(test)]
#[path = "movies_test.rs"]
mod tests;
