//! Shared movie wire model for the assistant app.
//!
//! This crate owns the JSON representation used by both `server` and
//! `client`: the search/detail records relayed from the metadata provider,
//! the chat request body, and the poster CDN URL helpers. Fields the
//! upstream provider may omit default rather than fail deserialization.

use serde::{Deserialize, Serialize};

/// Base URL pattern for poster images on the metadata provider's CDN.
const POSTER_CDN_BASE: &str = "https://image.tmdb.org/t/p";

/// Width variant used for result-list thumbnails.
const POSTER_SIZE_THUMB: &str = "w200";

/// Width variant used for the detail view.
const POSTER_SIZE_LARGE: &str = "w500";

/// Lightweight listing record shown in search results.
///
/// The server filters the provider's search payload down to exactly these
/// fields before relaying it to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Provider-assigned movie identifier.
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// CDN path fragment for the poster image; absence suppresses the image.
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
}

/// Full record shown after a movie is selected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Runtime in minutes; the provider omits it for unreleased titles.
    #[serde(default)]
    pub runtime: Option<u32>,
}

/// Genre tag attached to a [`MovieDetail`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Envelope for `GET /search_movie` responses.
///
/// A missing `results` field decodes as the empty list so a sparse provider
/// payload never surfaces as a parse error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<MovieSummary>,
}

/// Request body for `POST /chat`.
///
/// Both fields default when absent so the server can answer a missing
/// field with its own 400 instead of a deserialization reject.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub movie_id: i64,
    #[serde(default)]
    pub user_message: String,
}

/// Error envelope used by every non-success server response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Build the thumbnail-size poster URL for a result card.
///
/// Returns `None` when the path is absent or empty so callers can skip the
/// `<img>` entirely.
#[must_use]
pub fn poster_thumb_url(poster_path: Option<&str>) -> Option<String> {
    poster_url(poster_path, POSTER_SIZE_THUMB)
}

/// Build the large poster URL for the detail view.
#[must_use]
pub fn poster_large_url(poster_path: Option<&str>) -> Option<String> {
    poster_url(poster_path, POSTER_SIZE_LARGE)
}

fn poster_url(poster_path: Option<&str>, size: &str) -> Option<String> {
    let path = poster_path?.trim();
    if path.is_empty() {
        return None;
    }
    Some(format!("{POSTER_CDN_BASE}/{size}{path}"))
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;
