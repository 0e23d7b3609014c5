//! TMDB metadata client.
//!
//! Thin HTTP wrapper over the TMDB v3 API. Status check then pure parsing
//! in `parse_search_response` / `parse_detail_response` for testability.
//! Handlers depend on the [`MovieDb`] trait so tests can substitute a mock.

use std::time::Duration;

use movies::{MovieDetail, MovieSummary, SearchResponse};

const BASE_URL: &str = "https://api.themoviedb.org/3";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by TMDB client operations.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to TMDB failed at the transport level.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// TMDB returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The TMDB response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// TRAIT
// =============================================================================

/// Async movie-metadata source. Enables mocking in route and service tests.
#[async_trait::async_trait]
pub trait MovieDb: Send + Sync {
    /// Search movies by free-text title query.
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`] on transport failure, non-success status, or
    /// a malformed response body.
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, TmdbError>;

    /// Fetch the full record for one movie.
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`] on transport failure, non-success status
    /// (including unknown IDs), or a malformed response body.
    async fn details(&self, movie_id: i64) -> Result<MovieDetail, TmdbError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct TmdbClient {
    http: reqwest::Client,
    api_key: String,
}

impl TmdbClient {
    /// Build a client from the `TMDB_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the HTTP client fails to build.
    pub fn from_env() -> Result<Self, TmdbError> {
        let api_key =
            std::env::var("TMDB_API_KEY").map_err(|_| TmdbError::MissingApiKey { var: "TMDB_API_KEY".into() })?;
        Self::new(api_key)
    }

    /// Build a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(api_key: String) -> Result<Self, TmdbError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| TmdbError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key })
    }

    async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String, TmdbError> {
        let response = self
            .http
            .get(format!("{BASE_URL}{path}"))
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| TmdbError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TmdbError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(TmdbError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl MovieDb for TmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, TmdbError> {
        let text = self.get_text("/search/movie", &[("query", query)]).await?;
        parse_search_response(&text)
    }

    async fn details(&self, movie_id: i64) -> Result<MovieDetail, TmdbError> {
        let text = self.get_text(&format!("/movie/{movie_id}"), &[]).await?;
        parse_detail_response(&text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Parse a TMDB search payload down to the relayed summary fields.
///
/// Unknown provider fields are dropped; absent optional fields default, so a
/// sparse result never fails the whole search.
fn parse_search_response(json: &str) -> Result<Vec<MovieSummary>, TmdbError> {
    let body: SearchResponse = serde_json::from_str(json).map_err(|e| TmdbError::ApiParse(e.to_string()))?;
    Ok(body.results)
}

fn parse_detail_response(json: &str) -> Result<MovieDetail, TmdbError> {
    serde_json::from_str(json).map_err(|e| TmdbError::ApiParse(e.to_string()))
}

#[cfg(test)]
#[path = "tmdb_test.rs"]
mod tests;
