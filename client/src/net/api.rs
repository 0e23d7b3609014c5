//! REST API helpers for the relay server's three endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Search and detail return `Result` so callers can drive the failure
//! transitions; chat always returns display text because every outcome,
//! including transport failure, is shown to the user verbatim.

#![allow(clippy::unused_async)]

use movies::{MovieDetail, MovieSummary};

use super::chat::{detail_request, search_url};

/// `GET /search_movie?query=` — run a title search.
///
/// # Errors
///
/// Returns a display-ready message on transport failure, non-success
/// status, or a malformed body.
pub async fn search_movies(query: &str) -> Result<Vec<MovieSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = search_url(query);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("search failed: status {}", resp.status()));
        }
        let body: movies::SearchResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = search_url(query);
        Err("not available on server".to_owned())
    }
}

/// `GET /movie/{id}` — fetch the full record for one movie.
///
/// A `null` response body decodes as `Ok(None)`: the server answered but
/// has no record. Callers must pass `None` ids through [`detail_request`]
/// themselves so no request is even built.
///
/// # Errors
///
/// Returns a display-ready message on transport failure, non-success
/// status, or a malformed body.
pub async fn fetch_movie_details(movie_id: i64) -> Result<Option<MovieDetail>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = detail_request(Some(movie_id)).unwrap_or_default();
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("detail fetch failed: status {}", resp.status()));
        }
        resp.json::<Option<MovieDetail>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = detail_request(Some(movie_id));
        Err("not available on server".to_owned())
    }
}

/// `POST /chat` — ask about the selected movie. Always returns display
/// text; decoding follows the priority order in [`super::chat`].
pub async fn send_chat_message(movie_id: i64, user_message: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        use super::chat::{decode_chat_reply, network_error_text};

        let body = movies::ChatRequest { movie_id, user_message: user_message.to_owned() };
        let request = match gloo_net::http::Request::post("/chat").json(&body) {
            Ok(request) => request,
            Err(e) => return network_error_text(&e.to_string()),
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => return network_error_text(&e.to_string()),
        };
        let status = resp.status();
        match resp.text().await {
            Ok(text) => decode_chat_reply(status, &text),
            Err(e) => network_error_text(&e.to_string()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (movie_id, user_message);
        "not available on server".to_owned()
    }
}
