//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the three proxy endpoints with Leptos SSR rendering
//! under a single Axum router. The API (`/search_movie`, `/movie/{id}`,
//! `/chat`) sits at the root, while the Leptos app lives under `/app`.

pub mod chat;
pub mod movies;

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// The proxy API surface consumed by the browser app.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/search_movie", get(movies::search_movie))
        .route("/movie/{id}", get(movies::movie_details))
        .route("/chat", post(chat::chat))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes plus the Leptos SSR frontend at `/app`.
///
/// Falls back to the API-only router when the Leptos configuration cannot
/// be loaded, so a missing frontend build never takes the proxy down.
pub fn app(state: AppState) -> Router {
    match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "leptos SSR unavailable, serving API only");
            api_routes(state)
        }
    }
}

/// Leptos SSR frontend merged with the API routes.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

/// `GET /` — liveness ping at the root of the API surface.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Backend is running!" }))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
