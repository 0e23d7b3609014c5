#![recursion_limit = "256"]

mod llm;
mod routes;
mod services;
mod state;
mod tmdb;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let tmdb = tmdb::TmdbClient::from_env().expect("TMDB_API_KEY required");

    // Initialize chat client (non-fatal: chat degrades if config missing).
    let llm = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "chat client initialized");
            Some(Arc::new(client) as Arc<dyn llm::LlmChat>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "chat client not configured, chat endpoint disabled");
            None
        }
    };

    let state = state::AppState::new(Arc::new(tmdb), llm);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "movie assistant listening");
    axum::serve(listener, app).await.expect("server failed");
}
