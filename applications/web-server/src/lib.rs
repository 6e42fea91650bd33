//! Roster Web Library
//!
//! Static file server for the client application. Paths that do not match a
//! file fall back to `index.html` so client-side routes resolve.

pub mod config;

pub use config::WebConfig;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::path::Path;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, TraceLayer},
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /health - Static liveness payload, no backend dependency
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "frontend",
    })
}

/// Build the static router rooted at `web_dir`
pub fn create_router(web_dir: &Path) -> Router {
    // SPA fallback: unknown paths get the entry document with 200
    let index = ServeFile::new(web_dir.join("index.html"));
    let static_files = ServeDir::new(web_dir).fallback(index);

    Router::new()
        .route("/health", get(health))
        .fallback_service(static_files)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
}
