use crate::{api, state::AppState};
use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the API router
///
/// `/health` sits at the root; everything else is nested under `/api`.
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::api_health))
        .route(
            "/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route("/users/:id", delete(api::users::delete_user));

    Router::new()
        .route("/health", get(api::health::health))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
