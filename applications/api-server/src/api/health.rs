/// Health check API routes
use crate::{
    error::{ApiError, Result},
    state::AppState,
};
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

const SERVICE_NAME: &str = "backend";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: DateTime<Utc>,
    pub database: &'static str,
    #[serde(rename = "dbTime")]
    pub db_time: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub database: &'static str,
}

/// GET /health - Liveness plus database round-trip, with timestamps
pub async fn health(State(app_state): State<AppState>) -> Result<Json<HealthResponse>> {
    let db_time = app_state
        .store
        .ping()
        .await
        .map_err(|e| ApiError::Unhealthy(e.to_string()))?;

    Ok(Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: Utc::now(),
        database: "connected",
        db_time,
    }))
}

/// GET /api/health - Same probe, compact body
pub async fn api_health(State(app_state): State<AppState>) -> Result<Json<ApiHealthResponse>> {
    app_state
        .store
        .ping()
        .await
        .map_err(|e| ApiError::Unhealthy(e.to_string()))?;

    Ok(Json(ApiHealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        database: "connected",
    }))
}
