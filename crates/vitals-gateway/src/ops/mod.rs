//! Operational HTTP endpoints.
//!
//! - `/health`      : liveness, fixed payload
//! - `/health/json` : full health snapshot
//! - `/readyz`      : readiness (503 when draining)

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use vitals_core::HealthSnapshot;

use crate::app_state::AppState;

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

pub async fn health_json(State(state): State<AppState>) -> Json<HealthSnapshot> {
    Json(state.health().build().await)
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else {
        (StatusCode::OK, "ready")
    }
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "NOT_FOUND" })))
}
