//! Axum router wiring.
//!
//! Every route, the health endpoints and the fallback included, runs inside
//! the request instrumentor.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    build_router_with(state, Router::new())
}

/// Merge application `routes` with the operational endpoints and instrument
/// all of them.
pub fn build_router_with(state: AppState, routes: Router<AppState>) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route("/health/json", get(ops::health_json))
        .route("/readyz", get(ops::readyz))
        .merge(routes)
        .fallback(ops::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), obs::track_requests))
        .with_state(state)
}
