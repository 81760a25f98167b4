//! Router assembly for the tripcast HTTP API.
//!
//! [`build_router`] wires the handler functions to their routes with CORS
//! and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// CORS mirrors the request origin and allows credentials (browser map
/// frontends call from arbitrary origins). TraceLayer provides request-level
/// logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::health))
        .route("/api/plan", post(handlers::plan::plan_trip))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
