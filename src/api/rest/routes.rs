//! # Router Assembly
//!
//! Builds the axum router with tracing and CORS middleware.

use crate::api::rest::handlers::{health, nearby_offices, AppState};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Creates the REST router.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/offices/nearby", get(nearby_offices))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
