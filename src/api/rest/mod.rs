//! # REST API
//!
//! REST endpoints using axum for the nearby-office search.
//!
//! # Endpoints
//!
//! - `GET /offices/nearby` - radius search with currency-aware ranking,
//!   filtering, and pagination
//! - `GET /health` - health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use exchange_locator::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = AppState { engine: Arc::new(engine) };
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, ErrorResponse, HealthResponse, NearbyOfficesParams,
    NearbyOfficesResponse, OfficeDto, WorkingHourDto,
};
pub use routes::create_router;
