//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`        - Greeting
//! - `GET /health`  - Health check
//! - `/dogs*`       - Dog resource (see [`crate::api::routes::dog_routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic catching** - Handler panics become 500 responses
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, root_handler};
use crate::api::middleware::{panic, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::dog_routes())
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
