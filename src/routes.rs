//! Top-level router configuration combining the API and the front-end.
//!
//! # Route Structure
//!
//! - `/api/*`  - JSON API (see [`crate::api::routes`])
//! - `/*`      - Static front-end; unknown paths serve `index.html`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Builds the router without path normalization.
///
/// Integration tests drive this directly; [`app_router`] is what the server runs.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let front_end = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", api::routes::routes())
        .fallback_service(front_end)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding the front-end bundle
pub fn app_router(state: AppState, static_dir: &Path) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
