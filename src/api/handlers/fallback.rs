//! JSON 404 for unknown API paths.

use serde_json::json;

use crate::error::AppError;

/// Keeps unknown `/api/*` paths from falling through to the front-end page.
pub async fn api_not_found_handler() -> AppError {
    AppError::not_found("Endpoint not found", json!({}))
}
