//! Business logic services for the application layer.

pub mod calendar_service;
pub mod season_service;

pub use calendar_service::CalendarService;
pub use season_service::SeasonService;

use serde_json::json;

use crate::error::AppError;

/// 404 for a well-formed upstream answer without records.
fn no_data(kind: &str, token: &str) -> AppError {
    AppError::not_found(
        format!("No {} data found for year {}.", kind, token),
        json!({ "year": token }),
    )
}
