//! Handler for season drivers.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::season::DriversResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the drivers entered in a season.
///
/// # Endpoint
///
/// `GET /api/drivers/{year}`
///
/// # Errors
///
/// Same classification as the calendar: 400, mirrored upstream status, 500, 404.
pub async fn drivers_handler(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<DriversResponse>, AppError> {
    let roster = state.season_service.drivers(&year).await?;

    Ok(Json(roster.into()))
}
