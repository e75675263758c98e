//! Handlers for championship standings.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::standings::StandingsResponse;
use crate::domain::entities::{ConstructorStanding, DriverStanding};
use crate::error::AppError;
use crate::state::AppState;

/// Drivers' championship after the latest round of a season.
///
/// # Endpoint
///
/// `GET /api/standings/drivers/{year}`
///
/// # Errors
///
/// Returns 404 when the upstream has no standings list for the season yet.
pub async fn driver_standings_handler(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<StandingsResponse<DriverStanding>>, AppError> {
    let table = state.season_service.driver_standings(&year).await?;

    Ok(Json(table.into()))
}

/// Constructors' championship after the latest round of a season.
///
/// # Endpoint
///
/// `GET /api/standings/constructors/{year}`
pub async fn constructor_standings_handler(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<StandingsResponse<ConstructorStanding>>, AppError> {
    let table = state.season_service.constructor_standings(&year).await?;

    Ok(Json(table.into()))
}
