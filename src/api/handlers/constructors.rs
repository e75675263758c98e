//! Handler for season constructors.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::season::ConstructorsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the constructors entered in a season.
///
/// # Endpoint
///
/// `GET /api/constructors/{year}`
pub async fn constructors_handler(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<ConstructorsResponse>, AppError> {
    let roster = state.season_service.constructors(&year).await?;

    Ok(Json(roster.into()))
}
