//! Handler for the season calendar.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::calendar::CalendarResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the race calendar of a season, enriched with live-timing meetings
/// for recent seasons.
///
/// # Endpoint
///
/// `GET /api/calendar/{year}`
///
/// `year` is `current` or a four-digit season.
///
/// # Response
///
/// ```json
/// {
///   "calendar": {
///     "requestedYear": "2024",
///     "totalRaces": 1,
///     "races": [{ "round": "1", "raceName": "Bahrain Grand Prix", "...": "..." }]
///   },
///   "supplementalPayload": [{ "meeting_key": 1229, "...": "..." }],
///   "sources": {
///     "primary": "https://ergast.com/api/f1/2024.json",
///     "optional": "https://api.openf1.org/v1/meetings?year=2024"
///   }
/// }
/// ```
///
/// `supplementalPayload` is `null` for seasons before 2023 or when the
/// live-timing source fails; that failure never fails this endpoint.
///
/// # Errors
///
/// - 400 for an invalid year
/// - the upstream's status when the historical source answers non-2xx
/// - 500 when the historical source is unreachable or unreadable
/// - 404 when the season has no races
pub async fn calendar_handler(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<CalendarResponse>, AppError> {
    let result = state.calendar_service.calendar(&year).await?;

    Ok(Json(result.into()))
}
