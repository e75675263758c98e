//! API route configuration.

use crate::api::handlers::{
    api_not_found_handler, calendar_handler, constructor_standings_handler, constructors_handler,
    driver_standings_handler, drivers_handler, health_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes. Public and read-only.
///
/// # Endpoints
///
/// - `GET /health`                        - Liveness
/// - `GET /calendar/{year}`               - Season calendar (two sources)
/// - `GET /drivers/{year}`                - Season drivers
/// - `GET /constructors/{year}`           - Season constructors
/// - `GET /standings/drivers/{year}`      - Drivers' championship
/// - `GET /standings/constructors/{year}` - Constructors' championship
///
/// Anything else under the prefix answers a JSON 404.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/calendar/{year}", get(calendar_handler))
        .route("/drivers/{year}", get(drivers_handler))
        .route("/constructors/{year}", get(constructors_handler))
        .route("/standings/drivers/{year}", get(driver_standings_handler))
        .route(
            "/standings/constructors/{year}",
            get(constructor_standings_handler),
        )
        .fallback(api_not_found_handler)
}
