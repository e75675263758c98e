//! DTOs for the calendar endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::{CalendarResult, Race, Sources};

/// Response of `GET /api/calendar/{year}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub calendar: CalendarBody,
    /// Live-timing meetings, or `null` when skipped or unavailable.
    pub supplemental_payload: Option<Value>,
    pub sources: Sources,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarBody {
    pub requested_year: String,
    pub total_races: usize,
    pub races: Vec<Race>,
}

impl From<CalendarResult> for CalendarResponse {
    fn from(result: CalendarResult) -> Self {
        let total_races = result.total_races();

        Self {
            calendar: CalendarBody {
                requested_year: result.requested_year,
                total_races,
                races: result.races,
            },
            supplemental_payload: result.supplemental,
            sources: result.sources,
        }
    }
}
