//! DTO shared by both standings endpoints.

use serde::Serialize;

use crate::domain::entities::Standings;

/// Response of `GET /api/standings/{drivers|constructors}/{year}`.
#[derive(Debug, Serialize)]
pub struct StandingsResponse<T> {
    pub season: String,
    pub round: Option<String>,
    pub standings: Vec<T>,
}

impl<T> From<Standings<T>> for StandingsResponse<T> {
    fn from(table: Standings<T>) -> Self {
        Self {
            season: table.season,
            round: table.round,
            standings: table.entries,
        }
    }
}
