//! DTOs for the drivers and constructors endpoints.

use serde::Serialize;

use crate::domain::entities::{Constructor, Driver, Roster};

/// Response of `GET /api/drivers/{year}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriversResponse {
    pub season: String,
    pub total_drivers: usize,
    pub drivers: Vec<Driver>,
}

impl From<Roster<Driver>> for DriversResponse {
    fn from(roster: Roster<Driver>) -> Self {
        Self {
            total_drivers: roster.total(),
            season: roster.season,
            drivers: roster.entries,
        }
    }
}

/// Response of `GET /api/constructors/{year}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorsResponse {
    pub season: String,
    pub total_constructors: usize,
    pub constructors: Vec<Constructor>,
}

impl From<Roster<Constructor>> for ConstructorsResponse {
    fn from(roster: Roster<Constructor>) -> Self {
        Self {
            total_constructors: roster.total(),
            season: roster.season,
            constructors: roster.entries,
        }
    }
}
