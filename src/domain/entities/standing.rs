//! Championship standings entities.

use serde::Serialize;

use super::{Constructor, Driver};

/// One classification table: the standings after `round` of `season`.
#[derive(Debug, Clone, PartialEq)]
pub struct Standings<T> {
    pub season: String,
    pub round: Option<String>,
    pub entries: Vec<T>,
}

/// A row of the drivers' championship.
///
/// `position` is absent for drivers excluded from the classification;
/// `position_text` then carries the upstream's marker (e.g. `"D"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStanding {
    pub position: Option<String>,
    pub position_text: Option<String>,
    pub points: String,
    pub wins: String,
    pub driver: Driver,
    pub constructors: Vec<Constructor>,
}

/// A row of the constructors' championship.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorStanding {
    pub position: Option<String>,
    pub position_text: Option<String>,
    pub points: String,
    pub wins: String,
    pub constructor: Constructor,
}
