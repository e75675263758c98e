//! Championship standings shaping.
//!
//! A year query returns a list of standings lists; only the first one is used.

use serde::Deserialize;
use serde_json::Value;

use super::ergast::{RawConstructorStanding, RawDriverStanding, RawStandingsHeader};
use super::{ShapeError, decode, non_empty_array};
use crate::domain::entities::{ConstructorStanding, DriverStanding, Standings};

const STANDINGS_LISTS: &str = "/MRData/StandingsTable/StandingsLists";
const DRIVER_STANDINGS: &str = "/MRData/StandingsTable/StandingsLists/0/DriverStandings";
const CONSTRUCTOR_STANDINGS: &str =
    "/MRData/StandingsTable/StandingsLists/0/ConstructorStandings";

/// Shapes the first list's `DriverStandings`.
///
/// # Errors
///
/// Returns [`ShapeError`] if the list header or its entries cannot be decoded.
pub fn shape_driver_standings(
    payload: &Value,
    fallback_season: &str,
) -> Result<Option<Standings<DriverStanding>>, ShapeError> {
    shape_first_list::<RawDriverStanding, DriverStanding>(payload, DRIVER_STANDINGS, fallback_season)
}

/// Shapes the first list's `ConstructorStandings`.
///
/// # Errors
///
/// Returns [`ShapeError`] if the list header or its entries cannot be decoded.
pub fn shape_constructor_standings(
    payload: &Value,
    fallback_season: &str,
) -> Result<Option<Standings<ConstructorStanding>>, ShapeError> {
    shape_first_list::<RawConstructorStanding, ConstructorStanding>(
        payload,
        CONSTRUCTOR_STANDINGS,
        fallback_season,
    )
}

fn shape_first_list<'a, R, T>(
    payload: &'a Value,
    entries_path: &'static str,
    fallback_season: &str,
) -> Result<Option<Standings<T>>, ShapeError>
where
    R: Deserialize<'a>,
    T: From<R>,
{
    let Some(lists) = non_empty_array(payload, STANDINGS_LISTS) else {
        return Ok(None);
    };
    let Some(entries) = non_empty_array(payload, entries_path) else {
        return Ok(None);
    };

    let header: RawStandingsHeader = decode(&lists[0], STANDINGS_LISTS)?;
    let raw: Vec<R> = decode(entries, entries_path)?;

    Ok(Some(Standings {
        season: header
            .season
            .unwrap_or_else(|| fallback_season.to_string()),
        round: header.round,
        entries: raw.into_iter().map(T::from).collect(),
    }))
}
