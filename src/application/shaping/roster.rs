//! Driver and constructor list shaping.

use serde_json::Value;

use super::ergast::{RawConstructor, RawDriver};
use super::{ShapeError, decode, non_empty_array, table_field};
use crate::domain::entities::{Constructor, Driver, Roster};

const DRIVERS: &str = "/MRData/DriverTable/Drivers";
const DRIVER_SEASON: &str = "/MRData/DriverTable/season";
const CONSTRUCTORS: &str = "/MRData/ConstructorTable/Constructors";
const CONSTRUCTOR_SEASON: &str = "/MRData/ConstructorTable/season";

/// Shapes `MRData.DriverTable.Drivers`.
///
/// The roster season is the table's `season`, or `fallback_season` when the
/// upstream leaves it out.
///
/// # Errors
///
/// Returns [`ShapeError`] if the driver records cannot be decoded.
pub fn shape_drivers(
    payload: &Value,
    fallback_season: &str,
) -> Result<Option<Roster<Driver>>, ShapeError> {
    let Some(container) = non_empty_array(payload, DRIVERS) else {
        return Ok(None);
    };

    let raw: Vec<RawDriver> = decode(container, DRIVERS)?;

    Ok(Some(Roster {
        season: table_field(payload, DRIVER_SEASON).unwrap_or_else(|| fallback_season.to_string()),
        entries: raw.into_iter().map(Driver::from).collect(),
    }))
}

/// Shapes `MRData.ConstructorTable.Constructors`.
///
/// # Errors
///
/// Returns [`ShapeError`] if the constructor records cannot be decoded.
pub fn shape_constructors(
    payload: &Value,
    fallback_season: &str,
) -> Result<Option<Roster<Constructor>>, ShapeError> {
    let Some(container) = non_empty_array(payload, CONSTRUCTORS) else {
        return Ok(None);
    };

    let raw: Vec<RawConstructor> = decode(container, CONSTRUCTORS)?;

    Ok(Some(Roster {
        season: table_field(payload, CONSTRUCTOR_SEASON)
            .unwrap_or_else(|| fallback_season.to_string()),
        entries: raw.into_iter().map(Constructor::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_drivers() {
        let payload = json!({
            "MRData": {
                "DriverTable": {
                    "season": "2024",
                    "Drivers": [
                        {
                            "driverId": "max_verstappen",
                            "permanentNumber": "33",
                            "code": "VER",
                            "url": "http://en.wikipedia.org/wiki/Max_Verstappen",
                            "givenName": "Max",
                            "familyName": "Verstappen",
                            "dateOfBirth": "1997-09-30",
                            "nationality": "Dutch"
                        },
                        {
                            "driverId": "bearman",
                            "givenName": "Oliver",
                            "familyName": "Bearman",
                            "nationality": "British"
                        }
                    ]
                }
            }
        });

        let roster = shape_drivers(&payload, "current").unwrap().unwrap();

        assert_eq!(roster.season, "2024");
        assert_eq!(roster.total(), 2);
        assert_eq!(roster.entries[0].permanent_number.as_deref(), Some("33"));
        assert_eq!(roster.entries[0].code.as_deref(), Some("VER"));
        assert!(roster.entries[1].permanent_number.is_none());
        assert!(roster.entries[1].code.is_none());
        assert!(roster.entries[1].date_of_birth.is_none());
    }

    #[test]
    fn test_season_falls_back_to_requested_token() {
        let payload = json!({
            "MRData": { "DriverTable": { "Drivers": [{ "driverId": "hamilton" }] } }
        });

        let roster = shape_drivers(&payload, "2020").unwrap().unwrap();
        assert_eq!(roster.season, "2020");
        assert_eq!(roster.entries[0].driver_id, "hamilton");
        assert_eq!(roster.entries[0].given_name, "");
    }

    #[test]
    fn test_shape_constructors() {
        let payload = json!({
            "MRData": {
                "ConstructorTable": {
                    "season": "1958",
                    "Constructors": [
                        {
                            "constructorId": "vanwall",
                            "url": "http://en.wikipedia.org/wiki/Vanwall",
                            "name": "Vanwall",
                            "nationality": "British"
                        },
                        { "constructorId": "cooper", "name": "Cooper", "nationality": null }
                    ]
                }
            }
        });

        let roster = shape_constructors(&payload, "1958").unwrap().unwrap();

        assert_eq!(roster.total(), 2);
        assert_eq!(roster.entries[0].name, "Vanwall");
        assert!(roster.entries[1].url.is_none());
        assert!(roster.entries[1].nationality.is_none());
    }

    #[test]
    fn test_empty_tables_are_no_data() {
        let drivers = json!({ "MRData": { "DriverTable": { "season": "2030", "Drivers": [] } } });
        let constructors = json!({ "MRData": { "ConstructorTable": { "season": "2030" } } });

        assert!(shape_drivers(&drivers, "2030").unwrap().is_none());
        assert!(shape_constructors(&constructors, "2030").unwrap().is_none());
    }
}
