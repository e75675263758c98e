//! Raw schema of the historical-results (Ergast-compatible) API.
//!
//! Every field declares its default for "missing or null": identity fields
//! fall back to an empty string through `DefaultOnNull`, optional fields map
//! missing, `null` and `""` to `None` through `NoneAsEmptyString`.

use serde::Deserialize;
use serde_with::{DefaultOnNull, NoneAsEmptyString, serde_as};

use crate::domain::entities::{
    Circuit, Constructor, ConstructorStanding, Driver, DriverStanding, Location, Race, SessionTime,
    Sessions,
};

#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawRace {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    season: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    round: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    url: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "raceName")]
    race_name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    date: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    time: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "Circuit")]
    circuit: RawCircuit,
    #[serde(default, rename = "FirstPractice")]
    first_practice: Option<RawSession>,
    #[serde(default, rename = "SecondPractice")]
    second_practice: Option<RawSession>,
    #[serde(default, rename = "ThirdPractice")]
    third_practice: Option<RawSession>,
    #[serde(default, rename = "Qualifying")]
    qualifying: Option<RawSession>,
    #[serde(default, rename = "Sprint")]
    sprint: Option<RawSession>,
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
struct RawCircuit {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "circuitId")]
    circuit_id: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    url: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "circuitName")]
    circuit_name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "Location")]
    location: RawLocation,
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
struct RawLocation {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    lat: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    long: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    locality: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    country: Option<String>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
struct RawSession {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    date: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    time: Option<String>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawDriver {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "driverId")]
    driver_id: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "permanentNumber")]
    permanent_number: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    code: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    url: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "givenName")]
    given_name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "familyName")]
    family_name: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "dateOfBirth")]
    date_of_birth: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    nationality: Option<String>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawConstructor {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "constructorId")]
    constructor_id: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    url: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    name: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    nationality: Option<String>,
}

/// Header of a `StandingsLists` element; the entries are read separately.
#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawStandingsHeader {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub season: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub round: Option<String>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawDriverStanding {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    position: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "positionText")]
    position_text: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    points: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    wins: String,
    #[serde(rename = "Driver")]
    driver: RawDriver,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "Constructors")]
    constructors: Vec<RawConstructor>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawConstructorStanding {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    position: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "positionText")]
    position_text: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    points: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    wins: String,
    #[serde(rename = "Constructor")]
    constructor: RawConstructor,
}

impl From<RawSession> for SessionTime {
    fn from(raw: RawSession) -> Self {
        SessionTime {
            date: raw.date,
            time: raw.time,
        }
    }
}

impl From<RawRace> for Race {
    fn from(raw: RawRace) -> Self {
        Race {
            season: raw.season,
            round: raw.round,
            url: raw.url,
            race_name: raw.race_name,
            date: raw.date,
            time: raw.time,
            circuit: Circuit {
                circuit_id: raw.circuit.circuit_id,
                url: raw.circuit.url,
                circuit_name: raw.circuit.circuit_name,
                location: Location {
                    lat: raw.circuit.location.lat,
                    long: raw.circuit.location.long,
                    locality: raw.circuit.location.locality,
                    country: raw.circuit.location.country,
                },
            },
            sessions: Sessions {
                first_practice: raw.first_practice.map(Into::into),
                second_practice: raw.second_practice.map(Into::into),
                third_practice: raw.third_practice.map(Into::into),
                qualifying: raw.qualifying.map(Into::into),
                sprint: raw.sprint.map(Into::into),
            },
        }
    }
}

impl From<RawDriver> for Driver {
    fn from(raw: RawDriver) -> Self {
        Driver {
            driver_id: raw.driver_id,
            permanent_number: raw.permanent_number,
            code: raw.code,
            url: raw.url,
            given_name: raw.given_name,
            family_name: raw.family_name,
            date_of_birth: raw.date_of_birth,
            nationality: raw.nationality,
        }
    }
}

impl From<RawConstructor> for Constructor {
    fn from(raw: RawConstructor) -> Self {
        Constructor {
            constructor_id: raw.constructor_id,
            url: raw.url,
            name: raw.name,
            nationality: raw.nationality,
        }
    }
}

impl From<RawDriverStanding> for DriverStanding {
    fn from(raw: RawDriverStanding) -> Self {
        DriverStanding {
            position: raw.position,
            position_text: raw.position_text,
            points: raw.points,
            wins: raw.wins,
            driver: raw.driver.into(),
            constructors: raw.constructors.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<RawConstructorStanding> for ConstructorStanding {
    fn from(raw: RawConstructorStanding) -> Self {
        ConstructorStanding {
            position: raw.position,
            position_text: raw.position_text,
            points: raw.points,
            wins: raw.wins,
            constructor: raw.constructor.into(),
        }
    }
}
