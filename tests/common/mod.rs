#![allow(dead_code)]

use httpmock::MockServer;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use f1_season_proxy::domain::FixedClock;
use f1_season_proxy::domain::endpoints::UpstreamEndpoints;
use f1_season_proxy::infrastructure::upstream::HttpUpstreamClient;
use f1_season_proxy::state::AppState;

/// Year the injected clock reports; valid tokens run 1950..=2027.
pub const CURRENT_YEAR: i32 = 2026;

/// Upper bound on the live-timing fetch in tests.
pub const OPTIONAL_TIMEOUT: Duration = Duration::from_millis(300);

pub const PRIMARY_PREFIX: &str = "/api/f1";
pub const OPTIONAL_PREFIX: &str = "/v1";

/// Builds state backed by the real HTTP client, pointed at two mock servers.
pub fn create_test_state(primary: &MockServer, optional: &MockServer) -> AppState {
    create_state_with_primary(&primary.url(PRIMARY_PREFIX), optional)
}

/// Same as [`create_test_state`], with an arbitrary mandatory-source base URL.
pub fn create_state_with_primary(primary_base: &str, optional: &MockServer) -> AppState {
    let upstream = HttpUpstreamClient::new().unwrap();
    let endpoints = UpstreamEndpoints::new(primary_base, optional.url(OPTIONAL_PREFIX));

    AppState::new(
        Arc::new(upstream),
        Arc::new(FixedClock::at_year(CURRENT_YEAR)),
        endpoints,
        OPTIONAL_TIMEOUT,
    )
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/public")
}

pub fn primary_path(rest: &str) -> String {
    format!("{}/{}", PRIMARY_PREFIX, rest)
}

pub fn bahrain_2024() -> Value {
    json!({
        "season": "2024",
        "round": "1",
        "url": "https://en.wikipedia.org/wiki/2024_Bahrain_Grand_Prix",
        "raceName": "Bahrain Grand Prix",
        "Circuit": {
            "circuitId": "bahrain",
            "url": "https://en.wikipedia.org/wiki/Bahrain_International_Circuit",
            "circuitName": "Bahrain International Circuit",
            "Location": {
                "lat": "26.0325",
                "long": "50.5106",
                "locality": "Sakhir",
                "country": "Bahrain"
            }
        },
        "date": "2024-03-02",
        "time": "15:00:00Z",
        "FirstPractice": { "date": "2024-02-29", "time": "11:30:00Z" },
        "SecondPractice": { "date": "2024-02-29", "time": "15:00:00Z" },
        "ThirdPractice": { "date": "2024-03-01", "time": "12:30:00Z" },
        "Qualifying": { "date": "2024-03-01", "time": "16:00:00Z" }
    })
}

pub fn season_payload(season: &str, races: Vec<Value>) -> Value {
    json!({
        "MRData": {
            "series": "f1",
            "RaceTable": { "season": season, "Races": races }
        }
    })
}

pub fn drivers_payload(season: &str, drivers: Vec<Value>) -> Value {
    json!({
        "MRData": {
            "DriverTable": { "season": season, "Drivers": drivers }
        }
    })
}

pub fn constructors_payload(season: &str, constructors: Vec<Value>) -> Value {
    json!({
        "MRData": {
            "ConstructorTable": { "season": season, "Constructors": constructors }
        }
    })
}

pub fn standings_payload(lists: Vec<Value>) -> Value {
    json!({
        "MRData": {
            "StandingsTable": { "season": "2023", "StandingsLists": lists }
        }
    })
}

pub fn verstappen() -> Value {
    json!({
        "driverId": "max_verstappen",
        "permanentNumber": "33",
        "code": "VER",
        "url": "http://en.wikipedia.org/wiki/Max_Verstappen",
        "givenName": "Max",
        "familyName": "Verstappen",
        "dateOfBirth": "1997-09-30",
        "nationality": "Dutch"
    })
}

pub fn red_bull() -> Value {
    json!({
        "constructorId": "red_bull",
        "url": "http://en.wikipedia.org/wiki/Red_Bull_Racing",
        "name": "Red Bull",
        "nationality": "Austrian"
    })
}
