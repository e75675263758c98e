//! URL layout of the two upstream providers.

use super::year::YearToken;

/// Default base of the historical-results (Ergast-compatible) API.
pub const DEFAULT_PRIMARY_API_URL: &str = "https://ergast.com/api/f1";

/// Default base of the live-timing (OpenF1) API.
pub const DEFAULT_OPTIONAL_API_URL: &str = "https://api.openf1.org/v1";

/// Per-season collections served by the primary provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonResource {
    Drivers,
    Constructors,
    DriverStandings,
    ConstructorStandings,
}

impl SeasonResource {
    fn path_segment(self) -> &'static str {
        match self {
            SeasonResource::Drivers => "drivers",
            SeasonResource::Constructors => "constructors",
            SeasonResource::DriverStandings => "driverStandings",
            SeasonResource::ConstructorStandings => "constructorStandings",
        }
    }
}

/// Builds upstream request URLs from configured base URLs.
///
/// ```
/// use f1_season_proxy::domain::endpoints::{SeasonResource, UpstreamEndpoints};
/// use f1_season_proxy::domain::YearToken;
///
/// let endpoints = UpstreamEndpoints::new("https://ergast.com/api/f1/", "https://api.openf1.org/v1");
///
/// assert_eq!(
///     endpoints.season(YearToken::Season(2024)),
///     "https://ergast.com/api/f1/2024.json"
/// );
/// assert_eq!(
///     endpoints.season_resource(YearToken::Current, SeasonResource::DriverStandings),
///     "https://ergast.com/api/f1/current/driverStandings.json"
/// );
/// assert_eq!(endpoints.meetings(2024), "https://api.openf1.org/v1/meetings?year=2024");
/// ```
#[derive(Debug, Clone)]
pub struct UpstreamEndpoints {
    primary_base: String,
    optional_base: String,
}

impl UpstreamEndpoints {
    pub fn new(primary_base: impl Into<String>, optional_base: impl Into<String>) -> Self {
        Self {
            primary_base: primary_base.into().trim_end_matches('/').to_string(),
            optional_base: optional_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Season schedule on the primary provider. The token is passed through,
    /// so `current` stays symbolic and the upstream resolves it.
    pub fn season(&self, year: YearToken) -> String {
        format!("{}/{}.json", self.primary_base, year)
    }

    pub fn season_resource(&self, year: YearToken, resource: SeasonResource) -> String {
        format!(
            "{}/{}/{}.json",
            self.primary_base,
            year,
            resource.path_segment()
        )
    }

    /// Meetings of a resolved season on the live-timing provider.
    pub fn meetings(&self, resolved_year: i32) -> String {
        format!("{}/meetings?year={}", self.optional_base, resolved_year)
    }
}

impl Default for UpstreamEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_API_URL, DEFAULT_OPTIONAL_API_URL)
    }
}
