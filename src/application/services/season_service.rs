//! Single-source season resources: entry lists and championship standings.

use std::sync::Arc;

use serde_json::Value;

use super::no_data;
use crate::application::shaping::{
    shape_constructor_standings, shape_constructors, shape_driver_standings, shape_drivers,
};
use crate::domain::endpoints::{SeasonResource, UpstreamEndpoints};
use crate::domain::entities::{
    Constructor, ConstructorStanding, Driver, DriverStanding, Roster, Standings,
};
use crate::domain::{Clock, UpstreamClient, validate_year};
use crate::error::AppError;

/// Serves drivers, constructors and standings from the mandatory source.
///
/// Every operation follows the same steps: validate the year token, fetch one
/// document, shape it. Failures are classified exactly as for the calendar
/// (400 / mirrored upstream status / 500 / 404).
pub struct SeasonService<U: UpstreamClient> {
    upstream: Arc<U>,
    clock: Arc<dyn Clock>,
    endpoints: UpstreamEndpoints,
}

impl<U: UpstreamClient> SeasonService<U> {
    /// Creates a new season service.
    pub fn new(upstream: Arc<U>, clock: Arc<dyn Clock>, endpoints: UpstreamEndpoints) -> Self {
        Self {
            upstream,
            clock,
            endpoints,
        }
    }

    /// Drivers entered in a season.
    ///
    /// # Errors
    ///
    /// See [`SeasonService`] for the failure classification.
    pub async fn drivers(&self, token: &str) -> Result<Roster<Driver>, AppError> {
        let payload = self.fetch(token, SeasonResource::Drivers).await?;
        shape_drivers(&payload, token)?.ok_or_else(|| no_data("driver", token))
    }

    /// Constructors entered in a season.
    ///
    /// # Errors
    ///
    /// See [`SeasonService`] for the failure classification.
    pub async fn constructors(&self, token: &str) -> Result<Roster<Constructor>, AppError> {
        let payload = self.fetch(token, SeasonResource::Constructors).await?;
        shape_constructors(&payload, token)?.ok_or_else(|| no_data("constructor", token))
    }

    /// Latest drivers' championship table of a season.
    ///
    /// # Errors
    ///
    /// See [`SeasonService`] for the failure classification.
    pub async fn driver_standings(
        &self,
        token: &str,
    ) -> Result<Standings<DriverStanding>, AppError> {
        let payload = self.fetch(token, SeasonResource::DriverStandings).await?;
        shape_driver_standings(&payload, token)?
            .ok_or_else(|| no_data("driver standings", token))
    }

    /// Latest constructors' championship table of a season.
    ///
    /// # Errors
    ///
    /// See [`SeasonService`] for the failure classification.
    pub async fn constructor_standings(
        &self,
        token: &str,
    ) -> Result<Standings<ConstructorStanding>, AppError> {
        let payload = self
            .fetch(token, SeasonResource::ConstructorStandings)
            .await?;
        shape_constructor_standings(&payload, token)?
            .ok_or_else(|| no_data("constructor standings", token))
    }

    async fn fetch(&self, token: &str, resource: SeasonResource) -> Result<Value, AppError> {
        let year = validate_year(token, self.clock.current_year())?;
        let url = self.endpoints.season_resource(year, resource);
        Ok(self.upstream.fetch_json(&url).await?)
    }
}
