//! Season calendar aggregation.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use super::no_data;
use crate::application::shaping::shape_races;
use crate::domain::endpoints::UpstreamEndpoints;
use crate::domain::entities::{CalendarResult, Sources};
use crate::domain::{Clock, UpstreamClient, UpstreamError, validate_year};
use crate::error::AppError;

/// Upper bound on the live-timing fetch unless configured otherwise.
pub const DEFAULT_OPTIONAL_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds season calendars from two sources.
///
/// The historical-results source is mandatory: its failure fails the request.
/// The live-timing source is optional: it is only queried for seasons it
/// covers, and any failure there degrades the response to
/// `supplemental: None` instead of failing it.
pub struct CalendarService<U: UpstreamClient> {
    upstream: Arc<U>,
    clock: Arc<dyn Clock>,
    endpoints: UpstreamEndpoints,
    optional_timeout: Duration,
}

impl<U: UpstreamClient> CalendarService<U> {
    /// Creates a new calendar service.
    pub fn new(upstream: Arc<U>, clock: Arc<dyn Clock>, endpoints: UpstreamEndpoints) -> Self {
        Self {
            upstream,
            clock,
            endpoints,
            optional_timeout: DEFAULT_OPTIONAL_TIMEOUT,
        }
    }

    /// Bounds how long the live-timing fetch may delay a response.
    pub fn with_optional_timeout(mut self, timeout: Duration) -> Self {
        self.optional_timeout = timeout;
        self
    }

    /// Returns the calendar for a year token.
    ///
    /// # Flow
    ///
    /// 1. Validate the token against the current year
    /// 2. Fetch the season from the mandatory source
    /// 3. Resolve `current` to the clock's year
    /// 4. If the resolved year is covered by live timing, fetch its meetings
    ///    (failures are logged and discarded)
    /// 5. Shape the mandatory payload into races
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for an invalid token
    /// - [`AppError::Upstream`] mirroring a non-2xx mandatory response
    /// - [`AppError::Internal`] for transport, parse or schema failures
    /// - [`AppError::NotFound`] when the season has no races
    pub async fn calendar(&self, token: &str) -> Result<CalendarResult, AppError> {
        let current_year = self.clock.current_year();
        let year = validate_year(token, current_year)?;

        let primary_url = self.endpoints.season(year);
        let payload = self.upstream.fetch_json(&primary_url).await?;

        let resolved = year.resolve(current_year);
        let (supplemental, optional_url) = if year.has_live_timing(current_year) {
            let url = self.endpoints.meetings(resolved);
            let supplemental = match self.fetch_meetings(&url).await {
                Ok(meetings) => Some(meetings),
                Err(e) => {
                    warn!("Live-timing source unavailable for {}: {}", resolved, e);
                    None
                }
            };
            (supplemental, Some(url))
        } else {
            debug!("Skipping live-timing source for {}", resolved);
            (None, None)
        };

        let races = shape_races(&payload)?.ok_or_else(|| no_data("race", token))?;

        Ok(CalendarResult {
            requested_year: token.to_string(),
            races,
            supplemental,
            sources: Sources {
                primary: primary_url,
                optional: optional_url,
            },
        })
    }

    /// Fetches the live-timing meetings document within the optional timeout.
    async fn fetch_meetings(&self, url: &str) -> Result<Value, UpstreamError> {
        match tokio::time::timeout(self.optional_timeout, self.upstream.fetch_json(url)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Transport(format!(
                "timed out after {}ms",
                self.optional_timeout.as_millis()
            ))),
        }
    }
}
