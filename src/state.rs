//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{CalendarService, SeasonService};
use crate::domain::Clock;
use crate::domain::endpoints::UpstreamEndpoints;
use crate::infrastructure::upstream::HttpUpstreamClient;

/// Immutable per-process state. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub calendar_service: Arc<CalendarService<HttpUpstreamClient>>,
    pub season_service: Arc<SeasonService<HttpUpstreamClient>>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wires both services around one shared upstream client and clock.
    pub fn new(
        upstream: Arc<HttpUpstreamClient>,
        clock: Arc<dyn Clock>,
        endpoints: UpstreamEndpoints,
        optional_timeout: Duration,
    ) -> Self {
        let calendar_service = CalendarService::new(upstream.clone(), clock.clone(), endpoints.clone())
            .with_optional_timeout(optional_timeout);
        let season_service = SeasonService::new(upstream, clock.clone(), endpoints);

        Self {
            calendar_service: Arc::new(calendar_service),
            season_service: Arc::new(season_service),
            clock,
        }
    }
}
