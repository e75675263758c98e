//! DTO for health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness response. Upstreams are not probed.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}
