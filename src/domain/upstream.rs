//! Upstream data source abstraction.
//!
//! Services depend on [`UpstreamClient`] rather than on a concrete HTTP client,
//! so the aggregation rules can be exercised against mocks.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure of a single upstream call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The upstream answered with a non-success status.
    #[error("upstream responded with HTTP {status}")]
    Status { status: u16 },

    /// The request never produced a usable JSON body: DNS, connect, timeout,
    /// connection reset, or a body that is not valid JSON.
    #[error("upstream request failed: {0}")]
    Transport(String),
}

impl UpstreamError {
    /// Upstream status code, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status } => Some(*status),
            UpstreamError::Transport(_) => None,
        }
    }
}

/// Fetches JSON documents from upstream providers.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::HttpUpstreamClient`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Performs one GET against `url` and parses the body as JSON.
    ///
    /// No retries and no caching.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Status`] for non-2xx responses and
    /// [`UpstreamError::Transport`] for network or parse failures.
    async fn fetch_json(&self, url: &str) -> Result<Value, UpstreamError>;
}
