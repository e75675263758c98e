//! reqwest-backed upstream client.

use crate::domain::{UpstreamClient, UpstreamError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Upstream client performing plain JSON GETs.
///
/// The underlying `reqwest::Client` pools connections and is cheap to clone,
/// so a single instance is shared by all requests. No timeout is configured
/// beyond reqwest's defaults; the calendar service bounds the optional source
/// on its own.
#[derive(Clone)]
pub struct HttpUpstreamClient {
    client: reqwest::Client,
}

impl HttpUpstreamClient {
    /// Builds a client sending `Accept: application/json` and a service `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn fetch_json(&self, url: &str) -> Result<Value, UpstreamError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Upstream request to {} failed: {}", url, e);
            UpstreamError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream {} responded with {}", url, status);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            warn!("Upstream {} returned an unreadable body: {}", url, e);
            UpstreamError::Transport(e.to_string())
        })
    }
}
