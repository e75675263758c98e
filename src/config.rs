//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export PRIMARY_API_URL="https://ergast.com/api/f1"
//! export OPTIONAL_API_URL="https://api.openf1.org/v1"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PRIMARY_API_URL` - Historical-results API base (default: `https://ergast.com/api/f1`)
//! - `OPTIONAL_API_URL` - Live-timing API base (default: `https://api.openf1.org/v1`)
//! - `OPTIONAL_SOURCE_TIMEOUT_MS` - Bound on the live-timing fetch (default: 5000, max: 60000)
//! - `STATIC_DIR` - Front-end directory (default: `public`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::domain::endpoints::{DEFAULT_OPTIONAL_API_URL, DEFAULT_PRIMARY_API_URL};

const MAX_OPTIONAL_TIMEOUT_MS: u64 = 60_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL of the mandatory historical-results source.
    pub primary_api_url: String,
    /// Base URL of the optional live-timing source.
    pub optional_api_url: String,
    /// How long a calendar request may wait for the live-timing source.
    pub optional_source_timeout_ms: u64,
    /// Directory served for every non-API path.
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let primary_api_url =
            env::var("PRIMARY_API_URL").unwrap_or_else(|_| DEFAULT_PRIMARY_API_URL.to_string());
        let optional_api_url =
            env::var("OPTIONAL_API_URL").unwrap_or_else(|_| DEFAULT_OPTIONAL_API_URL.to_string());

        let optional_source_timeout_ms = match env::var("OPTIONAL_SOURCE_TIMEOUT_MS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("OPTIONAL_SOURCE_TIMEOUT_MS must be a number, got '{}'", v))?,
            Err(_) => 5_000,
        };

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            primary_api_url,
            optional_api_url,
            optional_source_timeout_ms,
            static_dir,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - an upstream base URL is not an absolute http(s) URL
    /// - the optional source timeout is 0 or above 60 seconds
    /// - `static_dir` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        validate_base_url("PRIMARY_API_URL", &self.primary_api_url)?;
        validate_base_url("OPTIONAL_API_URL", &self.optional_api_url)?;

        if self.optional_source_timeout_ms == 0
            || self.optional_source_timeout_ms > MAX_OPTIONAL_TIMEOUT_MS
        {
            anyhow::bail!(
                "OPTIONAL_SOURCE_TIMEOUT_MS must be between 1 and {}, got {}",
                MAX_OPTIONAL_TIMEOUT_MS,
                self.optional_source_timeout_ms
            );
        }

        if self.static_dir.trim().is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        Ok(())
    }

    pub fn optional_source_timeout(&self) -> Duration {
        Duration::from_millis(self.optional_source_timeout_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Primary source: {}", self.primary_api_url);
        tracing::info!(
            "  Optional source: {} (timeout {}ms)",
            self.optional_api_url,
            self.optional_source_timeout_ms
        );
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn validate_base_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL: '{}'", name, value))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{} must use http or https, got '{}'", name, value);
    }

    if url.query().is_some() {
        anyhow::bail!("{} must not carry a query string, got '{}'", name, value);
    }

    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
