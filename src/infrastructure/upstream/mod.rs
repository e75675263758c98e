//! Outbound HTTP access to the season data providers.

mod http_client;

pub use http_client::HttpUpstreamClient;
