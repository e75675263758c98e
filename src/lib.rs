//! # F1 Season Proxy
//!
//! A small Axum service that aggregates Formula 1 season data from public upstream APIs.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Season entities, year rules, upstream and clock traits
//! - **Application Layer** ([`application`]) - Calendar/season services and payload shaping
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest-backed upstream client
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Season calendar with every session time the results API publishes
//! - Live-timing meetings merged in for seasons from 2023 onward, best-effort
//! - Driver and constructor rosters, championship standings
//! - Upstream status codes mirrored to the client
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point at other upstreams
//! export PRIMARY_API_URL="https://ergast.com/api/f1"
//! export OPTIONAL_API_URL="https://api.openf1.org/v1"
//!
//! # Start the service
//! cargo run
//!
//! # Query it from the terminal
//! cargo run --bin f1ctl -- calendar 2024
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CalendarService, SeasonService};
    pub use crate::domain::endpoints::UpstreamEndpoints;
    pub use crate::domain::entities::{CalendarResult, Constructor, Driver, Race};
    pub use crate::domain::{Clock, FixedClock, SystemClock};
    pub use crate::error::AppError;
    pub use crate::infrastructure::upstream::HttpUpstreamClient;
    pub use crate::state::AppState;
}
