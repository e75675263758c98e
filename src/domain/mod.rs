//! Domain layer: season entities, year rules and the upstream/clock seams.
//!
//! # Architecture
//!
//! - [`entities`] - Output schema for races, drivers, constructors and standings
//! - [`year`] - Year token validation and live-timing gating
//! - [`upstream`] - [`upstream::UpstreamClient`] trait and failure classification
//! - [`clock`] - Injected time source
//! - [`endpoints`] - Upstream URL layout
//!
//! The domain layer has no dependency on HTTP frameworks; concrete clients
//! live in [`crate::infrastructure`].

pub mod clock;
pub mod endpoints;
pub mod entities;
pub mod upstream;
pub mod year;

pub use clock::{Clock, FixedClock, SystemClock};
pub use upstream::{UpstreamClient, UpstreamError};
pub use year::{YearError, YearToken, validate_year};

#[cfg(test)]
pub use upstream::MockUpstreamClient;
