//! Application layer: response shaping and request orchestration.
//!
//! Services consume the [`crate::domain::UpstreamClient`] trait and give HTTP
//! handlers (and the `f1ctl` CLI) a typed API.
//!
//! # Modules
//!
//! - [`shaping`] - Upstream JSON to output entities
//! - [`services::calendar_service::CalendarService`] - Dual-source calendar aggregation
//! - [`services::season_service::SeasonService`] - Drivers, constructors and standings

pub mod services;
pub mod shaping;
