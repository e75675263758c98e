//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`upstream`] - reqwest implementation of [`crate::domain::UpstreamClient`]

pub mod upstream;
