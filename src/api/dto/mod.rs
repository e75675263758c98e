//! Response bodies of the public API.
//!
//! All keys are camelCase and optional values are rendered as `null`.

pub mod calendar;
pub mod health;
pub mod season;
pub mod standings;
