//! Season data entities produced by the response shapers.
//!
//! Entities are request-scoped values: they are built from one upstream
//! record, serialized into the response and dropped.
//!
//! # Entity Types
//!
//! - [`Race`] - A calendar round with its circuit and session schedule
//! - [`Driver`] / [`Constructor`] - Season entry lists, wrapped in [`Roster`]
//! - [`DriverStanding`] / [`ConstructorStanding`] - Championship tables
//! - [`CalendarResult`] - The aggregated calendar with its sources
//!
//! Optional upstream fields are `Option`s and serialize as `null`, so every
//! key of the output schema is always present.

pub mod calendar;
pub mod constructor;
pub mod driver;
pub mod race;
pub mod roster;
pub mod standing;

pub use calendar::{CalendarResult, Sources};
pub use constructor::Constructor;
pub use driver::Driver;
pub use race::{Circuit, Location, Race, SessionTime, Sessions};
pub use roster::Roster;
pub use standing::{ConstructorStanding, DriverStanding, Standings};
