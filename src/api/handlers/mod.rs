//! HTTP request handlers for API endpoints.
//!
//! Handlers only translate between HTTP and the application services; year
//! validation and upstream access happen in the services.

pub mod calendar;
pub mod constructors;
pub mod drivers;
pub mod fallback;
pub mod health;
pub mod standings;

pub use calendar::calendar_handler;
pub use constructors::constructors_handler;
pub use drivers::drivers_handler;
pub use fallback::api_not_found_handler;
pub use health::health_handler;
pub use standings::{constructor_standings_handler, driver_standings_handler};
