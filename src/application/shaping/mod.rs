//! Response shapers: primary-source JSON in, stable output entities out.
//!
//! Each shaper reads a fixed container path of the upstream document. When
//! the container is absent or empty it returns `Ok(None)`, which the services
//! report as "no data" rather than as a shaping failure.

mod ergast;
mod races;
mod roster;
mod standings;

pub use races::shape_races;
pub use roster::{shape_constructors, shape_drivers};
pub use standings::{shape_constructor_standings, shape_driver_standings};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// The upstream document had the expected container but records of an unexpected shape.
#[derive(Debug, Error)]
#[error("unexpected upstream schema at {path}: {source}")]
pub struct ShapeError {
    pub path: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Returns the array at `pointer` if it exists and has at least one element.
fn non_empty_array<'a>(payload: &'a Value, pointer: &str) -> Option<&'a Value> {
    payload
        .pointer(pointer)
        .filter(|v| v.as_array().is_some_and(|items| !items.is_empty()))
}

/// Deserializes the records of a located container.
fn decode<'a, T: Deserialize<'a>>(value: &'a Value, path: &'static str) -> Result<T, ShapeError> {
    T::deserialize(value).map_err(|source| ShapeError { path, source })
}

/// Reads a string field of a table header, ignoring blanks.
fn table_field(payload: &Value, pointer: &str) -> Option<String> {
    payload
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
