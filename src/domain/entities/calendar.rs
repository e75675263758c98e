//! Aggregated season calendar.

use serde::Serialize;
use serde_json::Value;

use super::Race;

/// Upstream URLs consulted while building a calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sources {
    pub primary: String,
    /// Set whenever the live-timing source was queried, even if it failed.
    pub optional: Option<String>,
}

/// Result of the calendar aggregation.
///
/// Races keep the mandatory source's round order. The race count is derived
/// from `races`, never stored separately.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarResult {
    pub requested_year: String,
    pub races: Vec<Race>,
    /// Raw live-timing meetings document, passed through untouched.
    pub supplemental: Option<Value>,
    pub sources: Sources,
}

impl CalendarResult {
    pub fn total_races(&self) -> usize {
        self.races.len()
    }
}
