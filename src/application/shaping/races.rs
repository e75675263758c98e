//! Calendar shaping.

use serde_json::Value;

use super::ergast::RawRace;
use super::{ShapeError, decode, non_empty_array};
use crate::domain::entities::Race;

const RACES: &str = "/MRData/RaceTable/Races";

/// Shapes `MRData.RaceTable.Races` into [`Race`]s, preserving upstream order.
///
/// # Errors
///
/// Returns [`ShapeError`] if the race records cannot be decoded.
pub fn shape_races(payload: &Value) -> Result<Option<Vec<Race>>, ShapeError> {
    let Some(container) = non_empty_array(payload, RACES) else {
        return Ok(None);
    };

    let raw: Vec<RawRace> = decode(container, RACES)?;
    Ok(Some(raw.into_iter().map(Race::from).collect()))
}
