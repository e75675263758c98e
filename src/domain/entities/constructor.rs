//! Constructor (team) entity.

use serde::Serialize;

/// A team entered in a season.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    pub constructor_id: String,
    pub url: Option<String>,
    pub name: String,
    pub nationality: Option<String>,
}
