//! Driver entity.

use serde::Serialize;

/// A driver entered in a season.
///
/// `permanent_number` and `code` only exist for drivers from 2014 onwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: String,
    pub permanent_number: Option<String>,
    pub code: Option<String>,
    pub url: Option<String>,
    pub given_name: String,
    pub family_name: String,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
}

impl Driver {
    /// "Given Family", used by the CLI listings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_and_null_fields() {
        let driver = Driver {
            driver_id: "fangio".to_string(),
            permanent_number: None,
            code: None,
            url: None,
            given_name: "Juan".to_string(),
            family_name: "Fangio".to_string(),
            date_of_birth: Some("1911-06-24".to_string()),
            nationality: Some("Argentine".to_string()),
        };

        assert_eq!(driver.full_name(), "Juan Fangio");

        let json = serde_json::to_value(&driver).unwrap();
        assert!(json["permanentNumber"].is_null());
        assert!(json["code"].is_null());
        assert_eq!(json["dateOfBirth"], "1911-06-24");
    }
}
