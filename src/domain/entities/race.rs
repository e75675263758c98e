//! Race weekend entity.

use serde::Serialize;

/// One round of a season calendar.
///
/// Identity fields (`season`, `round`, `race_name`, `date`) are always present.
/// Everything the upstream may omit is an `Option` and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub season: String,
    pub round: String,
    pub url: Option<String>,
    pub race_name: String,
    pub date: String,
    pub time: Option<String>,
    pub circuit: Circuit,
    pub sessions: Sessions,
}

/// Track hosting a race.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    pub circuit_id: String,
    pub url: Option<String>,
    pub circuit_name: String,
    pub location: Location,
}

/// Geographic location of a circuit. Coordinates are kept as the upstream's decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat: Option<String>,
    pub long: Option<String>,
    pub locality: Option<String>,
    pub country: Option<String>,
}

/// Support sessions of a race weekend.
///
/// Historical seasons have no session schedule at all, and sprint weekends
/// replace third practice, so every slot is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sessions {
    pub first_practice: Option<SessionTime>,
    pub second_practice: Option<SessionTime>,
    pub third_practice: Option<SessionTime>,
    pub qualifying: Option<SessionTime>,
    pub sprint: Option<SessionTime>,
}

/// Scheduled start of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionTime {
    pub date: Option<String>,
    pub time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_sessions_serialize_as_null() {
        let json = serde_json::to_value(Sessions::default()).unwrap();

        assert_eq!(
            json,
            json!({
                "firstPractice": null,
                "secondPractice": null,
                "thirdPractice": null,
                "qualifying": null,
                "sprint": null
            })
        );
    }

    #[test]
    fn test_race_uses_camel_case_keys() {
        let race = Race {
            season: "2024".to_string(),
            round: "1".to_string(),
            url: None,
            race_name: "Bahrain Grand Prix".to_string(),
            date: "2024-03-02".to_string(),
            time: None,
            circuit: Circuit {
                circuit_id: "bahrain".to_string(),
                url: None,
                circuit_name: "Bahrain International Circuit".to_string(),
                location: Location {
                    lat: None,
                    long: None,
                    locality: Some("Sakhir".to_string()),
                    country: Some("Bahrain".to_string()),
                },
            },
            sessions: Sessions::default(),
        };

        let json = serde_json::to_value(&race).unwrap();

        assert_eq!(json["raceName"], "Bahrain Grand Prix");
        assert_eq!(json["circuit"]["circuitId"], "bahrain");
        assert_eq!(json["circuit"]["location"]["locality"], "Sakhir");
        assert!(json["time"].is_null());
        assert!(json.as_object().unwrap().contains_key("url"));
    }
}
