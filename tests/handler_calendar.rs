mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use httpmock::prelude::*;
use serde_json::{Value, json};
use std::time::Duration;
use f1_season_proxy::api::handlers::calendar_handler;

fn app(primary: &MockServer, optional: &MockServer) -> TestServer {
    let state = common::create_test_state(primary, optional);
    let app = Router::new()
        .route("/api/calendar/{year}", get(calendar_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_calendar_merges_live_timing_meetings() {
    let primary = MockServer::start_async().await;
    let optional = MockServer::start_async().await;

    let season = primary
        .mock_async(|when, then| {
            when.method(GET).path(common::primary_path("2024.json"));
            then.status(200)
                .json_body(common::season_payload("2024", vec![common::bahrain_2024()]));
        })
        .await;
    let meetings = optional
        .mock_async(|when, then| {
            when.method(GET).path("/v1/meetings").query_param("year", "2024");
            then.status(200).json_body(json!([
                { "meeting_key": 1229, "meeting_name": "Bahrain Grand Prix", "year": 2024 }
            ]));
        })
        .await;

    let server = app(&primary, &optional);
    let response = server.get("/api/calendar/2024").await;

    response.assert_status_ok();
    season.assert_async().await;
    meetings.assert_async().await;

    let json = response.json::<Value>();
    assert_eq!(json["calendar"]["requestedYear"], "2024");
    assert_eq!(json["calendar"]["totalRaces"], 1);

    let race = &json["calendar"]["races"][0];
    assert_eq!(race["raceName"], "Bahrain Grand Prix");
    assert_eq!(race["round"], "1");
    assert_eq!(race["time"], "15:00:00Z");
    assert_eq!(race["circuit"]["circuitId"], "bahrain");
    assert_eq!(race["circuit"]["location"]["country"], "Bahrain");
    assert_eq!(
        race["sessions"]["qualifying"],
        json!({ "date": "2024-03-01", "time": "16:00:00Z" })
    );
    assert!(race["sessions"]["sprint"].is_null());

    assert_eq!(json["supplementalPayload"][0]["meeting_key"], 1229);
    assert_eq!(
        json["sources"]["primary"],
        primary.url("/api/f1/2024.json")
    );
    assert_eq!(
        json["sources"]["optional"],
        optional.url("/v1/meetings?year=2024")
    );
}

#[tokio::test]
async fn test_calendar_before_2023_never_calls_live_timing() {
    let primary = MockServer::start_async().await;
    let optional = MockServer::start_async().await;

    primary
        .mock_async(|when, then| {
            when.method(GET).path(common::primary_path("2019.json"));
            then.status(200).json_body(common::season_payload(
                "2019",
                vec![json!({
                    "season": "2019",
                    "round": "1",
                    "raceName": "Australian Grand Prix",
                    "date": "2019-03-17",
                    "Circuit": { "circuitId": "albert_park", "circuitName": "Albert Park Grand Prix Circuit" }
                })],
            ));
        })
        .await;
    let meetings = optional
        .mock_async(|when, then| {
            when.path("/v1/meetings");
            then.status(200).json_body(json!([]));
        })
        .await;

    let server = app(&primary, &optional);
    let response = server.get("/api/calendar/2019").await;

    response.assert_status_ok();
    meetings.assert_hits_async(0).await;

    let json = response.json::<Value>();
    assert_eq!(json["calendar"]["totalRaces"], 1);
    assert!(json["supplementalPayload"].is_null());
    assert!(json["sources"]["optional"].is_null());

    // Historical rounds carry no session schedule.
    let race = &json["calendar"]["races"][0];
    assert!(race["time"].is_null());
    assert!(race["sessions"]["firstPractice"].is_null());
}

#[tokio::test]
async fn test_calendar_survives_live_timing_error() {
    let primary = MockServer::start_async().await;
    let optional = MockServer::start_async().await;

    primary
        .mock_async(|when, then| {
            when.path(common::primary_path("2024.json"));
            then.status(200)
                .json_body(common::season_payload("2024", vec![common::bahrain_2024()]));
        })
        .await;
    let meetings = optional
        .mock_async(|when, then| {
            when.path("/v1/meetings");
            then.status(500).body("boom");
        })
        .await;

    let server = app(&primary, &optional);
    let response = server.get("/api/calendar/2024").await;

    response.assert_status_ok();
    meetings.assert_async().await;

    let json = response.json::<Value>();
    assert_eq!(json["calendar"]["totalRaces"], 1);
    assert!(json["supplementalPayload"].is_null());
    assert!(json["sources"]["optional"].is_string());
}

#[tokio::test]
async fn test_calendar_does_not_wait_for_slow_live_timing() {
    let primary = MockServer::start_async().await;
    let optional = MockServer::start_async().await;

    primary
        .mock_async(|when, then| {
            when.path(common::primary_path("2025.json"));
            then.status(200).json_body(common::season_payload(
                "2025",
                vec![json!({
                    "season": "2025",
                    "round": "1",
                    "raceName": "Australian Grand Prix",
                    "date": "2025-03-16",
                    "Circuit": { "circuitId": "albert_park", "circuitName": "Albert Park Grand Prix Circuit" }
                })],
            ));
        })
        .await;
    optional
        .mock_async(|when, then| {
            when.path("/v1/meetings");
            then.status(200)
                .delay(common::OPTIONAL_TIMEOUT + Duration::from_secs(2))
                .json_body(json!([]));
        })
        .await;

    let server = app(&primary, &optional);
    let response = server.get("/api/calendar/2025").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["calendar"]["races"][0]["raceName"], "Australian Grand Prix");
    assert!(json["supplementalPayload"].is_null());
}

#[tokio::test]
async fn test_calendar_current_token() {
    let primary = MockServer::start_async().await;
    let optional = MockServer::start_async().await;

    primary
        .mock_async(|when, then| {
            when.path(common::primary_path("current.json"));
            then.status(200)
                .json_body(common::season_payload("2026", vec![common::bahrain_2024()]));
        })
        .await;
    let meetings = optional
        .mock_async(|when, then| {
            when.path("/v1/meetings").query_param("year", "2026");
            then.status(200).json_body(json!([]));
        })
        .await;

    let server = app(&primary, &optional);
    let response = server.get("/api/calendar/current").await;

    response.assert_status_ok();
    meetings.assert_async().await;
    assert_eq!(response.json::<Value>()["calendar"]["requestedYear"], "current");
}

#[tokio::test]
async fn test_calendar_mirrors_mandatory_status() {
    let primary = MockServer::start_async().await;
    let optional = MockServer::start_async().await;

    primary
        .mock_async(|when, then| {
            when.path(common::primary_path("2024.json"));
            then.status(404).body("not found");
        })
        .await;
    let meetings = optional
        .mock_async(|when, then| {
            when.path("/v1/meetings");
            then.status(200).json_body(json!([]));
        })
        .await;

    let server = app(&primary, &optional);
    let response = server.get("/api/calendar/2024").await;

    response.assert_status_not_found();
    meetings.assert_hits_async(0).await;

    let json = response.json::<Value>();
    assert_eq!(json["error"], "Failed to fetch data from upstream API");
    assert_eq!(json["upstreamStatus"], 404);
}

#[tokio::test]
async fn test_calendar_mandatory_outage_is_mirrored() {
    let primary = MockServer::start_async().await;
    let optional = MockServer::start_async().await;

    primary
        .mock_async(|when, then| {
            when.path(common::primary_path("2010.json"));
            then.status(503);
        })
        .await;

    let server = app(&primary, &optional);
    let response = server.get("/api/calendar/2010").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_calendar_invalid_json_is_internal_error() {
    let primary = MockServer::start_async().await;
    let optional = MockServer::start_async().await;

    primary
        .mock_async(|when, then| {
            when.path(common::primary_path("2010.json"));
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let server = app(&primary, &optional);
    let response = server.get("/api/calendar/2010").await;

    response.assert_status_internal_server_error();
    let json = response.json::<Value>();
    assert_eq!(json["error"], "Internal server error while fetching data");
    assert!(json["details"].is_string());
}

#[tokio::test]
async fn test_calendar_empty_season_is_not_found() {
    let primary = MockServer::start_async().await;
    let optional = MockServer::start_async().await;

    primary
        .mock_async(|when, then| {
            when.path(common::primary_path("1955.json"));
            then.status(200).json_body(common::season_payload("1955", vec![]));
        })
        .await;

    let server = app(&primary, &optional);
    let response = server.get("/api/calendar/1955").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"], "No race data found for year 1955.");
    assert_eq!(json["year"], "1955");
}

#[tokio::test]
async fn test_calendar_rejects_out_of_range_year() {
    let primary = MockServer::start_async().await;
    let optional = MockServer::start_async().await;

    let any = primary
        .mock_async(|when, then| {
            when.any_request();
            then.status(200).json_body(json!({}));
        })
        .await;

    let server = app(&primary, &optional);
    let response = server.get("/api/calendar/1949").await;

    response.assert_status_bad_request();
    any.assert_hits_async(0).await;
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Year must be between 1950 and 2027." })
    );
}

#[tokio::test]
async fn test_calendar_rejects_malformed_year() {
    let primary = MockServer::start_async().await;
    let optional = MockServer::start_async().await;

    let server = app(&primary, &optional);

    for token in ["24", "20245", "next", "20a4"] {
        let response = server.get(&format!("/api/calendar/{}", token)).await;
        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>()["error"],
            "Invalid year format. Use 'current' or a 4-digit year (e.g. 2024)."
        );
    }
}
