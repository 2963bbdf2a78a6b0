// SPDX-License-Identifier: MIT

//! Response-shaping tests: status mapping, minute formatting, and the
//! normalization of both Steam Web API responses.

use serde_json::json;
use steam_profile_client::models::{
    format_minutes, icon_url, total_minutes_last_period, PersonaState, RawActivityResponse,
    RawSummaryResponse,
};
use steam_profile_client::services::{normalize_activity, normalize_summary};

fn activity_response(body: serde_json::Value) -> RawActivityResponse {
    serde_json::from_value(json!({ "response": body })).expect("valid activity fixture")
}

fn summary_response(players: serde_json::Value) -> RawSummaryResponse {
    serde_json::from_value(json!({ "response": { "players": players } }))
        .expect("valid summary fixture")
}

#[test]
fn test_minute_formatting_calibration() {
    assert_eq!(format_minutes(0), "   0h 00min");
    assert_eq!(format_minutes(125), "   2h 05min");
    assert_eq!(format_minutes(4321), "  72h 01min");
}

#[test]
fn test_status_mapping_table() {
    assert_eq!(PersonaState::from_code(0), PersonaState::Offline);
    assert_eq!(PersonaState::from_code(1), PersonaState::Online);
    assert_eq!(PersonaState::from_code(2), PersonaState::Busy);
    assert_eq!(PersonaState::from_code(3), PersonaState::Away);
    assert_eq!(PersonaState::from_code(4), PersonaState::Snooze);
    assert_eq!(PersonaState::from_code(5), PersonaState::LookingToTrade);
    assert_eq!(PersonaState::from_code(6), PersonaState::LookingToPlay);
    assert_eq!(PersonaState::from_code(99), PersonaState::Unknown);
    assert_eq!(PersonaState::from_code(-1), PersonaState::Unknown);

    assert_eq!(PersonaState::from_code(1).to_string(), "Online");
    assert_eq!(PersonaState::from_code(99).to_string(), "Unknown");
    assert_eq!(PersonaState::from_code(5).to_string(), "Looking to Trade");
}

#[test]
fn test_normalize_activity_empty_is_not_an_error() {
    let raw = activity_response(json!({ "total_count": 0 }));
    let records = normalize_activity(&raw);
    assert!(records.is_empty());
}

#[test]
fn test_normalize_activity_preserves_source_order() {
    let raw = activity_response(json!({
        "total_count": 3,
        "games": [
            { "appid": 730, "name": "Counter-Strike 2", "img_icon_url": "hashA",
              "playtime_2weeks": 125, "playtime_forever": 4321 },
            { "appid": 440, "name": "Team Fortress 2", "img_icon_url": "hashB",
              "playtime_2weeks": 30, "playtime_forever": 999 },
            { "appid": 570, "name": "Dota 2", "img_icon_url": "hashC",
              "playtime_forever": 1 },
        ]
    }));

    let records = normalize_activity(&raw);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "Counter-Strike 2");
    assert_eq!(records[1].title, "Team Fortress 2");
    assert_eq!(records[2].title, "Dota 2");

    // Missing playtime_2weeks defaults to zero, not an error
    assert_eq!(records[2].minutes_last_period, 0);

    assert_eq!(
        records[0].icon_url,
        "http://media.steampowered.com/steamcommunity/public/images/apps/730/hashA.jpg"
    );
    assert_eq!(records[0].format_last_period(), "   2h 05min");
    assert_eq!(records[0].format_lifetime(), "  72h 01min");
}

#[test]
fn test_total_minutes_last_period() {
    let raw = activity_response(json!({
        "total_count": 2,
        "games": [
            { "appid": 1, "name": "A", "img_icon_url": "h1",
              "playtime_2weeks": 125, "playtime_forever": 200 },
            { "appid": 2, "name": "B", "img_icon_url": "h2",
              "playtime_2weeks": 30, "playtime_forever": 40 },
        ]
    }));

    let records = normalize_activity(&raw);
    let total = total_minutes_last_period(&records);
    assert_eq!(total, 155);
    assert_eq!(format_minutes(total), "   2h 35min");

    assert_eq!(total_minutes_last_period(&[]), 0);
}

#[test]
fn test_icon_url_construction() {
    assert_eq!(
        icon_url(4000, "abc123"),
        "http://media.steampowered.com/steamcommunity/public/images/apps/4000/abc123.jpg"
    );
}

#[test]
fn test_normalize_summary_online_shows_now() {
    let raw = summary_response(json!([{
        "personaname": "gabe",
        "personastate": 1,
        "lastlogoff": 1_700_000_000i64,
        "avatar": "https://avatars.example/abc.jpg"
    }]));

    let summary = normalize_summary(&raw).expect("summary should normalize");
    assert_eq!(summary.display_name, "gabe");
    assert_eq!(summary.status, PersonaState::Online);
    assert_eq!(summary.last_seen, "Now");
    assert_eq!(summary.avatar_url, "https://avatars.example/abc.jpg");
}

#[test]
fn test_normalize_summary_offline_formats_last_logoff() {
    let raw = summary_response(json!([{
        "personaname": "gabe",
        "personastate": 0,
        "lastlogoff": 1_700_000_000i64,
        "avatar": ""
    }]));

    let summary = normalize_summary(&raw).expect("summary should normalize");
    assert_eq!(summary.status, PersonaState::Offline);
    // Local-time rendering; check the shape rather than the exact instant
    assert_ne!(summary.last_seen, "Now");
    assert_eq!(summary.last_seen.len(), "14.11.2023 22:13".len());
}

#[test]
fn test_normalize_summary_missing_lastlogoff() {
    let raw = summary_response(json!([{
        "personaname": "hidden",
        "personastate": 3,
        "avatar": ""
    }]));

    let summary = normalize_summary(&raw).expect("summary should normalize");
    assert_eq!(summary.status, PersonaState::Away);
    assert_eq!(summary.last_seen, "Unknown");
}

#[test]
fn test_normalize_summary_without_players_is_malformed() {
    let raw = summary_response(json!([]));
    let err = normalize_summary(&raw).expect_err("empty players must fail");
    assert!(err.is_profile_unavailable(), "unexpected error: {}", err);

    // A response body with no players key at all behaves the same
    let raw: RawSummaryResponse =
        serde_json::from_value(json!({ "response": {} })).expect("body without players parses");
    let err = normalize_summary(&raw).expect_err("missing players must fail");
    assert!(err.is_profile_unavailable());
}
