// SPDX-License-Identifier: MIT

//! Steam Web API client and response normalization.
//!
//! Two query operations, each a single request/response round-trip:
//! - `IPlayerService.GetRecentlyPlayedGames` (recent activity)
//! - `ISteamUser.GetPlayerSummaries` (profile summary)
//!
//! Neither call is retried; the frontend requires an explicit re-submit.

use crate::error::{AppError, Result};
use crate::models::{
    ActivityRecord, PersonaState, ProfileSummary, RawActivityResponse, RawSummaryResponse,
};
use crate::time_utils::format_last_logoff;
use serde::Deserialize;
use std::time::Duration;

/// Number of recently played games requested per query.
const RECENT_GAMES_COUNT: u32 = 50;

/// Steam Web API client.
#[derive(Clone)]
pub struct SteamClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl SteamClient {
    /// Create a new client for the given API key.
    ///
    /// The per-request deadline covers the whole round-trip; an expired
    /// deadline surfaces as [`AppError::ServiceUnavailable`].
    pub fn new(api_key: String, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://api.steampowered.com".to_string(),
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Fetch the recently played games for a user.
    pub async fn get_recently_played_games(
        &self,
        steam_id: &str,
    ) -> Result<RawActivityResponse> {
        let url = format!(
            "{}/IPlayerService/GetRecentlyPlayedGames/v1/",
            self.base_url
        );
        let count = RECENT_GAMES_COUNT.to_string();
        self.get_json(
            &url,
            &[
                ("key", self.api_key.as_str()),
                ("steamid", steam_id),
                ("count", count.as_str()),
                ("format", "json"),
            ],
        )
        .await
    }

    /// Fetch the profile summary for a user.
    pub async fn get_player_summaries(&self, steam_id: &str) -> Result<RawSummaryResponse> {
        let url = format!("{}/ISteamUser/GetPlayerSummaries/v2/", self.base_url);
        self.get_json(
            &url,
            &[
                ("key", self.api_key.as_str()),
                ("steamids", steam_id),
                ("format", "json"),
            ],
        )
        .await
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self
            .http
            .get(url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::ServiceUnavailable {
                status: e.status().map(|s| s.as_u16()),
                message: e.to_string(),
            })?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            // 401/403 is what a wrong key or a private profile produces
            if status.as_u16() == 401 || status.as_u16() == 403 {
                tracing::warn!(status = %status, "Steam API denied access");
            }

            return Err(AppError::ServiceUnavailable {
                status: Some(status.as_u16()),
                message: if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    format!("HTTP {}: {}", status, body)
                },
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ServiceUnavailable {
                status: None,
                message: format!("JSON parse error: {}", e),
            })
    }
}

/// Normalize a raw activity response into one record per game.
///
/// Source order is preserved and an empty games list yields an empty vec,
/// not an error; the frontend renders a "No Games Found" placeholder.
pub fn normalize_activity(raw: &RawActivityResponse) -> Vec<ActivityRecord> {
    raw.response
        .games
        .iter()
        .map(ActivityRecord::from_raw)
        .collect()
}

/// Normalize a raw summary response into a profile record.
///
/// Fails with [`AppError::MalformedResponse`] when the player entry is
/// absent, which is what a private or nonexistent profile looks like.
pub fn normalize_summary(raw: &RawSummaryResponse) -> Result<ProfileSummary> {
    let player = raw
        .response
        .players
        .first()
        .ok_or_else(|| AppError::MalformedResponse("no player entry in response".to_string()))?;

    let status = PersonaState::from_code(player.personastate);
    let last_seen = if status == PersonaState::Online {
        "Now".to_string()
    } else {
        match player.lastlogoff {
            Some(ts) => format_last_logoff(ts),
            None => "Unknown".to_string(),
        }
    };

    Ok(ProfileSummary {
        display_name: player.personaname.clone(),
        status,
        last_seen,
        avatar_url: player.avatar.clone(),
    })
}
