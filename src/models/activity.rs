// SPDX-License-Identifier: MIT

//! Recently-played-games wire shapes and the flat display record built
//! from them.

use serde::{Deserialize, Serialize};

/// Base URL for game icon images; the full URL is derived per game from the
/// app ID and the icon hash returned by the API.
pub const ICON_BASE_URL: &str =
    "http://media.steampowered.com/steamcommunity/public/images/apps";

/// Raw `IPlayerService.GetRecentlyPlayedGames` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawActivityResponse {
    pub response: RawActivityBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawActivityBody {
    #[serde(default)]
    pub total_count: u32,
    /// Absent entirely for profiles with no recent activity.
    #[serde(default)]
    pub games: Vec<RawGame>,
}

/// One game entry as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGame {
    pub appid: u64,
    pub name: String,
    pub img_icon_url: String,
    #[serde(default)]
    pub playtime_2weeks: u64,
    #[serde(default)]
    pub playtime_forever: u64,
}

/// Normalized row of recent activity for a single game.
///
/// Rebuilt fresh on every fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRecord {
    pub app_id: u64,
    pub title: String,
    /// Derived icon URL; resolving it to bytes is the image fetcher's job.
    pub icon_url: String,
    pub minutes_last_period: u64,
    pub minutes_lifetime: u64,
}

impl ActivityRecord {
    pub fn from_raw(game: &RawGame) -> Self {
        Self {
            app_id: game.appid,
            title: game.name.clone(),
            icon_url: icon_url(game.appid, &game.img_icon_url),
            minutes_last_period: game.playtime_2weeks,
            minutes_lifetime: game.playtime_forever,
        }
    }

    /// Playtime over the last two weeks, render-ready.
    pub fn format_last_period(&self) -> String {
        format_minutes(self.minutes_last_period)
    }

    /// Lifetime playtime, render-ready.
    pub fn format_lifetime(&self) -> String {
        format_minutes(self.minutes_lifetime)
    }
}

/// Build the icon URL for a game from its app ID and icon hash.
pub fn icon_url(app_id: u64, icon_hash: &str) -> String {
    format!("{}/{}/{}.jpg", ICON_BASE_URL, app_id, icon_hash)
}

/// Render minutes as `"{hours:>4}h {minutes:02}min"`, e.g. `"   2h 05min"`.
///
/// The exact column layout is what the frontend lines rows up on.
pub fn format_minutes(minutes: u64) -> String {
    format!("{:4}h {:02}min", minutes / 60, minutes % 60)
}

/// Sum of last-period minutes across all records; 0 for an empty list.
pub fn total_minutes_last_period(records: &[ActivityRecord]) -> u64 {
    records.iter().map(|r| r.minutes_last_period).sum()
}
