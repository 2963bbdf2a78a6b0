// SPDX-License-Identifier: MIT

//! Player summary wire shapes and the normalized profile record.

use serde::{Deserialize, Serialize};

/// Raw `ISteamUser.GetPlayerSummaries` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSummaryResponse {
    pub response: RawSummaryBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSummaryBody {
    /// Empty for private or nonexistent profiles.
    #[serde(default)]
    pub players: Vec<RawPlayer>,
}

/// One player entry as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayer {
    pub personaname: String,
    #[serde(default)]
    pub personastate: i64,
    /// Hidden for profiles that keep their status private.
    pub lastlogoff: Option<i64>,
    #[serde(default)]
    pub avatar: String,
}

/// Online status derived from the `personastate` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PersonaState {
    Offline,
    Online,
    Busy,
    Away,
    Snooze,
    LookingToTrade,
    LookingToPlay,
    Unknown,
}

impl PersonaState {
    /// Map a raw status code; unmapped codes are `Unknown`.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => PersonaState::Offline,
            1 => PersonaState::Online,
            2 => PersonaState::Busy,
            3 => PersonaState::Away,
            4 => PersonaState::Snooze,
            5 => PersonaState::LookingToTrade,
            6 => PersonaState::LookingToPlay,
            _ => PersonaState::Unknown,
        }
    }
}

impl std::fmt::Display for PersonaState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PersonaState::Offline => "Offline",
            PersonaState::Online => "Online",
            PersonaState::Busy => "Busy",
            PersonaState::Away => "Away",
            PersonaState::Snooze => "Snooze",
            PersonaState::LookingToTrade => "Looking to Trade",
            PersonaState::LookingToPlay => "Looking to Play",
            PersonaState::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Normalized profile summary for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub display_name: String,
    pub status: PersonaState,
    /// `"Now"` while online, otherwise the formatted last-logoff time.
    pub last_seen: String,
    /// Avatar URL taken verbatim from the response.
    pub avatar_url: String,
}
