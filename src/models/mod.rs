// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod activity;
pub mod credentials;
pub mod profile;

pub use activity::{
    format_minutes, icon_url, total_minutes_last_period, ActivityRecord, RawActivityResponse,
    RawGame,
};
pub use credentials::{CredentialRecord, UserEntry, HISTORY_CAP};
pub use profile::{PersonaState, ProfileSummary, RawPlayer, RawSummaryResponse};
