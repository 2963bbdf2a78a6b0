// SPDX-License-Identifier: MIT

//! Services module - Steam Web API access and image resolution.

pub mod images;
pub mod steam;

pub use images::ImageFetcher;
pub use steam::{normalize_activity, normalize_summary, SteamClient};
