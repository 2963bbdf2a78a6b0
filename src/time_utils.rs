// SPDX-License-Identifier: MIT

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Local};

/// Format a unix last-logoff timestamp as local time, `DD.MM.YYYY HH:MM`.
///
/// An out-of-range timestamp renders as `"Unknown"` rather than failing the
/// whole summary.
pub fn format_last_logoff(unix_secs: i64) -> String {
    match DateTime::from_timestamp(unix_secs, 0) {
        Some(utc) => utc.with_timezone(&Local).format("%d.%m.%Y %H:%M").to_string(),
        None => "Unknown".to_string(),
    }
}
