// SPDX-License-Identifier: MIT

//! Application error types.
//!
//! Nothing here is fatal to the process: storage read failures are absorbed
//! into the empty-record fallback, image failures degrade to a placeholder,
//! and the remaining variants are typed results the caller branches on.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Credential file could not be read or parsed. Produced internally by
    /// the store and recovered on the spot; `load` never returns it.
    #[error("Credential file unreadable: {0}")]
    StorageUnreadable(String),

    /// Credential file could not be written. Surfaced to the caller so a
    /// lost history write is never silent.
    #[error("Failed to write credential file: {0}")]
    StorageWriteFailed(String),

    /// Transport or HTTP-level failure of a Steam Web API query.
    #[error("Steam API unavailable{}: {message}", status_suffix(.status))]
    ServiceUnavailable {
        status: Option<u16>,
        message: String,
    },

    /// The response parsed but the expected player entry is missing,
    /// e.g. a private or nonexistent profile.
    #[error("Malformed Steam API response: {0}")]
    MalformedResponse(String),

    /// A single icon or avatar could not be fetched. Callers substitute a
    /// "no image" placeholder; this never aborts the overall fetch.
    #[error("Image unavailable: {0}")]
    ImageUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True when the error means the profile is private or does not exist,
    /// which the frontend maps to "return to the entry form".
    pub fn is_profile_unavailable(&self) -> bool {
        matches!(self, AppError::MalformedResponse(_))
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => String::new(),
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
