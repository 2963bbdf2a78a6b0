// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Default location of the credential data file.
pub const DEFAULT_DATA_PATH: &str = "data/data.json";

/// Default per-request deadline for Steam API and image requests.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Steam Web API key; when unset, the key stored in the data file is used
    pub api_key: Option<String>,
    /// Path of the credential data file
    pub data_path: PathBuf,
    /// Per-request deadline in seconds
    pub request_timeout_secs: u64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_key: None,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; the API key can also come from the data
    /// file or the command line.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            api_key: env::var("STEAM_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            data_path: env::var("STEAM_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH)),
            request_timeout_secs: env::var("STEAM_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.data_path, PathBuf::from("data/data.json"));
        assert_eq!(config.request_timeout_secs, 10);
    }
}
