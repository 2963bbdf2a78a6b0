// SPDX-License-Identifier: MIT

//! Credential model: the API key plus a bounded most-recently-used history
//! of previously looked-up Steam IDs.

use serde::{Deserialize, Serialize};

/// Maximum number of history entries kept in a credential record.
pub const HISTORY_CAP: usize = 10;

/// One previously looked-up user in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    /// Steam ID as entered (0-17 characters, matched exactly)
    pub steam_id: String,
    /// Display name at the time of the lookup
    pub username: String,
}

/// Durable credential state, round-tripped through the JSON data file.
///
/// Deserialization is strict: a file missing either field (including the
/// legacy `steam_ids` array-of-strings shape) fails to parse and triggers
/// the store's empty-record fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Steam Web API key (0-32 characters, opaque)
    pub api_key: String,
    /// History, insertion order = most-recently-used order, capped at 10
    pub user_data: Vec<UserEntry>,
}

impl CredentialRecord {
    /// Record a successful lookup, returning the updated record.
    ///
    /// A known `steam_id` leaves the history untouched, including its stored
    /// username. At the cap the last entry is evicted before appending, so
    /// the result never exceeds [`HISTORY_CAP`] entries.
    pub fn remember(&self, steam_id: &str, username: &str) -> CredentialRecord {
        let mut updated = self.clone();
        if updated.user_data.iter().any(|e| e.steam_id == steam_id) {
            return updated;
        }
        if updated.user_data.len() >= HISTORY_CAP {
            updated.user_data.pop();
        }
        updated.user_data.push(UserEntry {
            steam_id: steam_id.to_string(),
            username: username.to_string(),
        });
        updated
    }

    /// Stored display name for `steam_id`, or the empty string if unknown.
    pub fn lookup_username(&self, steam_id: &str) -> &str {
        self.user_data
            .iter()
            .find(|e| e.steam_id == steam_id)
            .map(|e| e.username.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(ids: &[(&str, &str)]) -> CredentialRecord {
        CredentialRecord {
            api_key: "KEY".to_string(),
            user_data: ids
                .iter()
                .map(|(id, name)| UserEntry {
                    steam_id: id.to_string(),
                    username: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_remember_appends_new_id() {
        let record = record_with(&[("76561198000000001", "alice")]);
        let updated = record.remember("76561198000000002", "bob");

        assert_eq!(updated.user_data.len(), 2);
        assert_eq!(updated.user_data[1].steam_id, "76561198000000002");
        assert_eq!(updated.user_data[1].username, "bob");
    }

    #[test]
    fn test_lookup_username_absent_is_empty() {
        let record = record_with(&[("1", "alice")]);
        assert_eq!(record.lookup_username("2"), "");
        assert_eq!(record.lookup_username("1"), "alice");
    }

    #[test]
    fn test_id_match_is_case_sensitive() {
        let record = record_with(&[("abcDEF", "alice")]);
        let updated = record.remember("ABCdef", "bob");
        assert_eq!(updated.user_data.len(), 2);
    }
}
