// SPDX-License-Identifier: MIT

//! Durable credential storage.
//!
//! The store round-trips a [`CredentialRecord`] through a single JSON file.
//! Reads are self-healing: anything unreadable falls back to an empty record
//! and the file is recreated so later writes succeed. Writes overwrite the
//! whole file in one pass; there is no merge and no atomic rename.

use crate::error::{AppError, Result};
use crate::models::CredentialRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Credential file handle.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the credential record from disk.
    ///
    /// A missing file, malformed JSON, or a file missing the expected fields
    /// (including the legacy `steam_ids` shape) all resolve to an empty
    /// record. The file is recreated, creating parent directories as needed,
    /// so the caller can save without further setup. Never errors.
    pub fn load(&self) -> CredentialRecord {
        match self.try_read() {
            Ok(record) => {
                tracing::info!(path = %self.path.display(), "Loaded credential data");
                record
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Couldn't read credential data, starting empty"
                );
                if let Err(e) = self.recreate_empty() {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "Failed to recreate credential file"
                    );
                }
                CredentialRecord::default()
            }
        }
    }

    /// Serialize the whole record to the data file, overwriting any
    /// existing content.
    pub fn save(&self, record: &CredentialRecord) -> Result<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| AppError::StorageWriteFailed(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| AppError::StorageWriteFailed(e.to_string()))?;
        tracing::info!(path = %self.path.display(), "Saved credential data");
        Ok(())
    }

    fn try_read(&self) -> Result<CredentialRecord> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| AppError::StorageUnreadable(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| AppError::StorageUnreadable(e.to_string()))
    }

    /// Leave an empty file behind so the next save has a writable target.
    fn recreate_empty(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AppError::StorageWriteFailed(e.to_string()))?;
            }
        }
        fs::write(&self.path, "").map_err(|e| AppError::StorageWriteFailed(e.to_string()))?;
        tracing::info!(path = %self.path.display(), "Created credential file");
        Ok(())
    }
}
