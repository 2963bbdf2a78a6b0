// SPDX-License-Identifier: MIT

//! Icon and avatar byte resolution.
//!
//! The fetcher only moves bytes; decoding is the display layer's concern.
//! A failed image is reported as `None` so one broken icon never aborts a
//! whole response view.

use crate::error::{AppError, Result};
use futures_util::future::join_all;
use std::time::Duration;

/// Image fetcher with a fixed per-request deadline.
#[derive(Clone)]
pub struct ImageFetcher {
    http: reqwest::Client,
    timeout: Duration,
}

impl ImageFetcher {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::new(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Fetch one image, returning its raw bytes.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::ImageUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::ImageUnavailable(format!(
                "HTTP {} for {}",
                response.status(),
                url
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::ImageUnavailable(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Fetch a batch of images in parallel.
    ///
    /// The output index matches the input index regardless of completion
    /// order; failures become `None` placeholders.
    pub async fn fetch_all(&self, urls: &[String]) -> Vec<Option<Vec<u8>>> {
        let futures = urls.iter().map(|url| async move {
            match self.fetch(url).await {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "Image fetch failed");
                    None
                }
            }
        });
        join_all(futures).await
    }
}
