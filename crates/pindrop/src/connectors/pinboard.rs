//! Live Pinboard source downloading the full export over the v1 API.

use crate::config::PinboardConfig;
use crate::connectors::common::{create_http_client, handle_http_error};
use crate::connectors::{Pin, PinSource};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Pin source backed by the Pinboard API.
pub struct PinboardSource {
    config: PinboardConfig,
    client: Client,
}

impl PinboardSource {
    /// Creates a new Pinboard source.
    #[must_use]
    pub fn new(config: PinboardConfig) -> Self {
        Self {
            config,
            client: create_http_client(),
        }
    }

    /// Builds the full-export URL.
    fn build_export_url(&self) -> String {
        format!("{}/posts/all", self.config.url.trim_end_matches('/'))
    }
}

#[async_trait]
impl PinSource for PinboardSource {
    fn source_type(&self) -> &'static str {
        "pinboard"
    }

    async fn fetch_pins(&self) -> Result<Vec<Pin>> {
        let response = self
            .client
            .get(self.build_export_url())
            .query(&[
                ("auth_token", self.config.token.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| Error::SourceFetch(format!("Pinboard request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(handle_http_error(
                status,
                &body,
                "Pinboard",
                Error::SourceFetch,
            ));
        }

        response
            .json()
            .await
            .map_err(|e| Error::InvalidExport(format!("Failed to parse pin export: {}", e)))
    }
}

#[cfg(test)]
#[path = "pinboard_tests.rs"]
mod tests;
