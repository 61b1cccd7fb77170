//! Raindrop.io REST client.
//!
//! Wraps the two calls the migration makes: listing collections, used to
//! resolve the target collection names to ids, and bulk raindrop creation.

use crate::config::RaindropConfig;
use crate::connectors::common::{create_http_client, handle_http_error};
use crate::error::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// A bookmark in Raindrop's creation-API shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Raindrop {
    /// Bookmarked URL.
    pub link: String,
    /// Title text.
    pub title: String,
    /// Free-text note.
    pub note: String,
    /// Creation timestamp.
    pub created: String,
    /// Last-update timestamp. Pinboard keeps a single timestamp, so this
    /// always equals `created`.
    pub last_update: String,
    /// Tags, in source order.
    pub tags: Vec<String>,
    /// Target collection. When absent the raindrop lands in Unsorted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<CollectionRef>,
}

/// Reference to a collection by id, serialized as `{"$id": ...}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CollectionRef {
    /// Raindrop collection id.
    #[serde(rename = "$id")]
    pub id: i64,
}

/// A collection as returned by the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    /// Collection id. Raindrop's system collections use negative ids.
    #[serde(rename = "_id")]
    pub id: i64,
    /// Collection title.
    pub title: String,
}

/// The pair of collection ids converted records are filed under.
#[derive(Debug, Clone, Copy)]
pub struct CollectionTargets {
    /// Collection for pins shared publicly.
    pub public: i64,
    /// Collection for private pins.
    pub private: i64,
}

/// Response shape of `GET /collections`.
#[derive(Debug, Deserialize)]
struct CollectionsResponse {
    result: bool,
    #[serde(default)]
    items: Vec<Collection>,
}

/// Request body of `POST /raindrops`.
#[derive(Debug, Serialize)]
struct CreateRequest<'a> {
    items: &'a [Raindrop],
}

/// Raindrop API client.
pub struct RaindropClient {
    config: RaindropConfig,
    client: Client,
}

impl RaindropClient {
    /// Creates a new client.
    #[must_use]
    pub fn new(config: RaindropConfig) -> Self {
        Self {
            config,
            client: create_http_client(),
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.url.trim_end_matches('/'), endpoint)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.config.token)
    }

    /// Lists the account's root collections.
    ///
    /// Raindrop answers `{"result": false}` for an account with no
    /// collections; that is an empty listing, not an error.
    pub async fn collections(&self) -> Result<Vec<Collection>> {
        let response = self
            .client
            .get(self.build_url("collections"))
            .header("Authorization", self.bearer())
            .send()
            .await
            .map_err(|e| Error::CollectionFetch(format!("Raindrop request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(handle_http_error(
                status,
                &body,
                "Raindrop",
                Error::CollectionFetch,
            ));
        }

        let listing: CollectionsResponse = response.json().await.map_err(|e| {
            Error::CollectionFetch(format!("Failed to parse collection listing: {}", e))
        })?;

        if !listing.result {
            return Ok(Vec::new());
        }
        Ok(listing.items)
    }

    /// Resolves the configured collection names against the live listing.
    pub async fn find_collections(&self) -> Result<(Option<i64>, Option<i64>)> {
        let collections = self.collections().await?;
        Ok(resolve_collections(
            &collections,
            &self.config.public,
            &self.config.private,
        ))
    }

    /// Uploads one batch of raindrops.
    ///
    /// The endpoint caps batches at 100 items; callers chunk before
    /// calling. Previously sent batches are not rolled back when this
    /// fails.
    pub async fn create_raindrops(&self, items: &[Raindrop]) -> Result<()> {
        let response = self
            .client
            .post(self.build_url("raindrops"))
            .header("Authorization", self.bearer())
            .json(&CreateRequest { items })
            .send()
            .await
            .map_err(|e| Error::Upload(format!("Raindrop request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(handle_http_error(status, &body, "Raindrop", Error::Upload));
        }

        Ok(())
    }
}

/// Resolves the public and private collection names to ids.
///
/// A single pass over the listing builds a title-to-id map, then each name
/// is an independent lookup. Matching is exact and case-sensitive. When
/// two collections share a title the one listed later wins.
#[must_use]
pub fn resolve_collections(
    collections: &[Collection],
    public: &str,
    private: &str,
) -> (Option<i64>, Option<i64>) {
    let mut by_title: HashMap<&str, i64> = HashMap::new();
    for collection in collections {
        if let Some(previous) = by_title.insert(collection.title.as_str(), collection.id) {
            warn!(
                "Duplicate collection title '{}': using id {} instead of {}",
                collection.title, collection.id, previous
            );
        }
    }

    (
        by_title.get(public).copied(),
        by_title.get(private).copied(),
    )
}

#[cfg(test)]
#[path = "raindrop_tests.rs"]
mod tests;
