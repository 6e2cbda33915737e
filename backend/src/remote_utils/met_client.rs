//! HTTP client for the Metropolitan Museum collection API.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use common::{
    object_metadata::{ObjectId, ObjectMetadata},
    search_query::SearchQuery,
};
use serde::{Deserialize, de::DeserializeOwned};

use crate::remote_utils::remote_error::RemoteError;

/// The two remote lookups plus the best-effort image fetch.
#[async_trait]
pub trait CollectionApi: Send + Sync {
    /// Object ids matching `query`, in the order the API returned them.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<ObjectId>, RemoteError>;

    async fn get_object(&self, object_id: ObjectId) -> Result<ObjectMetadata, RemoteError>;

    /// Soft-fail: any failure yields `None`.
    async fn fetch_image_bytes(&self, url: &str) -> Option<Bytes>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "objectIDs", default)]
    object_ids: Option<Vec<ObjectId>>,
}

#[derive(Debug, Clone)]
pub struct MetClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("met-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build http client")?;
        let base_url: String = base_url.into();
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, params: &[(&str, &str)]) -> Result<T, RemoteError> {
        let t0 = std::time::Instant::now();
        let response = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| RemoteError::from_reqwest(url, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status { url: url.to_string(), status });
        }
        let response_txt = response.text().await.map_err(|e| RemoteError::from_reqwest(url, e))?;
        tracing::debug!("GET {} -> {} ({} bytes in {}ms)", url, status, response_txt.len(), t0.elapsed().as_millis());
        serde_json::from_str(&response_txt).map_err(|source| RemoteError::Decode { url: url.to_string(), source })
    }

    async fn _fetch_image_bytes(&self, url: &str) -> Result<Bytes, RemoteError> {
        let response = self.http.get(url).send().await.map_err(|e| RemoteError::from_reqwest(url, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status { url: url.to_string(), status });
        }
        response.bytes().await.map_err(|e| RemoteError::from_reqwest(url, e))
    }
}

#[async_trait]
impl CollectionApi for MetClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<ObjectId>, RemoteError> {
        let query_string = query.query_string.trim();
        if query_string.is_empty() {
            return Ok(Vec::new());
        }
        let url = format!("{}/search", self.base_url);
        let mut params = vec![("q", query_string)];
        if let Some(has_images) = query.image_filter.has_images_param() {
            params.push(("hasImages", has_images));
        }
        let response: SearchResponse = self.get_json(&url, &params).await?;
        Ok(response.object_ids.unwrap_or_default())
    }

    async fn get_object(&self, object_id: ObjectId) -> Result<ObjectMetadata, RemoteError> {
        let url = format!("{}/objects/{}", self.base_url, object_id);
        self.get_json(&url, &[]).await
    }

    async fn fetch_image_bytes(&self, url: &str) -> Option<Bytes> {
        match self._fetch_image_bytes(url).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::debug!("fetch_image_bytes: giving up on {}: {}", url, e);
                None
            }
        }
    }
}
