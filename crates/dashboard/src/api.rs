//! HTTP bindings for the inventory API.

use async_trait::async_trait;

use stockscan_inventory::{InventoryItem, ScanRequest};

use crate::config::DashboardConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Operations the dashboard needs from the inventory API.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// `GET /items`
    async fn list_items(&self) -> Result<Vec<InventoryItem>, ApiError>;

    /// `POST /scan`. The response body is not used.
    async fn record_scan(&self, request: &ScanRequest) -> Result<(), ApiError>;
}

#[async_trait]
impl<T> InventoryApi for std::sync::Arc<T>
where
    T: InventoryApi + ?Sized,
{
    async fn list_items(&self) -> Result<Vec<InventoryItem>, ApiError> {
        (**self).list_items().await
    }

    async fn record_scan(&self, request: &ScanRequest) -> Result<(), ApiError> {
        (**self).record_scan(request).await
    }
}

/// [`InventoryApi`] over HTTP using `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    config: DashboardConfig,
    client: reqwest::Client,
}

impl HttpInventoryApi {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        Err(ApiError::Api(status, resp.text().await.unwrap_or_default()))
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn list_items(&self) -> Result<Vec<InventoryItem>, ApiError> {
        let url = self.config.endpoint("items");
        tracing::debug!(%url, "fetching inventory");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = Self::ensure_success(resp).await?;

        let body = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn record_scan(&self, request: &ScanRequest) -> Result<(), ApiError> {
        let url = self.config.endpoint("scan");
        tracing::debug!(%url, tag_id = %request.tag_id, action = %request.action, "posting scan");

        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::ensure_success(resp).await?;

        Ok(())
    }
}
