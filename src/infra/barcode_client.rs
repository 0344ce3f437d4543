//! HTTP client for the SearchUPCData product lookup API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::config::{Config, BARCODE_API_TIMEOUT_SECONDS};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product information returned by a barcode lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BarcodeProduct {
    #[schema(example = "012345678905")]
    pub upc: String,
    /// Product name as reported by the API
    #[schema(example = "Cordless Drill")]
    pub description: String,
    pub brand: String,
    pub model: String,
    pub category: String,
}

/// Response body of `GET /products/{upc}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchUpcResponse {
    #[serde(default)]
    upc: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    brand: String,
    #[serde(default)]
    category: String,
}

impl From<SearchUpcResponse> for BarcodeProduct {
    fn from(resp: SearchUpcResponse) -> Self {
        Self {
            upc: resp.upc,
            description: resp.name,
            brand: resp.brand,
            model: String::new(),
            category: resp.category,
        }
    }
}

/// Barcode lookup abstraction for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BarcodeClient: Send + Sync {
    /// Look up a product by UPC
    async fn lookup(&self, upc: &str) -> AppResult<BarcodeProduct>;
}

/// Validate a UPC before it is placed in a URL path.
pub fn validate_upc(upc: &str) -> AppResult<&str> {
    let upc = upc.trim();
    if upc.is_empty() {
        return Err(AppError::validation("UPC is required"));
    }
    if upc.len() > 32 || !upc.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::validation("invalid UPC"));
    }
    Ok(upc)
}

/// reqwest-backed SearchUPCData client.
pub struct SearchUpcClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SearchUpcClient {
    /// Build a client from configuration. Lookups fail with an upstream
    /// error when no API key is configured.
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(BARCODE_API_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.barcode_api_url.trim_end_matches('/').to_string(),
            api_key: config.barcode_api_key().map(str::to_string),
        })
    }
}

#[async_trait]
impl BarcodeClient for SearchUpcClient {
    async fn lookup(&self, upc: &str) -> AppResult<BarcodeProduct> {
        let upc = validate_upc(upc)?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::upstream("barcode lookup is not configured"))?;

        let url = format!("{}/products/{}", self.base_url, upc);
        debug!("Looking up barcode {}", upc);

        let response = self
            .http
            .get(&url)
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("network error fetching barcode data: {}", e)))?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(AppError::not_found("barcode")),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(AppError::upstream(format!(
                    "barcode API authentication failed (status {})",
                    response.status().as_u16()
                )))
            }
            status => {
                return Err(AppError::upstream(format!(
                    "barcode API returned an unexpected error (status {})",
                    status.as_u16()
                )))
            }
        }

        let body: SearchUpcResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("failed to parse barcode response: {}", e)))?;

        Ok(BarcodeProduct::from(body))
    }
}
