//! `shopfront-client` — thin HTTP client for the catalog API.
//!
//! Provides the one outbound call the form needs: `POST /products/` with a
//! serialized [`ProductDraft`] body. No retry, no timeout, no backoff; a
//! submission is dispatched exactly once per call.

pub mod error;
pub mod types;

use reqwest::StatusCode;

use shopfront_core::ProductDraft;

pub use error::ApiError;
pub use types::{CategorySummary, CreatedProduct};

/// Production endpoint the form submits to.
pub const DEFAULT_BASE_URL: &str = "https://api.escuelajs.co/api/v1";

/// Client configuration. The form always talks to the production catalog;
/// the base URL is still injectable so tests can point at a local stub.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// HTTP client for the catalog API.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a product from a validated draft.
    ///
    /// Success is a 200 or 201 response, nothing else. The echoed product
    /// payload is decoded best-effort; the status code alone is
    /// authoritative, so an unexpected body shape never turns a created
    /// product into an error.
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<CreatedProduct, ApiError> {
        let url = self.build_url("/products/");
        tracing::debug!(%url, title = %draft.title, "dispatching create-product request");

        let response = self.http.post(&url).json(draft).send().await?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), "create-product rejected");
            return Err(ApiError::status(status, body));
        }

        let created = response.json().await.unwrap_or_default();
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = CatalogClient::new(ApiConfig::new("http://localhost:3000/"));
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.build_url("/products/"), "http://localhost:3000/products/");
    }

    #[test]
    fn default_config_points_at_production() {
        let client = CatalogClient::new(ApiConfig::default());
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
