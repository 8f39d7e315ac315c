use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{Product, ProductPage};
use crate::config::CatalogConfig;

/// Read-only access to the product catalog.
///
/// Every call is a single round trip. Implementations do not cache,
/// deduplicate or retry.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Whole catalog, up to the configured page size.
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError>;

    /// A single product. A successful response with no product in it is
    /// reported as `CatalogError::NotFound`.
    async fn fetch_one(&self, id: u64) -> Result<Product, CatalogError>;

    /// Products filtered server-side by category tag.
    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;
}

/// `CatalogApi` over plain HTTP+JSON.
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
    list_limit: u32,
}

impl HttpCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| CatalogError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidUrl {
                url: config.base_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(CatalogError::Client)?;

        Ok(Self {
            client,
            base_url,
            list_limit: config.list_limit,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded as one segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let label = url.to_string();
        tracing::debug!(url = %label, "catalog request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                url: label.clone(),
                source,
            })?;

        let status = response.status();
        tracing::debug!(url = %label, status = status.as_u16(), "catalog response");
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: label,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CatalogError::Transport {
                url: label.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| CatalogError::Decode { url: label, source })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        let mut url = self.endpoint(&["products"])?;
        url.query_pairs_mut()
            .append_pair("limit", &self.list_limit.to_string());
        let page: ProductPage = self.get_json(url).await?;
        Ok(page.products)
    }

    async fn fetch_one(&self, id: u64) -> Result<Product, CatalogError> {
        let url = self.endpoint(&["products", &id.to_string()])?;
        // Any non-success status (404 included) stays a `Status` error.
        self.get_json::<Option<Product>>(url)
            .await?
            .ok_or(CatalogError::NotFound { id })
    }

    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let url = self.endpoint(&["products", "category", category])?;
        let page: ProductPage = self.get_json(url).await?;
        Ok(page.products)
    }
}
