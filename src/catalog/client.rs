use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::info;
use wreq::{Client, Response};

use crate::config::StoreConfig;
use crate::models::{Product, ProductPage};

/// The five read operations offered by the remote catalog. Each is a
/// single request/response with no retry, backoff, or timeout; any
/// transport failure or non-success status surfaces as a fetch error.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list(&self, limit: u32, skip: u32) -> Result<ProductPage>;
    async fn get_by_id(&self, id: u32) -> Result<Product>;
    async fn list_by_category(&self, category: &str, limit: u32, skip: u32)
    -> Result<ProductPage>;
    async fn search(&self, query: &str) -> Result<ProductPage>;
    async fn list_categories(&self) -> Result<Vec<String>>;
}

pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(CatalogClient {
            client,
            base_url: config.catalog.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {}", response.status()));
        }

        Ok(response)
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list(&self, limit: u32, skip: u32) -> Result<ProductPage> {
        let url = format!("{}/products?limit={}&skip={}", self.base_url, limit, skip);
        info!("Fetching product page from {}", url);

        let page: ProductPage = self.fetch(&url).await?.json().await?;
        Ok(page)
    }

    async fn get_by_id(&self, id: u32) -> Result<Product> {
        let url = format!("{}/products/{}", self.base_url, id);
        info!("Fetching product {} from {}", id, url);

        let product: Product = self.fetch(&url).await?.json().await?;
        Ok(product)
    }

    async fn list_by_category(
        &self,
        category: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage> {
        let url = format!(
            "{}/products/category/{}?limit={}&skip={}",
            self.base_url, category, limit, skip
        );
        info!("Fetching category {} from {}", category, url);

        let page: ProductPage = self.fetch(&url).await?.json().await?;
        Ok(page)
    }

    async fn search(&self, query: &str) -> Result<ProductPage> {
        let url = format!("{}/products/search", self.base_url);
        info!("Searching catalog for \"{}\"", query);

        // Free-text input goes through query-pair encoding rather than
        // direct URL formatting.
        let response = self
            .client
            .get(url.as_str())
            .query(&[("q", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {}", response.status()));
        }

        let page: ProductPage = response.json().await?;
        Ok(page)
    }

    async fn list_categories(&self) -> Result<Vec<String>> {
        let url = format!("{}/products/categories", self.base_url);
        info!("Fetching category list from {}", url);

        let categories: Vec<String> = self.fetch(&url).await?.json().await?;
        Ok(categories)
    }
}
