use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::{FetchError, Result};
use crate::types::{Category, Page, Product};

/// HTTP implementation of [`Catalog`] against a DummyJSON-shaped products
/// API (`/products`, `/products/category/{slug}`, `/products/categories`).
pub struct RemoteCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for RemoteCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteCatalog")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Wire shape of a paginated products response.
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
    #[serde(default)]
    total: Option<u64>,
}

impl RemoteCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Api(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        Ok(response.json::<T>().await?)
    }

    async fn get_page(&self, url: &str) -> Result<Page<Product>> {
        let body: ProductsResponse = self.get_json(url).await?;
        Ok(Page {
            items: body.products,
            total: body.total,
        })
    }
}

#[async_trait]
impl Catalog for RemoteCatalog {
    fn name(&self) -> &str {
        "remote"
    }

    async fn list_products(&self, skip: u64, limit: u64) -> Result<Page<Product>> {
        let url = paged_url(&self.base_url, "/products", skip, limit);
        self.get_page(&url).await
    }

    async fn list_category(&self, slug: &str, skip: u64, limit: u64) -> Result<Page<Product>> {
        let path = format!("/products/category/{}", urlencoding::encode(slug));
        let url = paged_url(&self.base_url, &path, skip, limit);
        self.get_page(&url).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let url = format!("{}/products/categories", self.base_url);
        self.get_json(&url).await
    }

    async fn get_product(&self, id: u64) -> Result<Product> {
        let url = format!("{}/products/{}", self.base_url, id);
        self.get_json(&url).await
    }
}

fn paged_url(base: &str, path: &str, skip: u64, limit: u64) -> String {
    format!("{}{}?limit={}&skip={}", base, path, limit, skip)
}
