use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::error::{FetchError, Result};
use crate::types::{Category, Page, Product};

/// The loader's fetch capability: pagination parameters in, one page out.
///
/// `is_ready` reports whether the source has a valid fetch target at all.
/// A source that isn't ready (a category listing with no category) makes the
/// loader skip fetching entirely rather than fail.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    fn is_ready(&self) -> bool {
        true
    }

    async fn fetch_page(&self, skip: u64, limit: u64) -> Result<Page<T>>;
}

/// Unfiltered catalog listing.
pub struct AllProducts {
    catalog: Arc<dyn Catalog>,
}

impl AllProducts {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl PageSource<Product> for AllProducts {
    async fn fetch_page(&self, skip: u64, limit: u64) -> Result<Page<Product>> {
        self.catalog.list_products(skip, limit).await
    }
}

/// Catalog listing filtered by an optional category. With no category the
/// source is not ready and the loader never fetches.
pub struct CategoryProducts {
    catalog: Arc<dyn Catalog>,
    category: Option<Category>,
}

impl CategoryProducts {
    pub fn new(catalog: Arc<dyn Catalog>, category: Option<Category>) -> Self {
        Self { catalog, category }
    }
}

#[async_trait]
impl PageSource<Product> for CategoryProducts {
    fn is_ready(&self) -> bool {
        self.category.is_some()
    }

    async fn fetch_page(&self, skip: u64, limit: u64) -> Result<Page<Product>> {
        let Some(category) = &self.category else {
            return Err(FetchError::Api("no category selected".into()));
        };
        self.catalog.list_category(&category.slug, skip, limit).await
    }
}
