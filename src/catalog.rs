use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Category, Page, Product};

/// A remote product catalog as a capability. Listing methods take
/// skip/limit pagination parameters and answer with a page plus the
/// catalog's current belief about the total result-set size.
#[async_trait]
pub trait Catalog: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;

    async fn list_products(&self, skip: u64, limit: u64) -> Result<Page<Product>>;
    async fn list_category(&self, slug: &str, skip: u64, limit: u64) -> Result<Page<Product>>;
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn get_product(&self, id: u64) -> Result<Product>;
}
