use serde::{Deserialize, Serialize};

/// One fetch's worth of results: a slice of items plus the data source's
/// belief about the full result-set size. `total` is absent when the source
/// doesn't report one; the loader then falls back to the count returned so
/// far (see `ListLoader`).
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: None,
        }
    }
}

/// Catalog product (summary for list views)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Product category - the filter key for filtered listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
}
