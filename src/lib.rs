//! Incremental paginated list loader for product catalog views.
//!
//! The core is [`ListLoader`]: a data-fetching state machine that manages
//! initial load, append-on-demand loading, in-flight request suppression,
//! and silent-failure recovery over any [`PageSource`]. A presentation
//! layer renders [`ListLoader::state`] and forwards scroll-proximity
//! signals into [`ListLoader::load_more`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod remote;
pub mod source;
pub mod types;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{FetchError, Result};
pub use loader::{ListLoader, ListState};
pub use remote::RemoteCatalog;
pub use source::{AllProducts, CategoryProducts, PageSource};
pub use types::{Category, Page, Product};
