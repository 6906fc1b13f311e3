use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::source::PageSource;

/// Read-only snapshot of a loader for the presentation layer.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub is_initial_loading: bool,
    pub is_loading_more: bool,
    /// Derived, never stored: `items.len() < total || total == 0`.
    pub has_more: bool,
    pub total: u64,
    pub last_error: Option<String>,
}

struct Inner<T> {
    items: Vec<T>,
    /// Last known result-set size. `0` doubles as the "not yet known"
    /// sentinel, indistinguishable from a definitively empty result set.
    total: u64,
    initial_loading: bool,
    loading_more: bool,
    /// Session counter. Bumped by every `load_initial`; a fetch that settles
    /// under a different generation than it was issued under is discarded.
    generation: u64,
    last_error: Option<String>,
}

/// Incremental paginated list loader.
///
/// Owns the accumulated items, the loading flags, and the total-count
/// bookkeeping for one listing session. `load_initial` starts a fresh
/// session; `load_more` appends the next page when one is believed to
/// exist and nothing is already in flight. At most one fetch is in flight
/// per loader at any time, and fetch failures never propagate to the
/// caller - they reset the flags, leave the items untouched, and land in
/// `last_error`.
///
/// When the source never reports a total, the initial load defaults it to
/// the count returned, so pagination stops after one page even if more data
/// exists server-side.
pub struct ListLoader<T: 'static> {
    source: Arc<dyn PageSource<T>>,
    page_size: u64,
    inner: Mutex<Inner<T>>,
}

impl<T: Clone + Send + 'static> ListLoader<T> {
    pub fn new(source: Arc<dyn PageSource<T>>, page_size: u64) -> Self {
        assert!(page_size > 0, "page_size must be positive");
        Self {
            source,
            page_size,
            inner: Mutex::new(Inner {
                items: Vec::new(),
                total: 0,
                initial_loading: false,
                loading_more: false,
                generation: 0,
                last_error: None,
            }),
        }
    }

    pub fn state(&self) -> ListState<T> {
        let inner = self.inner.lock();
        ListState {
            items: inner.items.clone(),
            is_initial_loading: inner.initial_loading,
            is_loading_more: inner.loading_more,
            has_more: (inner.items.len() as u64) < inner.total || inner.total == 0,
            total: inner.total,
            last_error: inner.last_error.clone(),
        }
    }

    /// Start a fresh session: clear accumulated items, supersede any
    /// in-flight fetch, and load the first page. Safe to call at any time.
    pub async fn load_initial(&self) {
        let generation = {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            inner.items.clear();
            inner.total = 0;
            inner.last_error = None;
            inner.initial_loading = true;
            // A pending append now belongs to a dead session.
            inner.loading_more = false;
            inner.generation
        };

        if !self.source.is_ready() {
            let mut inner = self.inner.lock();
            if inner.generation == generation {
                inner.initial_loading = false;
            }
            return;
        }

        let result = self.source.fetch_page(0, self.page_size).await;

        let mut inner = self.inner.lock();
        if inner.generation != generation {
            debug!(generation, "discarding stale initial load");
            return;
        }
        inner.initial_loading = false;
        match result {
            Ok(page) => {
                let fetched = page.items.len() as u64;
                inner.items = page.items;
                inner.total = page.total.unwrap_or(fetched);
            }
            Err(err) => {
                warn!("initial load failed: {err}");
                inner.items.clear();
                inner.last_error = Some(err.to_string());
            }
        }
    }

    /// Fetch and append the next page if one is believed to exist and no
    /// fetch is already in flight; otherwise a silent no-op.
    pub async fn load_more(&self) {
        let (generation, skip) = {
            let mut inner = self.inner.lock();
            if inner.initial_loading || inner.loading_more {
                return;
            }
            let len = inner.items.len() as u64;
            // total == 0 means the total is not yet known, so keep going.
            if len >= inner.total && inner.total != 0 {
                return;
            }
            if !self.source.is_ready() {
                return;
            }
            inner.loading_more = true;
            (inner.generation, len)
        };

        let result = self.source.fetch_page(skip, self.page_size).await;

        let mut inner = self.inner.lock();
        if inner.generation != generation {
            debug!(generation, "discarding stale page append");
            return;
        }
        inner.loading_more = false;
        match result {
            Ok(page) => {
                if let Some(total) = page.total {
                    inner.total = total;
                }
                inner.items.extend(page.items);
                inner.last_error = None;
            }
            Err(err) => {
                warn!("loading more failed: {err}");
                inner.last_error = Some(err.to_string());
            }
        }
    }
}
