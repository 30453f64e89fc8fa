//! Page-view recording and stat queries.

use std::sync::Arc;

use kubeopt_core::{PageCount, PageViewRecord, Result};
use kubeopt_store::Store;

use crate::month::current_month_start;

/// Number of entries the popular-pages query returns unless the caller
/// asks for a different limit.
pub const DEFAULT_POPULAR_LIMIT: usize = 5;

/// Records page views and answers the aggregate view queries.
#[derive(Clone)]
pub struct TrackingService {
    store: Arc<dyn Store>,
}

impl TrackingService {
    /// Creates a tracking service over the given store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Records one page view. Fire-and-forget: a store failure is logged
    /// and dropped, never surfaced, so tracking cannot degrade the
    /// request that triggered it.
    ///
    /// The user agent is truncated to its first 200 characters before
    /// persisting.
    pub async fn record_view(&self, page: &str, ip_address: Option<String>, user_agent: &str) {
        let view = PageViewRecord::new(page, ip_address, user_agent);
        if let Err(err) = self.store.insert_page_view(&view).await {
            tracing::warn!(page = %view.page, error = %err, "page view dropped");
        }
    }

    /// Number of page views recorded since the start of the current
    /// calendar month (local day 1, 00:00:00) through now.
    pub async fn monthly_view_count(&self) -> Result<u64> {
        self.store
            .count_page_views_since(current_month_start())
            .await
    }

    /// View counts grouped by page, most-viewed first, at most `limit`
    /// entries. Ties break by first insertion.
    pub async fn popular_pages(&self, limit: usize) -> Result<Vec<PageCount>> {
        self.store.popular_pages(limit).await
    }
}
