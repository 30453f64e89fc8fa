//! Dashboard statistics aggregation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use kubeopt_core::{PageCount, Result};
use kubeopt_store::Store;

use crate::tracking::{TrackingService, DEFAULT_POPULAR_LIMIT};

/// The dashboard summary payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Total download registrations
    pub total_downloads: u64,
    /// Total contact submissions
    pub total_contacts: u64,
    /// Page views in the current calendar month
    pub monthly_views: u64,
    /// Most-viewed pages, descending
    pub popular_pages: Vec<PageCount>,
}

/// Read-only composition of store counts into [`DashboardStats`].
#[derive(Clone)]
pub struct StatsAggregator {
    store: Arc<dyn Store>,
    tracking: TrackingService,
}

impl StatsAggregator {
    /// Creates an aggregator over the given store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        let tracking = TrackingService::new(store.clone());
        Self { store, tracking }
    }

    /// Builds the dashboard summary. No side effects.
    ///
    /// The four sub-queries are independent counts, not one read
    /// transaction; with a single-writer store the skew between them is
    /// negligible, and each value is individually consistent.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        Ok(DashboardStats {
            total_downloads: self.store.count_downloads().await?,
            total_contacts: self.store.count_contacts().await?,
            monthly_views: self.tracking.monthly_view_count().await?,
            popular_pages: self.tracking.popular_pages(DEFAULT_POPULAR_LIMIT).await?,
        })
    }
}
