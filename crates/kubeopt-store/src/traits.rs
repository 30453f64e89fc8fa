//! Storage abstraction for the three record tables.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kubeopt_core::{ContactRecord, DownloadRecord, PageCount, PageViewRecord, Result};

/// Durable storage for contacts, page views, and downloads.
///
/// Inserts take fully-built records (the caller stamps ids and
/// timestamps), so backends stay free of clock access and tests can
/// insert rows with arbitrary timestamps.
#[async_trait]
pub trait Store: Send + Sync {
    /// Appends a contact submission.
    async fn insert_contact(&self, contact: &ContactRecord) -> Result<()>;

    /// Appends a page view.
    async fn insert_page_view(&self, view: &PageViewRecord) -> Result<()>;

    /// Appends a download registration.
    async fn insert_download(&self, download: &DownloadRecord) -> Result<()>;

    /// Total number of stored contacts.
    async fn count_contacts(&self) -> Result<u64>;

    /// Total number of stored downloads.
    async fn count_downloads(&self) -> Result<u64>;

    /// Total number of stored page views.
    async fn count_page_views(&self) -> Result<u64>;

    /// Number of page views with `timestamp >= since`.
    async fn count_page_views_since(&self, since: DateTime<Utc>) -> Result<u64>;

    /// View counts grouped by page, most-viewed first, at most `limit`
    /// entries. Ties break by first insertion.
    async fn popular_pages(&self, limit: usize) -> Result<Vec<PageCount>>;

    /// The `limit` most recent contacts, newest first.
    async fn recent_contacts(&self, limit: usize) -> Result<Vec<ContactRecord>>;

    /// Checks that the backend can answer a trivial query.
    async fn ping(&self) -> Result<()>;
}
