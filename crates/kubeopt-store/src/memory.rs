//! In-memory storage backend for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kubeopt_core::{ContactRecord, DownloadRecord, PageCount, PageViewRecord, Result};

use crate::traits::Store;

#[derive(Default)]
struct Tables {
    contacts: Vec<ContactRecord>,
    page_views: Vec<PageViewRecord>,
    downloads: Vec<DownloadRecord>,
}

/// [`Store`] kept entirely in process memory.
///
/// Used by service tests; preserves insertion order, which doubles as
/// the tie-break order for [`Store::popular_pages`].
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_tables<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        let mut guard = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_contact(&self, contact: &ContactRecord) -> Result<()> {
        self.with_tables(|t| t.contacts.push(contact.clone()));
        Ok(())
    }

    async fn insert_page_view(&self, view: &PageViewRecord) -> Result<()> {
        self.with_tables(|t| t.page_views.push(view.clone()));
        Ok(())
    }

    async fn insert_download(&self, download: &DownloadRecord) -> Result<()> {
        self.with_tables(|t| t.downloads.push(download.clone()));
        Ok(())
    }

    async fn count_contacts(&self) -> Result<u64> {
        Ok(self.with_tables(|t| t.contacts.len() as u64))
    }

    async fn count_downloads(&self) -> Result<u64> {
        Ok(self.with_tables(|t| t.downloads.len() as u64))
    }

    async fn count_page_views(&self) -> Result<u64> {
        Ok(self.with_tables(|t| t.page_views.len() as u64))
    }

    async fn count_page_views_since(&self, since: DateTime<Utc>) -> Result<u64> {
        Ok(self.with_tables(|t| {
            t.page_views.iter().filter(|v| v.timestamp >= since).count() as u64
        }))
    }

    async fn popular_pages(&self, limit: usize) -> Result<Vec<PageCount>> {
        Ok(self.with_tables(|t| {
            // First-seen order, so the stable sort below breaks count
            // ties by first insertion.
            let mut counts: Vec<PageCount> = Vec::new();
            for view in &t.page_views {
                match counts.iter_mut().find(|c| c.page == view.page) {
                    Some(entry) => entry.views += 1,
                    None => counts.push(PageCount {
                        page: view.page.clone(),
                        views: 1,
                    }),
                }
            }
            counts.sort_by(|a, b| b.views.cmp(&a.views));
            counts.truncate(limit);
            counts
        }))
    }

    async fn recent_contacts(&self, limit: usize) -> Result<Vec<ContactRecord>> {
        Ok(self.with_tables(|t| {
            let mut recent: Vec<ContactRecord> = t.contacts.iter().rev().cloned().collect();
            recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            recent.truncate(limit);
            recent
        }))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
