//! Integration tests for the SQLite backend.

#![allow(clippy::unwrap_used)]

use chrono::{Duration, Utc};
use kubeopt_core::{ContactRecord, DownloadRecord, PageViewRecord};
use kubeopt_store::{SqliteStore, Store};

async fn memory_store() -> SqliteStore {
    SqliteStore::connect("sqlite::memory:")
        .await
        .expect("in-memory store should open")
}

#[tokio::test]
async fn test_contact_roundtrip() {
    let store = memory_store().await;
    let contact = ContactRecord::new(
        "Ada Lovelace",
        "ada@example.com",
        Some("Analytical Engines Ltd".to_string()),
        "Interested in the optimizer.",
    );

    store.insert_contact(&contact).await.unwrap();

    assert_eq!(store.count_contacts().await.unwrap(), 1);
    let stored = store.recent_contacts(10).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], contact);
}

#[tokio::test]
async fn test_download_and_page_view_counts() {
    let store = memory_store().await;

    for n in 0..3 {
        let download = DownloadRecord::new(format!("user{n}@example.com"), None);
        store.insert_download(&download).await.unwrap();
    }
    for _ in 0..4 {
        let view = PageViewRecord::new("home", Some("10.0.0.1".to_string()), "agent");
        store.insert_page_view(&view).await.unwrap();
    }

    assert_eq!(store.count_downloads().await.unwrap(), 3);
    assert_eq!(store.count_page_views().await.unwrap(), 4);
}

#[tokio::test]
async fn test_count_since_excludes_older_rows() {
    let store = memory_store().await;

    let mut old = PageViewRecord::new("home", None, "agent");
    old.timestamp = Utc::now() - Duration::days(40);
    store.insert_page_view(&old).await.unwrap();

    let recent = PageViewRecord::new("home", None, "agent");
    store.insert_page_view(&recent).await.unwrap();

    let cutoff = Utc::now() - Duration::days(1);
    assert_eq!(store.count_page_views_since(cutoff).await.unwrap(), 1);
}

#[tokio::test]
async fn test_popular_pages_order_limit_and_ties() {
    let store = memory_store().await;
    for page in ["a", "a", "a", "b", "b", "c"] {
        let view = PageViewRecord::new(page, None, "agent");
        store.insert_page_view(&view).await.unwrap();
    }

    let top = store.popular_pages(2).await.unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!((top[0].page.as_str(), top[0].views), ("a", 3));
    assert_eq!((top[1].page.as_str(), top[1].views), ("b", 2));

    // Exact tie: first insertion wins.
    let store = memory_store().await;
    for page in ["z", "y", "z", "y"] {
        let view = PageViewRecord::new(page, None, "agent");
        store.insert_page_view(&view).await.unwrap();
    }
    let top = store.popular_pages(5).await.unwrap();
    assert_eq!(top[0].page, "z");
    assert_eq!(top[1].page, "y");
}

#[tokio::test]
async fn test_recent_contacts_newest_first() {
    let store = memory_store().await;

    let mut older = ContactRecord::new("First", "first@example.com", None, "hello");
    older.created_at = Utc::now() - Duration::minutes(10);
    store.insert_contact(&older).await.unwrap();

    let newer = ContactRecord::new("Second", "second@example.com", None, "hello");
    store.insert_contact(&newer).await.unwrap();

    let recent = store.recent_contacts(1).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].name, "Second");
}

#[tokio::test]
async fn test_connect_creates_database_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("kubeopt.db");
    let url = format!("sqlite:{}", path.display());

    let store = SqliteStore::connect(&url).await.expect("file store opens");
    store.ping().await.unwrap();
    assert!(path.exists());

    // Reconnecting must be idempotent (schema uses IF NOT EXISTS).
    let store = SqliteStore::connect(&url).await.expect("reopen");
    assert_eq!(store.count_contacts().await.unwrap(), 0);
}
