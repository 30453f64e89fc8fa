//! SQLite storage backend.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use kubeopt_core::{ContactRecord, DownloadRecord, Error, PageCount, PageViewRecord, Result};

use crate::traits::Store;

/// Idempotent table and index definitions, executed at connect time.
///
/// Indexes cover the two page-view query shapes: the monthly count
/// (timestamp range) and the popular-pages grouping.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS contact (
        id          TEXT PRIMARY KEY,
        name        TEXT NOT NULL,
        email       TEXT NOT NULL,
        company     TEXT,
        message     TEXT NOT NULL,
        created_at  TEXT NOT NULL,
        status      TEXT NOT NULL DEFAULT 'new'
    )",
    "CREATE TABLE IF NOT EXISTS page_view (
        id          TEXT PRIMARY KEY,
        page        TEXT NOT NULL,
        ip_address  TEXT,
        user_agent  TEXT NOT NULL,
        timestamp   TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_page_view_timestamp ON page_view(timestamp)",
    "CREATE INDEX IF NOT EXISTS idx_page_view_page ON page_view(page)",
    "CREATE TABLE IF NOT EXISTS download (
        id          TEXT PRIMARY KEY,
        email       TEXT NOT NULL,
        version     TEXT NOT NULL DEFAULT 'latest',
        timestamp   TEXT NOT NULL
    )",
];

/// SQLite-backed [`Store`].
///
/// Opens the database with `create_if_missing`, WAL journaling, and a
/// busy timeout; the pool is capped at one connection since SQLite
/// permits only limited write concurrency and every write here is a
/// single-row insert.
#[derive(Clone)]
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Connects to `database_url` (e.g. `sqlite:data/kubeopt.db` or
    /// `sqlite::memory:`), creating the file and schema as needed.
    pub async fn connect(database_url: &str) -> Result<Self> {
        ensure_parent_dir(database_url)?;

        let opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        tracing::debug!("database schema ready");
        Ok(())
    }
}

fn ensure_parent_dir(database_url: &str) -> Result<()> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    // ":memory:" and option-only URLs have no filesystem path.
    if path.is_empty() || path.starts_with(':') {
        return Ok(());
    }
    let path = path.split('?').next().unwrap_or(path);
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn parse_uuid(value: &str, table: &str) -> Result<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| Error::decode(format!("{table} row has malformed id {value:?}")))
}

#[async_trait]
impl Store for SqliteStore {
    async fn insert_contact(&self, contact: &ContactRecord) -> Result<()> {
        sqlx::query(
            "INSERT INTO contact (id, name, email, company, message, created_at, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(contact.id.to_string())
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.company)
        .bind(&contact.message)
        .bind(contact.created_at)
        .bind(&contact.status)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_page_view(&self, view: &PageViewRecord) -> Result<()> {
        sqlx::query(
            "INSERT INTO page_view (id, page, ip_address, user_agent, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(view.id.to_string())
        .bind(&view.page)
        .bind(&view.ip_address)
        .bind(&view.user_agent)
        .bind(view.timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_download(&self, download: &DownloadRecord) -> Result<()> {
        sqlx::query(
            "INSERT INTO download (id, email, version, timestamp)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(download.id.to_string())
        .bind(&download.email)
        .bind(&download.version)
        .bind(download.timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn count_contacts(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn count_downloads(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM download")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn count_page_views(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM page_view")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn count_page_views_since(&self, since: DateTime<Utc>) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM page_view WHERE timestamp >= ?1")
            .bind(since)
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn popular_pages(&self, limit: usize) -> Result<Vec<PageCount>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT page, COUNT(*) AS views FROM page_view
             GROUP BY page
             ORDER BY views DESC, MIN(rowid) ASC
             LIMIT ?1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(page, views)| PageCount {
                page,
                views: views as u64,
            })
            .collect())
    }

    async fn recent_contacts(&self, limit: usize) -> Result<Vec<ContactRecord>> {
        type ContactRow = (
            String,
            String,
            String,
            Option<String>,
            String,
            DateTime<Utc>,
            String,
        );

        let rows: Vec<ContactRow> = sqlx::query_as(
            "SELECT id, name, email, company, message, created_at, status FROM contact
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, name, email, company, message, created_at, status)| {
                Ok(ContactRecord {
                    id: parse_uuid(&id, "contact")?.into(),
                    name,
                    email,
                    company,
                    message,
                    created_at,
                    status,
                })
            })
            .collect()
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
