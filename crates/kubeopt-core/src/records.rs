//! Persisted record types.
//!
//! All three tables are append-only logs: rows are inserted once and never
//! updated or deleted within this backend's scope (the lone exception is
//! `ContactRecord::status`, which an admin may change out of band).
//! Constructors stamp `Utc::now()`, so per-table timestamps are
//! non-decreasing with insertion order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ContactId, DownloadId, PageViewId};

/// Status assigned to every newly submitted contact.
pub const DEFAULT_CONTACT_STATUS: &str = "new";

/// Version recorded when a download request does not name one.
pub const DEFAULT_DOWNLOAD_VERSION: &str = "latest";

/// Maximum number of characters kept from a `User-Agent` header.
pub const MAX_USER_AGENT_CHARS: usize = 200;

/// A contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Unique identifier
    pub id: ContactId,
    /// Sender name
    pub name: String,
    /// Sender email (stored as given; format is not validated)
    pub email: String,
    /// Optional company name
    pub company: Option<String>,
    /// Message body
    pub message: String,
    /// Creation time; immutable once stored
    pub created_at: DateTime<Utc>,
    /// Workflow status, `"new"` at creation
    pub status: String,
}

impl ContactRecord {
    /// Creates a contact record with `status = "new"` and `created_at = now`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            email: email.into(),
            company,
            message: message.into(),
            created_at: Utc::now(),
            status: DEFAULT_CONTACT_STATUS.to_string(),
        }
    }
}

/// One tracked page view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageViewRecord {
    /// Unique identifier
    pub id: PageViewId,
    /// Path or logical page name (`"home"`, `"pricing"`, …)
    pub page: String,
    /// Client address, when one could be determined
    pub ip_address: Option<String>,
    /// `User-Agent` header, truncated to [`MAX_USER_AGENT_CHARS`]
    pub user_agent: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl PageViewRecord {
    /// Creates a page-view record stamped with the current time.
    ///
    /// `user_agent` is silently truncated to its first
    /// [`MAX_USER_AGENT_CHARS`] characters.
    pub fn new(page: impl Into<String>, ip_address: Option<String>, user_agent: &str) -> Self {
        Self {
            id: PageViewId::new(),
            page: page.into(),
            ip_address,
            user_agent: truncate_chars(user_agent, MAX_USER_AGENT_CHARS),
            timestamp: Utc::now(),
        }
    }
}

/// One download registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRecord {
    /// Unique identifier
    pub id: DownloadId,
    /// Requester email (stored as given)
    pub email: String,
    /// Requested version, `"latest"` unless the caller named one
    pub version: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl DownloadRecord {
    /// Creates a download record stamped with the current time.
    pub fn new(email: impl Into<String>, version: Option<String>) -> Self {
        Self {
            id: DownloadId::new(),
            email: email.into(),
            version: version.unwrap_or_else(|| DEFAULT_DOWNLOAD_VERSION.to_string()),
            timestamp: Utc::now(),
        }
    }
}

/// Aggregate view count for one page, as returned by the popular-pages query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCount {
    /// Page name
    pub page: String,
    /// Number of recorded views
    pub views: u64,
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
