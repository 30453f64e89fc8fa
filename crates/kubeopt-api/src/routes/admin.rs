//! Minimal admin dashboard payload.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use kubeopt_core::ContactRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// How many recent contacts the dashboard shows.
const RECENT_CONTACTS: usize = 10;

/// Table totals for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminTotals {
    /// Total contact submissions
    pub total_contacts: u64,
    /// Total download registrations
    pub total_downloads: u64,
    /// Total recorded page views
    pub total_views: u64,
}

/// The admin dashboard payload: totals plus the most recent contacts,
/// newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboard {
    /// Table totals
    pub stats: AdminTotals,
    /// Most recent contact submissions
    pub contacts: Vec<ContactRecord>,
    /// Where contact notifications go
    pub admin_email: String,
}

/// `GET /admin` handler.
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<AdminDashboard>, ApiError> {
    let stats = AdminTotals {
        total_contacts: state.store.count_contacts().await?,
        total_downloads: state.store.count_downloads().await?,
        total_views: state.store.count_page_views().await?,
    };
    let contacts = state.store.recent_contacts(RECENT_CONTACTS).await?;
    Ok(Json(AdminDashboard {
        stats,
        contacts,
        admin_email: state.config.admin_email.clone(),
    }))
}
