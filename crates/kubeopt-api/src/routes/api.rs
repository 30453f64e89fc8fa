//! JSON API endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use kubeopt_analytics::DashboardStats;
use kubeopt_intake::DownloadIntent;

use crate::error::ApiError;
use crate::routes::{client_ip, json_body, referrer, user_agent};
use crate::state::AppState;

/// `GET /api/stats`: the dashboard summary.
pub async fn stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, ApiError> {
    Ok(Json(state.stats.dashboard_stats().await?))
}

/// `POST /api/download` handler. The body deserializes straight into
/// [`DownloadIntent`]; see that type for field defaults.
pub async fn download(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let intent: DownloadIntent = json_body(&body)?;
    let (_download, ack) = state.intake.register_download(intent).await?;
    Ok(Json(json!({
        "success": true,
        "download_url": ack.download_url,
        "instructions": ack.instructions,
    })))
}

/// `POST /api/analytics/pageview` body. `page` defaults to the request
/// referrer, or `/` when that is absent too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageViewBody {
    /// Page to credit with the view
    pub page: Option<String>,
}

/// `POST /api/analytics/pageview` handler.
///
/// Tracking is fire-and-forget, so a reachable body always yields
/// `{"success": true}`; only a malformed JSON body is an error.
pub async fn pageview(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let body: PageViewBody = json_body(&body)?;
    let page = body
        .page
        .filter(|p| !p.trim().is_empty())
        .or_else(|| referrer(&headers))
        .unwrap_or_else(|| "/".to_string());

    state
        .tracking
        .record_view(&page, client_ip(&headers), &user_agent(&headers))
        .await;

    Ok(Json(json!({ "success": true })))
}

/// `POST /api/analytics/event` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventBody {
    /// Event action, `"unknown"` when absent
    pub action: Option<String>,
    /// Optional event label
    pub label: Option<String>,
}

/// `POST /api/analytics/event` handler.
///
/// Events have no table of their own; they are acknowledged and logged
/// so client scripts do not error.
pub async fn event(body: Bytes) -> Result<Json<Value>, ApiError> {
    let body: EventBody = json_body(&body)?;
    let action = body.action.as_deref().unwrap_or("unknown");
    let label = body.label.as_deref().unwrap_or("");
    tracing::debug!(action, label, "client event");
    Ok(Json(json!({ "success": true })))
}

/// `GET /api/demo-data`: static demo payload for the landing-page charts.
pub async fn demo_data() -> Json<Value> {
    Json(json!({
        "cost_trends": {
            "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
            "current": [12500, 13200, 12800, 14100, 13800, 8420],
            "optimized": [8200, 8400, 8100, 8800, 8600, 5240],
        },
        "utilization": {
            "labels": ["CPU", "Memory", "Storage", "Network"],
            "current": [45, 78, 34, 56],
            "optimized": [65, 85, 52, 71],
        },
        "efficiency": {
            "labels": ["Efficient", "Over-provisioned", "Under-provisioned"],
            "data": [67, 23, 10],
        },
        "savings": {
            "labels": ["Right-sizing", "Auto-scaling", "Node Optimization", "Storage"],
            "data": [1200, 850, 890, 240],
        },
    }))
}
