//! Health probe.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"healthy"` or `"unhealthy"`
    pub status: String,
    /// Probe time, RFC 3339
    pub timestamp: String,
    /// Crate version
    pub version: String,
    /// Deployment environment label
    pub environment: String,
    /// Failure detail, only when unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `GET /health`: liveness/readiness probe. Answers 200 when the store
/// responds to a trivial query, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, status, error) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "healthy", None),
        Err(err) => {
            tracing::error!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "unhealthy",
                Some(err.to_string()),
            )
        }
    };

    let response = HealthResponse {
        status: status.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        error,
    };
    (status_code, Json(response))
}
