//! Route table and request helpers.

pub mod admin;
pub mod api;
pub mod health;
pub mod pages;

use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use axum::routing::{get, post};
use axum::Router;
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;

use kubeopt_core::Error;

use crate::error::ApiError;
use crate::state::AppState;

/// Builds the full route table over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(pages::index))
        .route("/features", get(pages::features))
        .route("/pricing", get(pages::pricing))
        .route("/docs", get(pages::docs))
        .route("/download", get(pages::download))
        .route("/contact", get(pages::contact).post(pages::contact_submit))
        // JSON API
        .route("/api/stats", get(api::stats))
        .route("/api/download", post(api::download))
        .route("/api/analytics/pageview", post(api::pageview))
        .route("/api/analytics/event", post(api::event))
        .route("/api/demo-data", get(api::demo_data))
        // Probes and admin
        .route("/health", get(health::health))
        .route("/admin", get(admin::dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Client address, taken from the usual proxy headers. The service sits
/// behind a reverse proxy, so the socket address is not meaningful.
pub(crate) fn client_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = header_str(headers, "x-forwarded-for") {
        let first = forwarded.split(',').next().unwrap_or(forwarded).trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }
    header_str(headers, "x-real-ip").map(|ip| ip.trim().to_string())
}

/// `User-Agent` header, empty when absent.
pub(crate) fn user_agent(headers: &HeaderMap) -> String {
    header_str(headers, header::USER_AGENT.as_str())
        .unwrap_or_default()
        .to_string()
}

/// `Referer` header, when present and non-empty.
pub(crate) fn referrer(headers: &HeaderMap) -> Option<String> {
    header_str(headers, header::REFERER.as_str())
        .filter(|r| !r.is_empty())
        .map(ToString::to_string)
}

/// Decodes an optional JSON body: empty bodies yield the default,
/// malformed JSON is the client's fault.
pub(crate) fn json_body<T>(bytes: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes)
        .map_err(|err| Error::validation(format!("Invalid JSON body: {err}")).into())
}

fn header_str<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_ip(&headers).as_deref(), Some("203.0.113.9"));
    }

    #[test]
    fn test_client_ip_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_ip(&headers).as_deref(), Some("10.0.0.2"));
    }

    #[test]
    fn test_client_ip_absent() {
        assert_eq!(client_ip(&HeaderMap::new()), None);
    }

    #[test]
    fn test_user_agent_defaults_to_empty() {
        assert_eq!(user_agent(&HeaderMap::new()), "");
    }

    #[test]
    fn test_json_body_empty_yields_default() {
        let body: api::PageViewBody = json_body(&Bytes::new()).unwrap();
        assert_eq!(body.page, None);
    }

    #[test]
    fn test_json_body_rejects_garbage() {
        let result: Result<api::PageViewBody, _> = json_body(&Bytes::from_static(b"{nope"));
        assert!(result.is_err());
    }
}
