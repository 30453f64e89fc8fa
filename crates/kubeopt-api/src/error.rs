//! Error-to-response mapping for the JSON API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use kubeopt_core::Error;

/// Wrapper that turns a backend error into the API's JSON error shape.
///
/// Validation failures become 400 with their message in the `error`
/// field; everything else becomes a generic 500 and the detail is
/// logged server-side only.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::Validation { message, .. } => (StatusCode::BAD_REQUEST, message.clone()),
            err => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        let body = Json(json!({ "success": false, "error": message }));
        (status, body).into_response()
    }
}
