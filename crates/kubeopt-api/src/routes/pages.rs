//! Landing page and section-anchor redirects.
//!
//! The site is a single page; the menu routes exist so old links keep
//! working and each section visit is tracked under its own name before
//! redirecting to the matching anchor.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, Redirect};
use axum::Form;

use kubeopt_intake::ContactSubmission;

use crate::error::ApiError;
use crate::routes::{client_ip, user_agent};
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

async fn track(state: &AppState, page: &str, headers: &HeaderMap) {
    state
        .tracking
        .record_view(page, client_ip(headers), &user_agent(headers))
        .await;
}

/// `GET /`: the landing page.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Html<&'static str> {
    track(&state, "home", &headers).await;
    Html(INDEX_HTML)
}

/// `GET /features`
pub async fn features(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    track(&state, "features", &headers).await;
    Redirect::to("/#features")
}

/// `GET /pricing`
pub async fn pricing(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    track(&state, "pricing", &headers).await;
    Redirect::to("/#pricing")
}

/// `GET /docs`
pub async fn docs(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    track(&state, "docs", &headers).await;
    Redirect::to("/#docs")
}

/// `GET /download`
pub async fn download(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    track(&state, "download", &headers).await;
    Redirect::to("/#download")
}

/// `GET /contact`
pub async fn contact(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    track(&state, "contact", &headers).await;
    Redirect::to("/#contact")
}

/// `POST /contact`: form submission, then back to the contact section.
pub async fn contact_submit(
    State(state): State<AppState>,
    Form(submission): Form<ContactSubmission>,
) -> Result<Redirect, ApiError> {
    state.intake.submit_contact(submission).await?;
    Ok(Redirect::to("/#contact"))
}
