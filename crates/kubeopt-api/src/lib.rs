//! # kubeopt-api
//!
//! HTTP surface for the kubeopt marketing site.
//!
//! Thin axum layer over the intake and analytics services: JSON API
//! endpoints, the landing page with its section-anchor redirects, the
//! health probe, and the minimal admin dashboard payload. All state is
//! built once at startup and shared through [`state::AppState`]; no
//! process-wide singletons.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
