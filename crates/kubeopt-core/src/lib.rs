//! # kubeopt-core
//!
//! Shared types for the kubeopt site backend.
//!
//! This crate is dependency level 0 within the project: it defines the
//! error taxonomy and the three persisted record kinds (contacts, page
//! views, downloads) that the store and service crates build on.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`ids`]: Newtype record identifiers
//! - [`records`]: Persisted record types and their creation invariants

pub mod error;
pub mod ids;
pub mod records;

pub use error::{Error, Result};
pub use ids::{ContactId, DownloadId, PageViewId};
pub use records::{
    ContactRecord, DownloadRecord, PageCount, PageViewRecord, DEFAULT_CONTACT_STATUS,
    DEFAULT_DOWNLOAD_VERSION, MAX_USER_AGENT_CHARS,
};
