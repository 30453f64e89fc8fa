//! Intake service: validate presence, persist, return the stored record.

use std::sync::Arc;

use serde::Deserialize;

use kubeopt_core::{ContactRecord, DownloadRecord, Error, Result};
use kubeopt_store::Store;

use crate::settings::{DownloadAck, DownloadSettings};

/// Incoming contact-form fields. All optional at the edge; presence is
/// checked by [`IntakeService::submit_contact`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    /// Sender name (required)
    pub name: Option<String>,
    /// Sender email (required; format not validated)
    pub email: Option<String>,
    /// Company (optional; blank treated as absent)
    pub company: Option<String>,
    /// Message body (required)
    pub message: Option<String>,
}

/// Incoming download registration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DownloadIntent {
    /// Requester email (required)
    pub email: Option<String>,
    /// Requested version; `"latest"` when absent or blank
    pub version: Option<String>,
}

/// Validates and persists contact submissions and download requests.
#[derive(Clone)]
pub struct IntakeService {
    store: Arc<dyn Store>,
    download: DownloadSettings,
}

impl IntakeService {
    /// Creates an intake service over the given store.
    pub fn new(store: Arc<dyn Store>, download: DownloadSettings) -> Self {
        Self { store, download }
    }

    /// Persists a contact submission with `status = "new"` and returns
    /// the stored record.
    ///
    /// Fails with a validation error when `name`, `email`, or `message`
    /// is absent or blank; nothing is persisted in that case. Values are
    /// stored as given.
    pub async fn submit_contact(&self, submission: ContactSubmission) -> Result<ContactRecord> {
        let name = require("name", "Name required", submission.name)?;
        let email = require("email", "Email required", submission.email)?;
        let message = require("message", "Message required", submission.message)?;
        let company = submission.company.filter(|c| !c.trim().is_empty());

        let contact = ContactRecord::new(name, email, company, message);
        self.store.insert_contact(&contact).await?;
        tracing::info!(contact_id = %contact.id, "contact submitted");
        Ok(contact)
    }

    /// Persists a download registration and returns the stored record
    /// together with the acknowledgment payload.
    ///
    /// Fails with a validation error when `email` is absent or blank.
    /// The acknowledgment comes from [`DownloadSettings`] and is the
    /// same whichever version was requested; the stored row does keep
    /// the requested version.
    pub async fn register_download(
        &self,
        intent: DownloadIntent,
    ) -> Result<(DownloadRecord, DownloadAck)> {
        let email = require("email", "Email required", intent.email)?;
        let version = intent.version.filter(|v| !v.trim().is_empty());

        let download = DownloadRecord::new(email, version);
        self.store.insert_download(&download).await?;
        tracing::info!(download_id = %download.id, version = %download.version, "download registered");
        Ok((download, self.download.acknowledgment()))
    }
}

fn require(field: &str, message: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::validation_field(field, message)),
    }
}
