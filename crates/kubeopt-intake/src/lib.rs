//! # kubeopt-intake
//!
//! Contact-form and download intake.
//!
//! [`IntakeService`] validates field presence (nothing more; email
//! formats are accepted as given), persists the record, and returns it.
//! Validation failures are client errors; store failures surface to the
//! caller, unlike the fire-and-forget tracking path.

pub mod service;
pub mod settings;

pub use service::{ContactSubmission, DownloadIntent, IntakeService};
pub use settings::{DownloadAck, DownloadSettings};
