//! # kubeopt-analytics
//!
//! Page-view tracking and aggregate statistics.
//!
//! Two services over the shared [`Store`](kubeopt_store::Store):
//! - [`TrackingService`]: records page views (fire-and-forget) and answers
//!   the monthly-count and popular-pages queries
//! - [`StatsAggregator`]: composes the store counts into the dashboard
//!   payload
//!
//! Tracking writes are deliberately infallible at the call site: a failed
//! analytics insert is logged and dropped so it can never fail the
//! user-facing request that triggered it.

pub mod month;
pub mod stats;
pub mod tracking;

pub use stats::{DashboardStats, StatsAggregator};
pub use tracking::{TrackingService, DEFAULT_POPULAR_LIMIT};
