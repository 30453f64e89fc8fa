//! Shared application state.

use std::sync::Arc;

use kubeopt_analytics::{StatsAggregator, TrackingService};
use kubeopt_core::Result;
use kubeopt_intake::IntakeService;
use kubeopt_store::{SqliteStore, Store};

use crate::config::AppConfig;

/// Everything the handlers need, built once at startup and cloned per
/// request. Services share one explicitly constructed store handle.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<AppConfig>,
    /// Storage handle (health checks, admin reads)
    pub store: Arc<dyn Store>,
    /// Page-view recording and stat queries
    pub tracking: TrackingService,
    /// Contact and download intake
    pub intake: IntakeService,
    /// Dashboard aggregation
    pub stats: StatsAggregator,
}

impl AppState {
    /// Opens the configured SQLite database and wires up the services.
    pub async fn new(config: AppConfig) -> Result<Self> {
        let store = SqliteStore::connect(&config.database_url).await?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Wires up the services over an already-built store.
    pub fn with_store(config: AppConfig, store: Arc<dyn Store>) -> Self {
        let tracking = TrackingService::new(store.clone());
        let intake = IntakeService::new(store.clone(), config.download.clone());
        let stats = StatsAggregator::new(store.clone());
        Self {
            config: Arc::new(config),
            store,
            tracking,
            intake,
            stats,
        }
    }
}
