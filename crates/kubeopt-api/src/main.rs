//! kubeopt site backend entry point.

use kubeopt_api::{server, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kubeopt_api=debug".into()),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        database_url = %config.database_url,
        environment = %config.environment,
        "starting kubeopt site backend"
    );

    let addr = config.bind_addr();
    let state = AppState::new(config).await?;

    server::run(state, &addr).await?;
    Ok(())
}
