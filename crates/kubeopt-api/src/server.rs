//! Server runtime.

use kubeopt_core::Result;

use crate::routes::router;
use crate::state::AppState;

/// Binds `addr` and serves the route table until the process exits.
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "kubeopt site backend listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
