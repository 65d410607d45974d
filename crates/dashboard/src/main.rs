//! EarlyGuard Dashboard - Main Entry Point

use dashboard::{init_logging, run_server, AppState, Settings};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== EarlyGuard Dropout Dashboard v{} ===", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load()?;

    // Missing artifacts abort here, before the listener ever binds
    let state = AppState::initialize(&settings).await?;

    let addr = settings.listen_addr.clone();
    run_server(&addr, Arc::new(state))
        .await
        .map_err(|err| anyhow::anyhow!("{err}"))?;

    Ok(())
}
