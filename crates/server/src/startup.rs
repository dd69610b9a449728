use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::{records::RecordService, runtime, storage::JsonFileStore};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the record file and wire the service into the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    runtime::ensure_env(&cfg.storage.frontend_dir, &cfg.storage.data_file)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let store = JsonFileStore::new(&cfg.storage.data_file).await?;
    info!(path = %store.path().display(), "record store ready");

    let state = ServerState { records: Arc::new(RecordService::new(Arc::new(store))) };
    Ok(routes::build_router(state, build_cors(), &cfg.storage.frontend_dir))
}

/// Load `config.toml` (or env fallbacks) and validate it.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Public entry: build the app from a loaded config and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr()).await.map_err(StartupError::Io)?;
    let addr = listener.local_addr().map_err(StartupError::Io)?;
    info!(%addr, data_file = %cfg.storage.data_file, "starting milk ledger server");
    axum::serve(listener, app).await?;
    Ok(())
}
