use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over a fresh in-memory store, with the configured body cap
pub fn build_app(config: &AppConfig) -> Router {
    let state = AppState::new(
        std::sync::Arc::new(service::items::InMemoryItemStore::new()),
        config.api.max_body_bytes,
    );
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only by process exit");
        std::future::pending::<()>().await;
    }
    info!(service = "server", event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: build the app and serve until Ctrl+C
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&config);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, max_body_bytes = config.api.max_body_bytes, "starting server crate");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
