//! VectorShield web UI server.
//!
//! Reads config from the environment, renders the index page once, and serves
//! until Ctrl-C.

use tracing_subscriber::{fmt, EnvFilter};

use vectorshield_core::error::{Result, WebUiError};
use vectorshield_webui::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "vectorshield-webui failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    let listen = cfg.listen_addr()?;
    let api_base_url = cfg.api_base_url.clone();
    let environment = cfg.environment;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, %api_base_url, ?environment, "vectorshield-webui starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| WebUiError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WebUiError::Internal(format!("server failed: {e}")))?;

    tracing::info!("vectorshield-webui stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
}
