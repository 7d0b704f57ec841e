//! vitals gateway
//!
//! - Request metrics for every route (`obs::instrument`)
//! - `/health`, `/health/json`, `/readyz`
//! - Graceful shutdown with draining readiness

use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use vitals_core::error::{Result, VitalsError};
use vitals_gateway::{app_state::AppState, config, router, shutdown};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.client_code().as_str(), error = %e, "vitals-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    let listen = cfg.gateway.listen_addr()?;

    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    tracing::info!(%listen, service = %state.cfg().health.service_name, "vitals-gateway starting");
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| VitalsError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal(state.clone()))
        .await
        .map_err(|e| VitalsError::Internal(format!("server failed: {e}")))?;

    let totals = state.metrics().snapshot();
    tracing::info!(
        total = totals.total,
        failed = totals.failed,
        "vitals-gateway stopped"
    );
    Ok(())
}
