use anyhow::{Context, Result};
use lumen_core::clock::SystemClock;
use lumen_dashboard::api::{self, AppState};
use lumen_dashboard::config::Config;
use lumen_dashboard::refresher::Refresher;
use lumen_dashboard::service::DashboardService;
use lumen_dashboard::store::SnapshotStore;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumen_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Lumen Dashboard...");

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate()?;
    info!(
        "Loaded configuration: bind_addr={}, refresh_interval={:?}, default_team={}",
        config.bind_addr, config.refresh_interval, config.default_team
    );

    let service = DashboardService::new(
        SnapshotStore::new(),
        Arc::new(SystemClock),
        config.default_team.clone(),
    );
    let refresher = Refresher::spawn(service.clone(), config.refresh_interval);

    let app = api::create_router(AppState {
        service,
        board: refresher.subscribe(),
    });

    info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    refresher.shutdown().await;
    info!("Lumen Dashboard stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
