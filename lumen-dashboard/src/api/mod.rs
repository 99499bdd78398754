//! API Module
//!
//! HTTP API layer for the dashboard.

pub mod dashboard;
pub mod error;
pub mod health;
pub mod pipeline;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::watch;
use tower_http::trace::TraceLayer;

use crate::refresher::Board;
use crate::service::DashboardService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: DashboardService,

    /// Latest board published by the refresher
    pub board: watch::Receiver<Board>,
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/dashboard", get(dashboard::list_dashboard))
        .route("/api/v1/pipelines", post(pipeline::register_pipeline))
        .route(
            "/api/v1/pipelines/{name}",
            get(pipeline::get_pipeline).delete(pipeline::delete_pipeline),
        )
        .route("/api/v1/pipelines/{name}/events", post(pipeline::post_event))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
