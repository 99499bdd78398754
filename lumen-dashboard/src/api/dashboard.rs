//! Dashboard API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use lumen_core::domain::display::DisplayDescriptor;
use serde::Deserialize;

use crate::api::AppState;
use crate::service::dashboard_service;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub team: Option<String>,
}

/// GET /api/v1/dashboard?team={team}
/// Latest published board: the team's pipelines plus public ones
pub async fn list_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Json<Vec<DisplayDescriptor>> {
    tracing::debug!("Listing dashboard for team {:?}", query.team);

    let board = state.board.borrow().clone();
    Json(dashboard_service::visible_to(&board, query.team.as_deref()))
}
