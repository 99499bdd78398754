//! Pipeline API Handlers
//!
//! Registration, inspection and event ingest for single pipelines.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use lumen_core::domain::display::DisplayDescriptor;
use lumen_core::dto::pipeline::{PipelineEvent, RegisterPipeline};

use crate::api::AppState;
use crate::api::error::ApiResult;

/// POST /api/v1/pipelines
pub async fn register_pipeline(
    State(state): State<AppState>,
    Json(req): Json<RegisterPipeline>,
) -> ApiResult<(StatusCode, Json<DisplayDescriptor>)> {
    tracing::info!("Registering pipeline: {}", req.name);

    let descriptor = state.service.register(req).await?;
    Ok((StatusCode::CREATED, Json(descriptor)))
}

/// GET /api/v1/pipelines/{name}
/// Derived at request time rather than read from the published board
pub async fn get_pipeline(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<DisplayDescriptor>> {
    tracing::debug!("Getting pipeline: {}", name);

    let descriptor = state.service.describe(&name).await?;
    Ok(Json(descriptor))
}

/// POST /api/v1/pipelines/{name}/events
pub async fn post_event(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(event): Json<PipelineEvent>,
) -> ApiResult<Json<DisplayDescriptor>> {
    let descriptor = state.service.apply_event(&name, event).await?;
    Ok(Json(descriptor))
}

/// DELETE /api/v1/pipelines/{name}
pub async fn delete_pipeline(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting pipeline: {}", name);

    state.service.remove(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
