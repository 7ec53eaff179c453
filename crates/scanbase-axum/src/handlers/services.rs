//! Service handlers - the workspace-scoped service resource.
//!
//! Create accepts an optional `command_id` query parameter attributing the
//! new service to a recorded command. The list endpoint keeps the
//! id/key/value envelope older clients depend on.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::dto::services::{ServiceListEnvelope, ServiceValue};
use crate::error::HttpError;
use crate::schema::{self, ServicePayload};
use crate::state::AppState;

/// Query parameters accepted by service create.
#[derive(Debug, Default, serde::Deserialize)]
pub struct CreateServiceQuery {
    pub command_id: Option<i64>,
}

/// List all services of a workspace (backwards-compatible envelope).
pub async fn list(
    State(state): State<AppState>,
    Path(workspace): Path<String>,
) -> Result<Json<ServiceListEnvelope>, HttpError> {
    let ws = state.core.workspaces().get_by_name(&workspace).await?;
    let services = state.core.services().list(&ws).await?;
    Ok(Json(ServiceListEnvelope::new(&services)))
}

/// Get a single service.
pub async fn get(
    State(state): State<AppState>,
    Path((workspace, id)): Path<(String, i64)>,
) -> Result<Json<ServiceValue>, HttpError> {
    let ws = state.core.workspaces().get_by_name(&workspace).await?;
    let service = state.core.services().get(&ws, id).await?;
    Ok(Json(ServiceValue::from(&service)))
}

/// Create a service under a host of this workspace.
pub async fn create(
    State(state): State<AppState>,
    Path(workspace): Path<String>,
    Query(query): Query<CreateServiceQuery>,
    Json(payload): Json<ServicePayload>,
) -> Result<(StatusCode, Json<ServiceValue>), HttpError> {
    let ws = state.core.workspaces().get_by_name(&workspace).await?;
    let new = schema::validate_create(&payload)?;
    let service = state
        .core
        .services()
        .create(&ws, new, query.command_id)
        .await?;
    Ok((StatusCode::CREATED, Json(ServiceValue::from(&service))))
}

/// Apply a full-object update to a service.
pub async fn update(
    State(state): State<AppState>,
    Path((workspace, id)): Path<(String, i64)>,
    Json(payload): Json<ServicePayload>,
) -> Result<Json<ServiceValue>, HttpError> {
    let ws = state.core.workspaces().get_by_name(&workspace).await?;
    let update = schema::validate_update(&payload)?;
    let service = state.core.services().update(&ws, id, update).await?;
    Ok(Json(ServiceValue::from(&service)))
}

/// Delete a service.
pub async fn remove(
    State(state): State<AppState>,
    Path((workspace, id)): Path<(String, i64)>,
) -> Result<StatusCode, HttpError> {
    let ws = state.core.workspaces().get_by_name(&workspace).await?;
    state.core.services().delete(&ws, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
