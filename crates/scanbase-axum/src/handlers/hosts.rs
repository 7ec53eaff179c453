//! Host handlers - workspace-scoped host resource.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use scanbase_core::{Host, NewHost};

use crate::error::HttpError;
use crate::state::AppState;

/// Request body for creating a host.
#[derive(Debug, serde::Deserialize)]
pub struct CreateHostRequest {
    pub ip: Option<String>,
    pub os: Option<String>,
    pub description: Option<String>,
    pub owned: Option<bool>,
}

/// List all hosts of a workspace.
pub async fn list(
    State(state): State<AppState>,
    Path(workspace): Path<String>,
) -> Result<Json<Vec<Host>>, HttpError> {
    let ws = state.core.workspaces().get_by_name(&workspace).await?;
    Ok(Json(state.core.hosts().list(&ws).await?))
}

/// Get a single host.
pub async fn get(
    State(state): State<AppState>,
    Path((workspace, id)): Path<(String, i64)>,
) -> Result<Json<Host>, HttpError> {
    let ws = state.core.workspaces().get_by_name(&workspace).await?;
    Ok(Json(state.core.hosts().get(&ws, id).await?))
}

/// Create a host in a workspace.
pub async fn create(
    State(state): State<AppState>,
    Path(workspace): Path<String>,
    Json(req): Json<CreateHostRequest>,
) -> Result<(StatusCode, Json<Host>), HttpError> {
    let ws = state.core.workspaces().get_by_name(&workspace).await?;
    let host = state
        .core
        .hosts()
        .create(
            &ws,
            NewHost {
                workspace_id: ws.id,
                ip: req.ip.unwrap_or_default(),
                os: req.os.unwrap_or_default(),
                description: req.description.unwrap_or_default(),
                owned: req.owned.unwrap_or_default(),
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(host)))
}
