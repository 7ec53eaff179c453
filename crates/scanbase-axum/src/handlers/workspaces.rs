//! Workspace handlers - CRUD for the workspace resource.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use scanbase_core::{NewWorkspace, Workspace};

use crate::error::HttpError;
use crate::state::AppState;

/// Request body for creating a workspace.
#[derive(Debug, serde::Deserialize)]
pub struct CreateWorkspaceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// List all workspaces.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Workspace>>, HttpError> {
    Ok(Json(state.core.workspaces().list().await?))
}

/// Get a single workspace by name.
pub async fn get(
    State(state): State<AppState>,
    Path(workspace): Path<String>,
) -> Result<Json<Workspace>, HttpError> {
    Ok(Json(state.core.workspaces().get_by_name(&workspace).await?))
}

/// Create a new workspace.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateWorkspaceRequest>,
) -> Result<(StatusCode, Json<Workspace>), HttpError> {
    let workspace = state
        .core
        .workspaces()
        .create(NewWorkspace {
            name: req.name.unwrap_or_default(),
            description: req.description.unwrap_or_default(),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(workspace)))
}
