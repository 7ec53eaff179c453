//! Command handlers - recorded tool executions and their attributions.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use scanbase_core::{Command, CommandObject, NewCommand};

use crate::error::HttpError;
use crate::state::AppState;

/// Request body for recording a command.
#[derive(Debug, serde::Deserialize)]
pub struct CreateCommandRequest {
    pub tool: Option<String>,
    pub command: Option<String>,
    pub user: Option<String>,
}

/// List all commands recorded against a workspace.
pub async fn list(
    State(state): State<AppState>,
    Path(workspace): Path<String>,
) -> Result<Json<Vec<Command>>, HttpError> {
    let ws = state.core.workspaces().get_by_name(&workspace).await?;
    Ok(Json(state.core.commands().list(&ws).await?))
}

/// Record a command execution in a workspace.
pub async fn create(
    State(state): State<AppState>,
    Path(workspace): Path<String>,
    Json(req): Json<CreateCommandRequest>,
) -> Result<(StatusCode, Json<Command>), HttpError> {
    let ws = state.core.workspaces().get_by_name(&workspace).await?;
    let command = state
        .core
        .commands()
        .record(
            &ws,
            NewCommand {
                workspace_id: ws.id,
                tool: req.tool.unwrap_or_default(),
                command: req.command.unwrap_or_default(),
                user: req.user.unwrap_or_default(),
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(command)))
}

/// List the objects attributed to a command.
pub async fn objects(
    State(state): State<AppState>,
    Path((workspace, id)): Path<(String, i64)>,
) -> Result<Json<Vec<CommandObject>>, HttpError> {
    let ws = state.core.workspaces().get_by_name(&workspace).await?;
    Ok(Json(state.core.commands().objects(&ws, id).await?))
}
