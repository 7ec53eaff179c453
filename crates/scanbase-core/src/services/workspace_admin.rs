//! Workspace administration.

use std::sync::Arc;

use crate::domain::{NewWorkspace, Workspace};
use crate::ports::{CoreError, WorkspaceRepository};

/// Service for workspace management.
pub struct WorkspaceAdmin {
    workspaces: Arc<dyn WorkspaceRepository>,
}

impl WorkspaceAdmin {
    /// Create a new workspace admin service with the given repository.
    pub fn new(workspaces: Arc<dyn WorkspaceRepository>) -> Self {
        Self { workspaces }
    }

    /// List all workspaces.
    pub async fn list(&self) -> Result<Vec<Workspace>, CoreError> {
        Ok(self.workspaces.list().await?)
    }

    /// Resolve a workspace by its URL name.
    pub async fn get_by_name(&self, name: &str) -> Result<Workspace, CoreError> {
        Ok(self.workspaces.get_by_name(name).await?)
    }

    /// Create a workspace.
    ///
    /// Names address workspaces in URLs, so they must be non-empty and
    /// slash-free.
    pub async fn create(&self, new: NewWorkspace) -> Result<Workspace, CoreError> {
        if new.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Workspace name is required".to_string(),
            ));
        }
        if new.name.contains('/') {
            return Err(CoreError::Validation(
                "Workspace name can't contain '/'".to_string(),
            ));
        }
        let workspace = self.workspaces.insert(&new).await?;
        tracing::info!(
            target: "scanbase.workspaces",
            workspace = %workspace.name,
            "workspace created"
        );
        Ok(workspace)
    }

    /// Delete a workspace and everything in it.
    pub async fn delete(&self, workspace: &Workspace) -> Result<(), CoreError> {
        Ok(self.workspaces.delete(workspace.id).await?)
    }
}
