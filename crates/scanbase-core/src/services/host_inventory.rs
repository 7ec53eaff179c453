//! Host inventory - workspace-scoped host operations.

use std::sync::Arc;

use crate::domain::{Host, NewHost, Workspace};
use crate::ports::{CoreError, HostRepository, RepositoryError};

/// Service for workspace-scoped host CRUD.
pub struct HostInventory {
    hosts: Arc<dyn HostRepository>,
}

impl HostInventory {
    /// Create a new host inventory with the given repository.
    pub fn new(hosts: Arc<dyn HostRepository>) -> Self {
        Self { hosts }
    }

    /// List all hosts of the workspace.
    pub async fn list(&self, workspace: &Workspace) -> Result<Vec<Host>, CoreError> {
        Ok(self.hosts.list_for_workspace(workspace.id).await?)
    }

    /// Get a single host, scoped to the workspace.
    pub async fn get(&self, workspace: &Workspace, id: i64) -> Result<Host, CoreError> {
        let host = self.hosts.get_by_id(id).await?;
        if host.workspace_id != workspace.id {
            return Err(RepositoryError::NotFound(format!("Host with ID {id}")).into());
        }
        Ok(host)
    }

    /// Create a host in the workspace. The ip is required and unique within
    /// the workspace.
    pub async fn create(&self, workspace: &Workspace, mut new: NewHost) -> Result<Host, CoreError> {
        if new.ip.trim().is_empty() {
            return Err(CoreError::Validation("Host ip is required".to_string()));
        }
        new.workspace_id = workspace.id;
        Ok(self.hosts.insert(&new).await?)
    }

    /// Delete a host of this workspace (and, through the storage layer, its
    /// services).
    pub async fn delete(&self, workspace: &Workspace, id: i64) -> Result<(), CoreError> {
        let host = self.get(workspace, id).await?;
        Ok(self.hosts.delete(host.id).await?)
    }
}
