//! Service directory - workspace-scoped service operations.
//!
//! This service owns the business rules of the service resource:
//!
//! - a service is created under a parent host of the *same* workspace
//! - the parent never changes after creation
//! - `(host, name, protocol, port)` is unique; duplicate creates surface
//!   the existing service instead of inserting a new row
//! - a create may be attributed to a previously recorded command

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{NewService, Service, ServiceUpdate, Workspace};
use crate::ports::{
    CommandRepository, CoreError, HostRepository, RepositoryError, ServiceRepository,
};

/// Service for workspace-scoped service CRUD.
pub struct ServiceDirectory {
    services: Arc<dyn ServiceRepository>,
    hosts: Arc<dyn HostRepository>,
    commands: Arc<dyn CommandRepository>,
}

impl ServiceDirectory {
    /// Create a new service directory with the given repositories.
    pub fn new(
        services: Arc<dyn ServiceRepository>,
        hosts: Arc<dyn HostRepository>,
        commands: Arc<dyn CommandRepository>,
    ) -> Self {
        Self {
            services,
            hosts,
            commands,
        }
    }

    /// List all services belonging to the workspace.
    pub async fn list(&self, workspace: &Workspace) -> Result<Vec<Service>, CoreError> {
        Ok(self.services.list_for_workspace(workspace.id).await?)
    }

    /// Get a single service, scoped to the workspace.
    ///
    /// A service whose parent host lives in another workspace is reported
    /// as not found, never leaked.
    pub async fn get(&self, workspace: &Workspace, id: i64) -> Result<Service, CoreError> {
        let service = self.services.get_by_id(id).await?;
        let host = self.hosts.get_by_id(service.host_id).await?;
        if host.workspace_id != workspace.id {
            return Err(RepositoryError::NotFound(format!("Service with ID {id}")).into());
        }
        Ok(service)
    }

    /// Create a service under a host of this workspace.
    ///
    /// With `command_id`, the created service is attributed to that command.
    /// The command must belong to the same workspace.
    pub async fn create(
        &self,
        workspace: &Workspace,
        mut new: NewService,
        command_id: Option<i64>,
    ) -> Result<Service, CoreError> {
        new.protocol = new.protocol.to_lowercase();

        // The parent must exist in the request's workspace. A host from
        // another workspace is indistinguishable from a missing one.
        let host = match self.hosts.get_by_id(new.host_id).await {
            Ok(host) => host,
            Err(RepositoryError::NotFound(_)) => {
                return Err(CoreError::Validation(format!(
                    "Host with id {} not found",
                    new.host_id
                )));
            }
            Err(e) => return Err(e.into()),
        };
        if host.workspace_id != workspace.id {
            return Err(CoreError::Validation(format!(
                "Host with id {} not found",
                new.host_id
            )));
        }

        // Validate the command before inserting so a bad command_id does not
        // leave an unattributed service behind.
        if let Some(command_id) = command_id {
            let command = match self.commands.get_by_id(command_id).await {
                Ok(command) => command,
                Err(RepositoryError::NotFound(_)) => {
                    return Err(CoreError::Validation(format!(
                        "Command with id {command_id} not found"
                    )));
                }
                Err(e) => return Err(e.into()),
            };
            if command.workspace_id != workspace.id {
                return Err(CoreError::Validation(format!(
                    "Command with id {command_id} not found"
                )));
            }
        }

        if let Some(existing) = self
            .services
            .find_by_identity(new.host_id, &new.name, &new.protocol, new.port)
            .await?
        {
            return Err(CoreError::Duplicate(Box::new(existing)));
        }

        let created = match self.services.insert(&new).await {
            Ok(service) => service,
            // Lost a race with an identical create; surface the winner.
            Err(RepositoryError::AlreadyExists(_)) => {
                return match self
                    .services
                    .find_by_identity(new.host_id, &new.name, &new.protocol, new.port)
                    .await?
                {
                    Some(existing) => Err(CoreError::Duplicate(Box::new(existing))),
                    None => Err(CoreError::Internal(
                        "duplicate service vanished during create".to_string(),
                    )),
                };
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(command_id) = command_id {
            self.commands
                .link_object(command_id, "service", created.id)
                .await?;
        }

        tracing::debug!(
            target: "scanbase.services",
            service_id = created.id,
            host_id = created.host_id,
            port = created.port,
            "service created"
        );
        Ok(created)
    }

    /// Apply a full-object update to a service of this workspace.
    ///
    /// Rejects any attempt to move the service to a different parent host.
    pub async fn update(
        &self,
        workspace: &Workspace,
        id: i64,
        update: ServiceUpdate,
    ) -> Result<Service, CoreError> {
        let mut service = self.get(workspace, id).await?;

        if let Some(parent) = update.parent {
            if parent != service.host_id {
                return Err(CoreError::Validation(
                    "Can't change service parent.".to_string(),
                ));
            }
        }

        service.name = update.name;
        service.description = update.description;
        service.protocol = update.protocol.to_lowercase();
        service.port = update.port;
        service.status = update.status;
        service.owned = update.owned;
        service.owner = update.owner;
        service.version = update.version;
        service.updated_at = Utc::now();

        self.services.update(&service).await?;

        tracing::debug!(
            target: "scanbase.services",
            service_id = service.id,
            status = %service.status,
            "service updated"
        );
        Ok(service)
    }

    /// Delete a service of this workspace.
    pub async fn delete(&self, workspace: &Workspace, id: i64) -> Result<(), CoreError> {
        let service = self.get(workspace, id).await?;
        Ok(self.services.delete(service.id).await?)
    }
}
