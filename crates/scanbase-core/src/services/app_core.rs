//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, web)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::ports::Repos;

use super::{CommandLog, HostInventory, ServiceDirectory, WorkspaceAdmin};

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root (main.rs or bootstrap.rs) with concrete
/// repository implementations.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos);
///
/// let services = core.services().list(&workspace).await?;
/// ```
pub struct AppCore {
    workspaces: WorkspaceAdmin,
    hosts: HostInventory,
    services: ServiceDirectory,
    commands: CommandLog,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            workspaces: WorkspaceAdmin::new(repos.workspaces),
            hosts: HostInventory::new(repos.hosts.clone()),
            services: ServiceDirectory::new(repos.services, repos.hosts, repos.commands.clone()),
            commands: CommandLog::new(repos.commands),
        }
    }

    /// Access the workspace admin service.
    pub const fn workspaces(&self) -> &WorkspaceAdmin {
        &self.workspaces
    }

    /// Access the host inventory service.
    pub const fn hosts(&self) -> &HostInventory {
        &self.hosts
    }

    /// Access the service directory.
    pub const fn services(&self) -> &ServiceDirectory {
        &self.services
    }

    /// Access the command log.
    pub const fn commands(&self) -> &CommandLog {
        &self.commands
    }
}
