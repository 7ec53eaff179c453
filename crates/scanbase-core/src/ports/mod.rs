//! Port definitions (trait abstractions) for storage backends.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused
//! - Workspace scoping is expressed through explicit `workspace_id`
//!   parameters, never through ambient state

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    Command, CommandObject, Host, NewCommand, NewHost, NewService, NewWorkspace, Service,
    Workspace,
};

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx
/// errors) and provides a clean interface for services to handle storage
/// failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain. Adapters
/// map this to their own error types (HTTP status codes, CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input or violated business rule).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A create duplicated an existing service's identifying fields.
    /// Carries the existing service so adapters can surface it.
    #[error("Existing value")]
    Duplicate(Box<Service>),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository for workspaces.
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Workspace>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Workspace, RepositoryError>;
    async fn get_by_name(&self, name: &str) -> Result<Workspace, RepositoryError>;
    async fn insert(&self, workspace: &NewWorkspace) -> Result<Workspace, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

/// Repository for hosts.
#[async_trait]
pub trait HostRepository: Send + Sync {
    async fn list_for_workspace(&self, workspace_id: i64) -> Result<Vec<Host>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Host, RepositoryError>;
    async fn insert(&self, host: &NewHost) -> Result<Host, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

/// Repository for services.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn list_for_workspace(&self, workspace_id: i64)
    -> Result<Vec<Service>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Service, RepositoryError>;
    /// Look up a service by its identifying fields. Returns `Ok(None)` when
    /// no such service exists (this is not an error condition).
    async fn find_by_identity(
        &self,
        host_id: i64,
        name: &str,
        protocol: &str,
        port: u16,
    ) -> Result<Option<Service>, RepositoryError>;
    async fn insert(&self, service: &NewService) -> Result<Service, RepositoryError>;
    async fn update(&self, service: &Service) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

/// Repository for commands and their object attributions.
#[async_trait]
pub trait CommandRepository: Send + Sync {
    async fn list_for_workspace(&self, workspace_id: i64)
    -> Result<Vec<Command>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Command, RepositoryError>;
    async fn insert(&self, command: &NewCommand) -> Result<Command, RepositoryError>;
    async fn link_object(
        &self,
        command_id: i64,
        object_type: &str,
        object_id: i64,
    ) -> Result<CommandObject, RepositoryError>;
    async fn objects_for_command(
        &self,
        command_id: i64,
    ) -> Result<Vec<CommandObject>, RepositoryError>;
}

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across
/// adapters without coupling them to concrete implementations. It lives in
/// `scanbase-core` so that `AppCore` can accept it without depending on
/// `scanbase-db`.
#[derive(Clone)]
pub struct Repos {
    /// Workspace repository.
    pub workspaces: Arc<dyn WorkspaceRepository>,
    /// Host repository.
    pub hosts: Arc<dyn HostRepository>,
    /// Service repository.
    pub services: Arc<dyn ServiceRepository>,
    /// Command repository.
    pub commands: Arc<dyn CommandRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        workspaces: Arc<dyn WorkspaceRepository>,
        hosts: Arc<dyn HostRepository>,
        services: Arc<dyn ServiceRepository>,
        commands: Arc<dyn CommandRepository>,
    ) -> Self {
        Self {
            workspaces,
            hosts,
            services,
            commands,
        }
    }
}
