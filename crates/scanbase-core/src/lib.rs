#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Command, CommandObject, Host, NewCommand, NewHost, NewService, NewWorkspace, Service,
    ServiceStatus, ServiceUpdate, Workspace,
};
pub use ports::{
    CommandRepository, CoreError, HostRepository, Repos, RepositoryError, ServiceRepository,
    WorkspaceRepository,
};
pub use services::{AppCore, CommandLog, HostInventory, ServiceDirectory, WorkspaceAdmin};
