//! `SQLite` implementations of the core repository ports.

pub mod row_mappers;
pub mod sqlite_command_repository;
pub mod sqlite_host_repository;
pub mod sqlite_service_repository;
pub mod sqlite_workspace_repository;

pub use sqlite_command_repository::SqliteCommandRepository;
pub use sqlite_host_repository::SqliteHostRepository;
pub use sqlite_service_repository::SqliteServiceRepository;
pub use sqlite_workspace_repository::SqliteWorkspaceRepository;
