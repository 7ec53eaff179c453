//! Core services - business rules over the repository ports.

pub mod app_core;
pub mod command_log;
pub mod host_inventory;
pub mod service_directory;
pub mod workspace_admin;

pub use app_core::AppCore;
pub use command_log::CommandLog;
pub use host_inventory::HostInventory;
pub use service_directory::ServiceDirectory;
pub use workspace_admin::WorkspaceAdmin;
