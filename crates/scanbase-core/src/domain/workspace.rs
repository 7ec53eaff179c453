//! Workspace domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workspace: the project boundary every finding lives in.
///
/// Hosts, services and commands are always reached through a workspace;
/// nothing is shared across workspaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Database ID of the workspace.
    pub id: i64,
    /// Unique workspace name, used to address the workspace in URLs.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// UTC timestamp of when the workspace was created.
    pub created_at: DateTime<Utc>,
}

/// A workspace to be inserted (no ID yet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkspace {
    pub name: String,
    pub description: String,
}
