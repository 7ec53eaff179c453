//! Host domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A machine within a workspace. Services hang off hosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    /// Database ID of the host.
    pub id: i64,
    /// Workspace this host belongs to.
    pub workspace_id: i64,
    /// IP address (or resolvable name). Unique within a workspace.
    pub ip: String,
    /// Detected operating system, empty when unknown.
    pub os: String,
    /// Free-form description.
    pub description: String,
    /// Whether the host has been marked as owned/compromised.
    pub owned: bool,
    /// UTC timestamp of when the host was first recorded.
    pub created_at: DateTime<Utc>,
    /// UTC timestamp of the last modification.
    pub updated_at: DateTime<Utc>,
}

/// A host to be inserted (no ID yet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHost {
    pub workspace_id: i64,
    pub ip: String,
    pub os: String,
    pub description: String,
    pub owned: bool,
}
