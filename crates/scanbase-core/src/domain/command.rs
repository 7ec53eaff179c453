//! Command domain types.
//!
//! A command records a tool execution within a workspace. Objects created
//! while the command ran (services, hosts) are attributed to it through
//! [`CommandObject`] join rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    /// Database ID of the command.
    pub id: i64,
    /// Workspace the command ran against.
    pub workspace_id: i64,
    /// Tool name (e.g. "nmap").
    pub tool: String,
    /// Full command line as executed.
    pub command: String,
    /// User who ran the command, empty when unknown.
    pub user: String,
    /// UTC timestamp of when the command started.
    pub start_time: DateTime<Utc>,
    /// UTC timestamp of when the command finished, if it has.
    pub end_time: Option<DateTime<Utc>>,
}

/// A command to be inserted (no ID yet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCommand {
    pub workspace_id: i64,
    pub tool: String,
    pub command: String,
    pub user: String,
}

/// Attribution of an object to the command that created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandObject {
    /// Database ID of the join row.
    pub id: i64,
    /// The command that produced the object.
    pub command_id: i64,
    /// Kind of the attributed object (e.g. "service", "host").
    pub object_type: String,
    /// Database ID of the attributed object.
    pub object_id: i64,
    /// UTC timestamp of when the attribution was recorded.
    pub created_at: DateTime<Utc>,
}
