//! Service domain types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Observed state of a network service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Open,
    Closed,
    Filtered,
}

impl ServiceStatus {
    /// The accepted wire spellings, in display order.
    pub const CHOICES: [&'static str; 3] = ["open", "closed", "filtered"];

    /// Parse a wire spelling. Returns `None` for anything outside [`Self::CHOICES`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            "filtered" => Some(Self::Filtered),
            _ => None,
        }
    }

    /// The canonical wire spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Filtered => "filtered",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A network service observed on a host.
///
/// The parent host is fixed at creation time and transitively determines the
/// workspace. The `(host_id, name, protocol, port)` combination identifies a
/// service; creating the same combination twice is a conflict, not a new row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Database ID of the service.
    pub id: i64,
    /// Parent host. Never changes after creation.
    pub host_id: i64,
    /// Service name (e.g. "ssh", "http").
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Transport protocol, lowercased on ingest (e.g. "tcp", "udp").
    pub protocol: String,
    /// Primary port the service listens on.
    pub port: u16,
    /// Observed status.
    pub status: ServiceStatus,
    /// Whether the service has been marked as owned/compromised.
    pub owned: bool,
    /// User the service runs as, empty when unknown.
    pub owner: String,
    /// Detected product version, empty when unknown.
    pub version: String,
    /// Who recorded the service (tool or user), empty when unknown.
    pub creator: String,
    /// UTC timestamp of when the service was first recorded.
    pub created_at: DateTime<Utc>,
    /// UTC timestamp of the last modification.
    pub updated_at: DateTime<Utc>,
}

/// A service to be inserted (no ID yet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewService {
    pub host_id: i64,
    pub name: String,
    pub description: String,
    pub protocol: String,
    pub port: u16,
    pub status: ServiceStatus,
    pub owned: bool,
    pub owner: String,
    pub version: String,
    pub creator: String,
}

/// A full-object service update, as sent by PUT requests.
///
/// `parent` is optional: clients may omit it, but naming a host other than
/// the current parent is rejected.
#[derive(Debug, Clone)]
pub struct ServiceUpdate {
    pub name: String,
    pub description: String,
    pub protocol: String,
    pub port: u16,
    pub status: ServiceStatus,
    pub owned: bool,
    pub owner: String,
    pub version: String,
    pub parent: Option<i64>,
}
