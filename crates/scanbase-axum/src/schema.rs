//! Service payload validation.
//!
//! Payloads are deserialized permissively (every field optional, unknown
//! fields ignored) and then checked field by field, so one request reports
//! all of its problems at once. The message spellings are part of the API
//! contract and older clients match on them.

use serde::Deserialize;

use scanbase_core::{NewService, ServiceStatus, ServiceUpdate};

use crate::error::{HttpError, SchemaMessages};

const MISSING_FIELD: &str = "Missing data for required field.";
const INVALID_CHOICE: &str = "Not a valid choice.";
const PARENT_REQUIRED: &str = "Parent id is required";
const PORTS_EMPTY: &str = "Shorter than minimum length 1.";
const PORT_RANGE: &str = "Must be between 1 and 65535.";

/// Raw service payload as sent by clients (create and update).
///
/// All fields are optional at this level; validation decides what the
/// operation requires. Clients built against the original web UI send
/// extra fields (`metadata`, `_rev`, `_id`, `type`, ...) which are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ServicePayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub owned: Option<bool>,
    pub owner: Option<String>,
    pub ports: Option<Vec<i64>>,
    pub protocol: Option<String>,
    pub status: Option<String>,
    pub version: Option<String>,
    pub parent: Option<i64>,
}

/// Validate a create payload into a `NewService`.
///
/// The parent is required on create and reported under `_schema`, matching
/// the original API's behavior.
pub fn validate_create(payload: &ServicePayload) -> Result<NewService, HttpError> {
    let mut messages = SchemaMessages::default();

    let name = require_string(payload.name.as_deref(), "name", &mut messages);
    let protocol = require_string(payload.protocol.as_deref(), "protocol", &mut messages);
    let status = require_status(payload.status.as_deref(), &mut messages);
    let port = require_port(payload.ports.as_deref(), &mut messages);
    if payload.parent.is_none() {
        messages.push("_schema", PARENT_REQUIRED);
    }

    match (name, protocol, status, port, payload.parent) {
        (Some(name), Some(protocol), Some(status), Some(port), Some(parent))
            if messages.is_empty() =>
        {
            Ok(NewService {
                host_id: parent,
                name,
                description: payload.description.clone().unwrap_or_default(),
                protocol,
                port,
                status,
                owned: payload.owned.unwrap_or_default(),
                owner: payload.owner.clone().unwrap_or_default(),
                version: payload.version.clone().unwrap_or_default(),
                creator: String::new(),
            })
        }
        _ => Err(HttpError::SchemaInvalid(messages)),
    }
}

/// Validate an update payload into a `ServiceUpdate`.
///
/// Updates are full-object PUTs: the same fields are required as on create,
/// except that the parent may be omitted.
pub fn validate_update(payload: &ServicePayload) -> Result<ServiceUpdate, HttpError> {
    let mut messages = SchemaMessages::default();

    let name = require_string(payload.name.as_deref(), "name", &mut messages);
    let protocol = require_string(payload.protocol.as_deref(), "protocol", &mut messages);
    let status = require_status(payload.status.as_deref(), &mut messages);
    let port = require_port(payload.ports.as_deref(), &mut messages);

    match (name, protocol, status, port) {
        (Some(name), Some(protocol), Some(status), Some(port)) if messages.is_empty() => {
            Ok(ServiceUpdate {
                name,
                description: payload.description.clone().unwrap_or_default(),
                protocol,
                port,
                status,
                owned: payload.owned.unwrap_or_default(),
                owner: payload.owner.clone().unwrap_or_default(),
                version: payload.version.clone().unwrap_or_default(),
                parent: payload.parent,
            })
        }
        _ => Err(HttpError::SchemaInvalid(messages)),
    }
}

fn require_string(
    value: Option<&str>,
    field: &str,
    messages: &mut SchemaMessages,
) -> Option<String> {
    match value {
        Some(s) => Some(s.to_string()),
        None => {
            messages.push(field, MISSING_FIELD);
            None
        }
    }
}

fn require_status(
    value: Option<&str>,
    messages: &mut SchemaMessages,
) -> Option<ServiceStatus> {
    match value {
        Some(s) => match ServiceStatus::parse(s) {
            Some(status) => Some(status),
            None => {
                messages.push("status", INVALID_CHOICE);
                None
            }
        },
        None => {
            messages.push("status", MISSING_FIELD);
            None
        }
    }
}

/// The API accepts a list of ports but only the first is stored; the rest
/// were never persisted by earlier releases either.
fn require_port(ports: Option<&[i64]>, messages: &mut SchemaMessages) -> Option<u16> {
    match ports {
        Some([]) => {
            messages.push("ports", PORTS_EMPTY);
            None
        }
        Some(&[first, ..]) => match u16::try_from(first) {
            Ok(port) if port > 0 => Some(port),
            _ => {
                messages.push("ports", PORT_RANGE);
                None
            }
        },
        None => {
            messages.push("ports", MISSING_FIELD);
            None
        }
    }
}
