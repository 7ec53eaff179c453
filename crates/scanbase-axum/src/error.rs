//! Axum-specific error types and mappings.
//!
//! This module provides error types for the Axum adapter and mappings
//! from `CoreError` to HTTP status codes and response bodies.
//!
//! The wire shapes are part of the public API contract: plain failures are
//! `{"message": ...}`, schema failures add a field-keyed `messages` map, and
//! duplicate-create conflicts embed the existing object under `object`.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use scanbase_core::{CoreError, RepositoryError};

use crate::dto::services::ServiceValue;

/// Field-keyed validation messages.
///
/// Keys are payload field names; the pseudo-field `_schema` carries
/// messages about the payload as a whole.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaMessages(BTreeMap<String, Vec<String>>);

impl SchemaMessages {
    /// Record a message against a field.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    /// Whether any message has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (violated business rule).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Bad request (payload failed schema validation).
    #[error("Validation failed")]
    SchemaInvalid(SchemaMessages),

    /// Conflict (resource already exists). Carries the existing object
    /// when the conflicting resource is known.
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        object: Option<serde_json::Value>,
    },

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    /// Field-keyed validation messages for schema failures
    #[serde(skip_serializing_if = "Option::is_none")]
    messages: Option<SchemaMessages>,
    /// The existing object for duplicate-create conflicts
    #[serde(skip_serializing_if = "Option::is_none")]
    object: Option<serde_json::Value>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, messages, object) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None, None),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None, None),
            HttpError::SchemaInvalid(messages) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(messages),
                None,
            ),
            HttpError::Conflict { message, object } => {
                (StatusCode::CONFLICT, message, None, object)
            }
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None, None),
        };

        let body = ErrorBody {
            message,
            messages,
            object,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(msg) => HttpError::BadRequest(msg),
            CoreError::Duplicate(existing) => HttpError::Conflict {
                message: "Existing value".to_string(),
                object: serde_json::to_value(ServiceValue::from(existing.as_ref())).ok(),
            },
            CoreError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => HttpError::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => HttpError::Conflict {
                message: msg,
                object: None,
            },
            RepositoryError::Storage(msg) => HttpError::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => {
                HttpError::Internal(format!("Serialization: {msg}"))
            }
            RepositoryError::Constraint(msg) => HttpError::BadRequest(msg),
        }
    }
}
