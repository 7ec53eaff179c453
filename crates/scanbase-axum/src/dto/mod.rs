//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the stable HTTP API contract with explicit
//! serialization control. They decouple internal domain types from the
//! external API representation, which still carries fields from the
//! original document-store era (`_id`, `_rev`, the id/key/value envelope).

pub mod services;

pub use services::{MetadataValue, ServiceListEnvelope, ServiceRow, ServiceValue};
