//! Serialized service shapes for the HTTP contract.

use chrono::{DateTime, Utc};
use serde::Serialize;

use scanbase_core::{Service, ServiceStatus};

/// Metadata block carried by every serialized service.
///
/// The field set predates this implementation; clients expect all of them
/// present even where this server has nothing to report.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataValue {
    pub command_id: Option<i64>,
    pub create_time: DateTime<Utc>,
    pub creator: String,
    pub owner: String,
    pub update_action: i64,
    pub update_controller_action: String,
    pub update_time: DateTime<Utc>,
    pub update_user: String,
}

/// A service as clients see it.
///
/// `id` and `_id` are the same value; `_rev` and `credentials` are
/// compatibility artifacts (`_rev` is always empty, `credentials` counts
/// attached credentials, a feature outside this surface).
#[derive(Debug, Clone, Serialize)]
pub struct ServiceValue {
    pub id: i64,
    #[serde(rename = "_id")]
    pub legacy_id: i64,
    #[serde(rename = "_rev")]
    pub rev: String,
    pub name: String,
    pub description: String,
    pub port: u16,
    pub ports: Vec<u16>,
    pub protocol: String,
    pub status: ServiceStatus,
    pub owned: bool,
    pub owner: String,
    pub version: String,
    pub credentials: i64,
    pub parent: i64,
    pub host_id: i64,
    pub metadata: MetadataValue,
}

impl From<&Service> for ServiceValue {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id,
            legacy_id: service.id,
            rev: String::new(),
            name: service.name.clone(),
            description: service.description.clone(),
            port: service.port,
            ports: vec![service.port],
            protocol: service.protocol.clone(),
            status: service.status,
            owned: service.owned,
            owner: service.owner.clone(),
            version: service.version.clone(),
            credentials: 0,
            parent: service.host_id,
            host_id: service.host_id,
            metadata: MetadataValue {
                command_id: None,
                create_time: service.created_at,
                creator: service.creator.clone(),
                owner: service.owner.clone(),
                update_action: 0,
                update_controller_action: String::new(),
                update_time: service.updated_at,
                update_user: String::new(),
            },
        }
    }
}

/// One row of the backwards-compatible service listing.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRow {
    pub id: i64,
    /// Mirrors `id`; kept for clients written against the old listing.
    pub key: i64,
    pub value: ServiceValue,
}

/// The backwards-compatible service list envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceListEnvelope {
    pub services: Vec<ServiceRow>,
}

impl ServiceListEnvelope {
    /// Build the envelope from domain services.
    pub fn new(services: &[Service]) -> Self {
        Self {
            services: services
                .iter()
                .map(|service| ServiceRow {
                    id: service.id,
                    key: service.id,
                    value: ServiceValue::from(service),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn service() -> Service {
        Service {
            id: 7,
            host_id: 3,
            name: "ssh".to_string(),
            description: String::new(),
            protocol: "tcp".to_string(),
            port: 22,
            status: ServiceStatus::Open,
            owned: false,
            owner: "root".to_string(),
            version: String::new(),
            creator: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn value_carries_legacy_fields() {
        let json = serde_json::to_value(ServiceValue::from(&service())).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["_id"], 7);
        assert_eq!(json["_rev"], "");
        assert_eq!(json["credentials"], 0);
        assert_eq!(json["status"], "open");
        assert_eq!(json["ports"], serde_json::json!([22]));
        assert_eq!(json["parent"], 3);
        assert!(json["metadata"]["create_time"].is_string());
    }

    #[test]
    fn envelope_mirrors_id_into_key() {
        let envelope = ServiceListEnvelope::new(&[service()]);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["services"][0]["id"], 7);
        assert_eq!(json["services"][0]["key"], 7);
        assert_eq!(json["services"][0]["value"]["name"], "ssh");
    }
}
