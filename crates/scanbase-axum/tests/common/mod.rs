//! Shared helpers for scanbase-axum integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use scanbase_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use scanbase_axum::routes::create_router;
use scanbase_core::services::AppCore;
use scanbase_core::{
    Command, Host, NewCommand, NewHost, NewService, Service, ServiceStatus, Workspace,
};

/// A bootstrapped router over a throwaway database, plus direct access to
/// the core services for fixtures and side-effect assertions.
pub struct TestApp {
    router: Router,
    pub core: Arc<AppCore>,
    _dir: tempfile::TempDir,
}

/// Bootstrap the full stack against a tempfile database.
pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        port: 0, // Not used: requests go through oneshot
        database_path: dir.path().join("scanbase.db"),
        cors: CorsConfig::AllowAll,
    };
    let ctx = bootstrap(config).await.unwrap();
    let core = Arc::clone(&ctx.core);

    TestApp {
        router: create_router(ctx, &CorsConfig::AllowAll),
        core,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}

// ============================================================================
// Fixtures - created through the core services, asserted through HTTP
// ============================================================================

pub async fn workspace(app: &TestApp, name: &str) -> Workspace {
    app.core
        .workspaces()
        .create(scanbase_core::NewWorkspace {
            name: name.to_string(),
            description: String::new(),
        })
        .await
        .unwrap()
}

pub async fn host(app: &TestApp, ws: &Workspace, ip: &str) -> Host {
    app.core
        .hosts()
        .create(
            ws,
            NewHost {
                workspace_id: ws.id,
                ip: ip.to_string(),
                os: String::new(),
                description: String::new(),
                owned: false,
            },
        )
        .await
        .unwrap()
}

pub async fn service(
    app: &TestApp,
    ws: &Workspace,
    host: &Host,
    name: &str,
    port: u16,
) -> Service {
    app.core
        .services()
        .create(
            ws,
            NewService {
                host_id: host.id,
                name: name.to_string(),
                description: String::new(),
                protocol: "tcp".to_string(),
                port,
                status: ServiceStatus::Open,
                owned: false,
                owner: String::new(),
                version: String::new(),
                creator: String::new(),
            },
            None,
        )
        .await
        .unwrap()
}

pub async fn command(app: &TestApp, ws: &Workspace) -> Command {
    app.core
        .commands()
        .record(
            ws,
            NewCommand {
                workspace_id: ws.id,
                tool: "nmap".to_string(),
                command: "nmap -sV 10.0.0.0/24".to_string(),
                user: String::new(),
            },
        )
        .await
        .unwrap()
}

/// The canonical valid create payload.
pub fn service_payload(parent: i64) -> Value {
    json!({
        "name": "ftp",
        "description": "test. test",
        "owned": false,
        "ports": [21],
        "protocol": "tcp",
        "status": "open",
        "parent": parent
    })
}

/// A full-object PUT payload as the original web UI sends it, junk fields
/// included.
pub fn webui_payload(id: i64, parent: Option<i64>, status: &str, ports: Value) -> Value {
    let mut payload = json!({
        "status": status,
        "protocol": "tcp",
        "description": "",
        "_rev": "",
        "metadata": {
            "update_time": 1_510_945_708_000_i64,
            "update_user": "",
            "update_action": 0,
            "creator": "",
            "create_time": 1_510_945_708_000_i64,
            "update_controller_action": "",
            "owner": "leonardo",
            "command_id": null
        },
        "owned": false,
        "owner": "",
        "version": "",
        "_id": id,
        "ports": ports,
        "name": "ssh2",
        "type": "Service"
    });
    if let Some(parent) = parent {
        payload["parent"] = json!(parent);
    }
    payload
}
