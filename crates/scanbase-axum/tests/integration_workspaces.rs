//! Integration tests for the workspace and host resources.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{host, spawn_app, workspace};

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = spawn_app().await;

    let (status, _body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn workspace_create_and_list_roundtrip() {
    let app = spawn_app().await;

    let (status, body) = app
        .post("/api/ws", json!({"name": "alpha", "description": "first"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "alpha");

    let (status, body) = app.get("/api/ws").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["alpha"]);

    let (status, body) = app.get("/api/ws/alpha").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "first");
}

#[tokio::test]
async fn workspace_duplicate_name_returns_conflict() {
    let app = spawn_app().await;
    workspace(&app, "alpha").await;

    let (status, _body) = app.post("/api/ws", json!({"name": "alpha"})).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn workspace_empty_name_is_rejected() {
    let app = spawn_app().await;

    let (status, body) = app.post("/api/ws", json!({"name": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("name is required"));

    let (status, _body) = app.post("/api/ws", json!({"name": "a/b"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn host_create_and_list_roundtrip() {
    let app = spawn_app().await;
    let ws = workspace(&app, "alpha").await;

    let (status, body) = app
        .post(
            "/api/ws/alpha/hosts",
            json!({"ip": "10.0.0.1", "os": "linux"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["workspace_id"], ws.id);
    let id = body["id"].as_i64().unwrap();

    let (status, body) = app.get("/api/ws/alpha/hosts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let uri = format!("/api/ws/alpha/hosts/{id}");
    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ip"], "10.0.0.1");
}

#[tokio::test]
async fn host_requires_ip() {
    let app = spawn_app().await;
    workspace(&app, "alpha").await;

    let (status, body) = app.post("/api/ws/alpha/hosts", json!({"os": "linux"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("ip is required"));
}

#[tokio::test]
async fn host_duplicate_ip_returns_conflict() {
    let app = spawn_app().await;
    let ws = workspace(&app, "alpha").await;
    host(&app, &ws, "10.0.0.1").await;

    let (status, _body) = app
        .post("/api/ws/alpha/hosts", json!({"ip": "10.0.0.1"}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn host_list_is_scoped_to_workspace() {
    let app = spawn_app().await;
    let ws = workspace(&app, "alpha").await;
    host(&app, &ws, "10.0.0.1").await;
    let second = workspace(&app, "beta").await;
    host(&app, &second, "10.0.0.2").await;

    let (status, body) = app.get("/api/ws/beta/hosts").await;
    assert_eq!(status, StatusCode::OK);
    let hosts = body.as_array().unwrap();
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0]["ip"], "10.0.0.2");
}

#[tokio::test]
async fn command_record_and_objects_roundtrip() {
    let app = spawn_app().await;
    workspace(&app, "alpha").await;

    let (status, body) = app
        .post(
            "/api/ws/alpha/commands",
            json!({"tool": "nmap", "command": "nmap -sV 10.0.0.1"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();

    let uri = format!("/api/ws/alpha/commands/{id}/objects");
    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn command_requires_tool() {
    let app = spawn_app().await;
    workspace(&app, "alpha").await;

    let (status, _body) = app.post("/api/ws/alpha/commands", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
