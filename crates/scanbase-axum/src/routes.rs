//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `AppCore` facade.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix (for nesting under /api).
///
/// Returns a router typed as `Router<AppState>` (state inferred from
/// handlers) but WITHOUT `.with_state()` applied. The caller must apply
/// `.with_state()` before nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Workspaces API
        .route(
            "/ws",
            get(handlers::workspaces::list).post(handlers::workspaces::create),
        )
        .route("/ws/{workspace}", get(handlers::workspaces::get))
        // Hosts API
        .route(
            "/ws/{workspace}/hosts",
            get(handlers::hosts::list).post(handlers::hosts::create),
        )
        .route("/ws/{workspace}/hosts/{id}", get(handlers::hosts::get))
        // Services API
        .route(
            "/ws/{workspace}/services",
            get(handlers::services::list).post(handlers::services::create),
        )
        .route(
            "/ws/{workspace}/services/{id}",
            get(handlers::services::get)
                .put(handlers::services::update)
                .delete(handlers::services::remove),
        )
        // Commands API
        .route(
            "/ws/{workspace}/commands",
            get(handlers::commands::list).post(handlers::commands::create),
        )
        .route(
            "/ws/{workspace}/commands/{id}/objects",
            get(handlers::commands::objects),
        )
}

/// Create the main Axum router with all API routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{workspace}`, `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state).layer(cors))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
