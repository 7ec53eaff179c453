//! `serve` - run the HTTP API server.

use std::path::PathBuf;

use anyhow::Result;

use scanbase_axum::{ServerConfig, start_server};

/// Start the API server on the given port.
pub async fn run(port: u16, database: Option<PathBuf>) -> Result<()> {
    let mut config = ServerConfig::with_defaults()?;
    config.port = port;
    if let Some(database) = database {
        config = config.with_database_path(database);
    }
    start_server(config).await
}
