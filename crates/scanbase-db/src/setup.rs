//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with full schema. Entry points call this with the
//! resolved database path.

use std::path::Path;

use anyhow::Result;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Establishes a connection to the `SQLite` database file
/// 2. Creates the database file if it doesn't exist
/// 3. Creates all tables and indexes
///
/// # Errors
///
/// Returns an error if the database file cannot be opened or created, or if
/// schema creation fails.
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true),
    )
    .await?;

    create_schema(&pool).await?;

    tracing::debug!(
        target: "scanbase.db",
        database_path = %db_path.display(),
        "database schema ensured"
    );

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    use std::str::FromStr;

    // A single connection keeps every test query on the same in-memory
    // database.
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true),
        )
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// This function creates all tables and indexes required by the application.
/// It is safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS workspaces (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS hosts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            workspace_id INTEGER NOT NULL,
            ip TEXT NOT NULL,
            os TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            owned INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (workspace_id) REFERENCES workspaces(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // A host appears once per workspace
    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_hosts_workspace_ip ON hosts(workspace_id, ip)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            host_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            protocol TEXT NOT NULL,
            port INTEGER NOT NULL,
            status TEXT NOT NULL CHECK (status IN ('open', 'closed', 'filtered')),
            owned INTEGER NOT NULL DEFAULT 0,
            owner TEXT NOT NULL DEFAULT '',
            version TEXT NOT NULL DEFAULT '',
            creator TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (host_id) REFERENCES hosts(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Identity of a service: duplicates are conflicts, not new rows
    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_services_identity \
         ON services(host_id, name, protocol, port)",
    )
    .execute(pool)
    .await?;

    // Index for workspace-scoped listings
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_services_host ON services(host_id)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS commands (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            workspace_id INTEGER NOT NULL,
            tool TEXT NOT NULL,
            command TEXT NOT NULL DEFAULT '',
            user TEXT NOT NULL DEFAULT '',
            start_time TEXT NOT NULL,
            end_time TEXT,
            FOREIGN KEY (workspace_id) REFERENCES workspaces(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS command_objects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            command_id INTEGER NOT NULL,
            object_type TEXT NOT NULL,
            object_id INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            FOREIGN KEY (command_id) REFERENCES commands(id) ON DELETE CASCADE,
            UNIQUE(command_id, object_type, object_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index for command attribution lookups
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_command_objects_command \
         ON command_objects(command_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
