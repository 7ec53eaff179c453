//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use std::sync::Arc;

use sqlx::SqlitePool;

use scanbase_core::services::AppCore;
use scanbase_core::Repos;

use crate::repositories::{
    SqliteCommandRepository, SqliteHostRepository, SqliteServiceRepository,
    SqliteWorkspaceRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
///
/// This struct provides composition utilities only - no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a `SQLite` connection pool.
    ///
    /// # Arguments
    ///
    /// * `db_url` - `SQLite` connection URL (e.g., "sqlite:~/.scanbase/scanbase.db")
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    /// Returns a `Repos` struct from `scanbase-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteWorkspaceRepository::new(pool.clone())),
            Arc::new(SqliteHostRepository::new(pool.clone())),
            Arc::new(SqliteServiceRepository::new(pool.clone())),
            Arc::new(SqliteCommandRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// This is the recommended single-step way for adapters to obtain
    /// a fully composed `AppCore`. Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos);
    /// ```
    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }

    /// Create a workspace repository from a pool.
    pub fn workspace_repository(pool: SqlitePool) -> Arc<SqliteWorkspaceRepository> {
        Arc::new(SqliteWorkspaceRepository::new(pool))
    }

    /// Create a host repository from a pool.
    pub fn host_repository(pool: SqlitePool) -> Arc<SqliteHostRepository> {
        Arc::new(SqliteHostRepository::new(pool))
    }

    /// Create a service repository from a pool.
    pub fn service_repository(pool: SqlitePool) -> Arc<SqliteServiceRepository> {
        Arc::new(SqliteServiceRepository::new(pool))
    }

    /// Create a command repository from a pool.
    pub fn command_repository(pool: SqlitePool) -> Arc<SqliteCommandRepository> {
        Arc::new(SqliteCommandRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with full schema already applied.
/// Matches the production schema to ensure test parity.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Build an `AppCore` backed by this test database.
    pub fn app_core(&self) -> AppCore {
        CoreFactory::build_app_core(self.pool.clone())
    }

    /// Create a workspace repository using this test database.
    pub fn workspace_repository(&self) -> SqliteWorkspaceRepository {
        SqliteWorkspaceRepository::new(self.pool.clone())
    }

    /// Create a host repository using this test database.
    pub fn host_repository(&self) -> SqliteHostRepository {
        SqliteHostRepository::new(self.pool.clone())
    }

    /// Create a service repository using this test database.
    pub fn service_repository(&self) -> SqliteServiceRepository {
        SqliteServiceRepository::new(self.pool.clone())
    }

    /// Create a command repository using this test database.
    pub fn command_repository(&self) -> SqliteCommandRepository {
        SqliteCommandRepository::new(self.pool.clone())
    }
}
