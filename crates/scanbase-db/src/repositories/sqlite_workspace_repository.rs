//! `SQLite` implementation of the `WorkspaceRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use scanbase_core::{NewWorkspace, RepositoryError, Workspace, WorkspaceRepository};

use super::row_mappers::{WORKSPACE_SELECT_COLUMNS, map_sqlx_error, row_to_workspace};

/// `SQLite` implementation of the `WorkspaceRepository` trait.
pub struct SqliteWorkspaceRepository {
    pool: SqlitePool,
}

impl SqliteWorkspaceRepository {
    /// Create a new `SQLite` workspace repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkspaceRepository for SqliteWorkspaceRepository {
    async fn list(&self) -> Result<Vec<Workspace>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM workspaces ORDER BY name",
            WORKSPACE_SELECT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_workspace).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Workspace, RepositoryError> {
        let query = format!(
            "SELECT {} FROM workspaces WHERE id = ?",
            WORKSPACE_SELECT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Workspace with ID {id}")))?;

        row_to_workspace(&row)
    }

    async fn get_by_name(&self, name: &str) -> Result<Workspace, RepositoryError> {
        let query = format!(
            "SELECT {} FROM workspaces WHERE name = ?",
            WORKSPACE_SELECT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Workspace '{name}'")))?;

        row_to_workspace(&row)
    }

    async fn insert(&self, workspace: &NewWorkspace) -> Result<Workspace, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO workspaces (name, description, created_at) VALUES (?, ?, ?)",
        )
        .bind(&workspace.name)
        .bind(&workspace.description)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM workspaces WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Workspace with ID {id}")));
        }

        Ok(())
    }
}
