//! `SQLite` implementation of the `HostRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use scanbase_core::{Host, HostRepository, NewHost, RepositoryError};

use super::row_mappers::{HOST_SELECT_COLUMNS, map_sqlx_error, row_to_host};

/// `SQLite` implementation of the `HostRepository` trait.
pub struct SqliteHostRepository {
    pool: SqlitePool,
}

impl SqliteHostRepository {
    /// Create a new `SQLite` host repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HostRepository for SqliteHostRepository {
    async fn list_for_workspace(&self, workspace_id: i64) -> Result<Vec<Host>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM hosts WHERE workspace_id = ? ORDER BY id",
            HOST_SELECT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(workspace_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_host).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Host, RepositoryError> {
        let query = format!("SELECT {} FROM hosts WHERE id = ?", HOST_SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Host with ID {id}")))?;

        row_to_host(&row)
    }

    async fn insert(&self, host: &NewHost) -> Result<Host, RepositoryError> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO hosts (workspace_id, ip, os, description, owned, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(host.workspace_id)
        .bind(&host.ip)
        .bind(&host.os)
        .bind(&host.description)
        .bind(host.owned)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM hosts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Host with ID {id}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SqliteWorkspaceRepository;
    use crate::setup::setup_test_database;
    use scanbase_core::{NewWorkspace, WorkspaceRepository};

    async fn workspace_id(pool: &SqlitePool) -> i64 {
        SqliteWorkspaceRepository::new(pool.clone())
            .insert(&NewWorkspace {
                name: "alpha".to_string(),
                description: String::new(),
            })
            .await
            .unwrap()
            .id
    }

    fn new_host(workspace_id: i64, ip: &str) -> NewHost {
        NewHost {
            workspace_id,
            ip: ip.to_string(),
            os: "linux".to_string(),
            description: String::new(),
            owned: false,
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_for_workspace() {
        let pool = setup_test_database().await.unwrap();
        let ws = workspace_id(&pool).await;
        let repo = SqliteHostRepository::new(pool);

        let created = repo.insert(&new_host(ws, "10.0.0.1")).await.unwrap();
        assert_eq!(created.ip, "10.0.0.1");
        assert_eq!(created.os, "linux");

        let hosts = repo.list_for_workspace(ws).await.unwrap();
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].id, created.id);
    }

    #[tokio::test]
    async fn test_duplicate_ip_in_workspace_is_rejected() {
        let pool = setup_test_database().await.unwrap();
        let ws = workspace_id(&pool).await;
        let repo = SqliteHostRepository::new(pool);

        repo.insert(&new_host(ws, "10.0.0.1")).await.unwrap();
        let err = repo.insert(&new_host(ws, "10.0.0.1")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_returns_not_found() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteHostRepository::new(pool);

        let err = repo.delete(42).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
