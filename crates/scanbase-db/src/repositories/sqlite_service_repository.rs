//! `SQLite` implementation of the `ServiceRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use scanbase_core::{NewService, RepositoryError, Service, ServiceRepository};

use super::row_mappers::{SERVICE_SELECT_COLUMNS, map_sqlx_error, row_to_service};

/// `SQLite` implementation of the `ServiceRepository` trait.
///
/// This struct holds a connection pool and implements all CRUD operations
/// for services using `SQLite`. Workspace scoping goes through the parent
/// host, so listings filter on the hosts table.
pub struct SqliteServiceRepository {
    pool: SqlitePool,
}

impl SqliteServiceRepository {
    /// Create a new `SQLite` service repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for SqliteServiceRepository {
    async fn list_for_workspace(
        &self,
        workspace_id: i64,
    ) -> Result<Vec<Service>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM services \
             WHERE host_id IN (SELECT id FROM hosts WHERE workspace_id = ?) \
             ORDER BY id",
            SERVICE_SELECT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(workspace_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_service).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Service, RepositoryError> {
        let query = format!("SELECT {} FROM services WHERE id = ?", SERVICE_SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Service with ID {id}")))?;

        row_to_service(&row)
    }

    async fn find_by_identity(
        &self,
        host_id: i64,
        name: &str,
        protocol: &str,
        port: u16,
    ) -> Result<Option<Service>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM services \
             WHERE host_id = ? AND name = ? AND protocol = ? AND port = ?",
            SERVICE_SELECT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(host_id)
            .bind(name)
            .bind(protocol)
            .bind(i64::from(port))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_service).transpose()
    }

    async fn insert(&self, service: &NewService) -> Result<Service, RepositoryError> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO services (host_id, name, description, protocol, port, status, \
             owned, owner, version, creator, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(service.host_id)
        .bind(&service.name)
        .bind(&service.description)
        .bind(&service.protocol)
        .bind(i64::from(service.port))
        .bind(service.status.as_str())
        .bind(service.owned)
        .bind(&service.owner)
        .bind(&service.version)
        .bind(&service.creator)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn update(&self, service: &Service) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE services SET name = ?, description = ?, protocol = ?, port = ?, \
             status = ?, owned = ?, owner = ?, version = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&service.name)
        .bind(&service.description)
        .bind(&service.protocol)
        .bind(i64::from(service.port))
        .bind(service.status.as_str())
        .bind(service.owned)
        .bind(&service.owner)
        .bind(&service.version)
        .bind(service.updated_at)
        .bind(service.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Service with ID {}",
                service.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Service with ID {id}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{SqliteHostRepository, SqliteWorkspaceRepository};
    use crate::setup::setup_test_database;
    use scanbase_core::{
        HostRepository, NewHost, NewWorkspace, ServiceStatus, WorkspaceRepository,
    };

    async fn host_id(pool: &SqlitePool, workspace: &str, ip: &str) -> i64 {
        let ws = SqliteWorkspaceRepository::new(pool.clone())
            .insert(&NewWorkspace {
                name: workspace.to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        SqliteHostRepository::new(pool.clone())
            .insert(&NewHost {
                workspace_id: ws.id,
                ip: ip.to_string(),
                os: String::new(),
                description: String::new(),
                owned: false,
            })
            .await
            .unwrap()
            .id
    }

    fn ssh(host_id: i64) -> NewService {
        NewService {
            host_id,
            name: "ssh".to_string(),
            description: String::new(),
            protocol: "tcp".to_string(),
            port: 22,
            status: ServiceStatus::Open,
            owned: false,
            owner: String::new(),
            version: "OpenSSH 9.6".to_string(),
            creator: String::new(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_by_identity() {
        let pool = setup_test_database().await.unwrap();
        let host = host_id(&pool, "alpha", "10.0.0.1").await;
        let repo = SqliteServiceRepository::new(pool);

        let created = repo.insert(&ssh(host)).await.unwrap();
        assert_eq!(created.port, 22);
        assert_eq!(created.status, ServiceStatus::Open);
        assert_eq!(created.version, "OpenSSH 9.6");

        let found = repo
            .find_by_identity(host, "ssh", "tcp", 22)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);

        assert!(
            repo.find_by_identity(host, "ssh", "udp", 22)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_identity_is_rejected() {
        let pool = setup_test_database().await.unwrap();
        let host = host_id(&pool, "alpha", "10.0.0.1").await;
        let repo = SqliteServiceRepository::new(pool);

        repo.insert(&ssh(host)).await.unwrap();
        let err = repo.insert(&ssh(host)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_update_persists_fields() {
        let pool = setup_test_database().await.unwrap();
        let host = host_id(&pool, "alpha", "10.0.0.1").await;
        let repo = SqliteServiceRepository::new(pool);

        let mut service = repo.insert(&ssh(host)).await.unwrap();
        service.port = 2222;
        service.status = ServiceStatus::Filtered;
        service.updated_at = Utc::now();
        repo.update(&service).await.unwrap();

        let fetched = repo.get_by_id(service.id).await.unwrap();
        assert_eq!(fetched.port, 2222);
        assert_eq!(fetched.status, ServiceStatus::Filtered);
    }

    #[tokio::test]
    async fn test_update_missing_returns_not_found() {
        let pool = setup_test_database().await.unwrap();
        let host = host_id(&pool, "alpha", "10.0.0.1").await;
        let repo = SqliteServiceRepository::new(pool);

        let mut service = repo.insert(&ssh(host)).await.unwrap();
        repo.delete(service.id).await.unwrap();

        service.port = 23;
        let err = repo.update(&service).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_scopes_by_workspace() {
        let pool = setup_test_database().await.unwrap();
        let first = host_id(&pool, "alpha", "10.0.0.1").await;
        let second = host_id(&pool, "beta", "10.0.0.2").await;
        let repo = SqliteServiceRepository::new(pool.clone());

        repo.insert(&ssh(first)).await.unwrap();
        repo.insert(&ssh(second)).await.unwrap();

        let ws = SqliteWorkspaceRepository::new(pool)
            .get_by_name("alpha")
            .await
            .unwrap();
        let services = repo.list_for_workspace(ws.id).await.unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].host_id, first);
    }
}
