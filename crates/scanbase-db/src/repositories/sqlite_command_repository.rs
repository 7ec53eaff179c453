//! `SQLite` implementation of the `CommandRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use scanbase_core::{Command, CommandObject, CommandRepository, NewCommand, RepositoryError};

use super::row_mappers::{
    COMMAND_OBJECT_SELECT_COLUMNS, COMMAND_SELECT_COLUMNS, map_sqlx_error, row_to_command,
    row_to_command_object,
};

/// `SQLite` implementation of the `CommandRepository` trait.
pub struct SqliteCommandRepository {
    pool: SqlitePool,
}

impl SqliteCommandRepository {
    /// Create a new `SQLite` command repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommandRepository for SqliteCommandRepository {
    async fn list_for_workspace(
        &self,
        workspace_id: i64,
    ) -> Result<Vec<Command>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM commands WHERE workspace_id = ? ORDER BY id",
            COMMAND_SELECT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(workspace_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_command).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Command, RepositoryError> {
        let query = format!("SELECT {} FROM commands WHERE id = ?", COMMAND_SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Command with ID {id}")))?;

        row_to_command(&row)
    }

    async fn insert(&self, command: &NewCommand) -> Result<Command, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO commands (workspace_id, tool, command, user, start_time) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(command.workspace_id)
        .bind(&command.tool)
        .bind(&command.command)
        .bind(&command.user)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn link_object(
        &self,
        command_id: i64,
        object_type: &str,
        object_id: i64,
    ) -> Result<CommandObject, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO command_objects (command_id, object_type, object_id, created_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(command_id)
        .bind(object_type)
        .bind(object_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let query = format!(
            "SELECT {} FROM command_objects WHERE id = ?",
            COMMAND_OBJECT_SELECT_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(result.last_insert_rowid())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row_to_command_object(&row)
    }

    async fn objects_for_command(
        &self,
        command_id: i64,
    ) -> Result<Vec<CommandObject>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM command_objects WHERE command_id = ? ORDER BY id",
            COMMAND_OBJECT_SELECT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(command_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_command_object).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SqliteWorkspaceRepository;
    use crate::setup::setup_test_database;
    use scanbase_core::{NewWorkspace, WorkspaceRepository};

    async fn command(pool: &SqlitePool) -> Command {
        let ws = SqliteWorkspaceRepository::new(pool.clone())
            .insert(&NewWorkspace {
                name: "alpha".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        SqliteCommandRepository::new(pool.clone())
            .insert(&NewCommand {
                workspace_id: ws.id,
                tool: "nmap".to_string(),
                command: "nmap -sV 10.0.0.0/24".to_string(),
                user: "root".to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_records_start_time() {
        let pool = setup_test_database().await.unwrap();
        let cmd = command(&pool).await;

        assert_eq!(cmd.tool, "nmap");
        assert_eq!(cmd.user, "root");
        assert!(cmd.end_time.is_none());
    }

    #[tokio::test]
    async fn test_link_and_list_objects() {
        let pool = setup_test_database().await.unwrap();
        let cmd = command(&pool).await;
        let repo = SqliteCommandRepository::new(pool);

        assert!(repo.objects_for_command(cmd.id).await.unwrap().is_empty());

        let link = repo.link_object(cmd.id, "service", 7).await.unwrap();
        assert_eq!(link.command_id, cmd.id);
        assert_eq!(link.object_type, "service");
        assert_eq!(link.object_id, 7);

        let objects = repo.objects_for_command(cmd.id).await.unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].object_id, 7);
    }

    #[tokio::test]
    async fn test_duplicate_link_is_rejected() {
        let pool = setup_test_database().await.unwrap();
        let cmd = command(&pool).await;
        let repo = SqliteCommandRepository::new(pool);

        repo.link_object(cmd.id, "service", 7).await.unwrap();
        let err = repo.link_object(cmd.id, "service", 7).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }
}
