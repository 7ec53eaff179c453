//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use scanbase_core::{
    Command, CommandObject, Host, RepositoryError, Service, ServiceStatus, Workspace,
};

/// Shared SELECT column list for workspace queries.
pub const WORKSPACE_SELECT_COLUMNS: &str = "id, name, description, created_at";

/// Shared SELECT column list for host queries.
pub const HOST_SELECT_COLUMNS: &str =
    "id, workspace_id, ip, os, description, owned, created_at, updated_at";

/// Shared SELECT column list for service queries.
pub const SERVICE_SELECT_COLUMNS: &str = "id, host_id, name, description, protocol, port, \
     status, owned, owner, version, creator, created_at, updated_at";

/// Shared SELECT column list for command queries.
pub const COMMAND_SELECT_COLUMNS: &str =
    "id, workspace_id, tool, command, user, start_time, end_time";

/// Shared SELECT column list for command object queries.
pub const COMMAND_OBJECT_SELECT_COLUMNS: &str =
    "id, command_id, object_type, object_id, created_at";

/// Map a sqlx error into a `RepositoryError`.
///
/// Unique-constraint violations become `AlreadyExists` so services can turn
/// them into conflicts; everything else is a storage error.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db)
            if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            RepositoryError::AlreadyExists(db.message().to_string())
        }
        _ => RepositoryError::Storage(e.to_string()),
    }
}

fn get<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(column)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

/// Parse a database row into a Workspace.
pub fn row_to_workspace(row: &SqliteRow) -> Result<Workspace, RepositoryError> {
    Ok(Workspace {
        id: get(row, "id")?,
        name: get(row, "name")?,
        description: get(row, "description")?,
        created_at: get::<DateTime<Utc>>(row, "created_at")?,
    })
}

/// Parse a database row into a Host.
pub fn row_to_host(row: &SqliteRow) -> Result<Host, RepositoryError> {
    Ok(Host {
        id: get(row, "id")?,
        workspace_id: get(row, "workspace_id")?,
        ip: get(row, "ip")?,
        os: get(row, "os")?,
        description: get(row, "description")?,
        owned: get(row, "owned")?,
        created_at: get::<DateTime<Utc>>(row, "created_at")?,
        updated_at: get::<DateTime<Utc>>(row, "updated_at")?,
    })
}

/// Parse a database row into a Service.
pub fn row_to_service(row: &SqliteRow) -> Result<Service, RepositoryError> {
    let port: i64 = get(row, "port")?;
    let port = u16::try_from(port)
        .map_err(|_| RepositoryError::Serialization(format!("port {port} out of range")))?;

    let status: String = get(row, "status")?;
    let status = ServiceStatus::parse(&status)
        .ok_or_else(|| RepositoryError::Serialization(format!("invalid status '{status}'")))?;

    Ok(Service {
        id: get(row, "id")?,
        host_id: get(row, "host_id")?,
        name: get(row, "name")?,
        description: get(row, "description")?,
        protocol: get(row, "protocol")?,
        port,
        status,
        owned: get(row, "owned")?,
        owner: get(row, "owner")?,
        version: get(row, "version")?,
        creator: get(row, "creator")?,
        created_at: get::<DateTime<Utc>>(row, "created_at")?,
        updated_at: get::<DateTime<Utc>>(row, "updated_at")?,
    })
}

/// Parse a database row into a Command.
pub fn row_to_command(row: &SqliteRow) -> Result<Command, RepositoryError> {
    Ok(Command {
        id: get(row, "id")?,
        workspace_id: get(row, "workspace_id")?,
        tool: get(row, "tool")?,
        command: get(row, "command")?,
        user: get(row, "user")?,
        start_time: get::<DateTime<Utc>>(row, "start_time")?,
        end_time: get::<Option<DateTime<Utc>>>(row, "end_time")?,
    })
}

/// Parse a database row into a CommandObject.
pub fn row_to_command_object(row: &SqliteRow) -> Result<CommandObject, RepositoryError> {
    Ok(CommandObject {
        id: get(row, "id")?,
        command_id: get(row, "command_id")?,
        object_type: get(row, "object_type")?,
        object_id: get(row, "object_id")?,
        created_at: get::<DateTime<Utc>>(row, "created_at")?,
    })
}
