//! Command log - recorded tool executions and their object attributions.

use std::sync::Arc;

use crate::domain::{Command, CommandObject, NewCommand, Workspace};
use crate::ports::{CommandRepository, CoreError, RepositoryError};

/// Service for workspace-scoped command recording.
pub struct CommandLog {
    commands: Arc<dyn CommandRepository>,
}

impl CommandLog {
    /// Create a new command log with the given repository.
    pub fn new(commands: Arc<dyn CommandRepository>) -> Self {
        Self { commands }
    }

    /// List all commands recorded against the workspace.
    pub async fn list(&self, workspace: &Workspace) -> Result<Vec<Command>, CoreError> {
        Ok(self.commands.list_for_workspace(workspace.id).await?)
    }

    /// Get a single command, scoped to the workspace.
    pub async fn get(&self, workspace: &Workspace, id: i64) -> Result<Command, CoreError> {
        let command = self.commands.get_by_id(id).await?;
        if command.workspace_id != workspace.id {
            return Err(RepositoryError::NotFound(format!("Command with ID {id}")).into());
        }
        Ok(command)
    }

    /// Record a command execution in the workspace.
    pub async fn record(
        &self,
        workspace: &Workspace,
        mut new: NewCommand,
    ) -> Result<Command, CoreError> {
        if new.tool.trim().is_empty() {
            return Err(CoreError::Validation("Tool name is required".to_string()));
        }
        new.workspace_id = workspace.id;
        Ok(self.commands.insert(&new).await?)
    }

    /// List the objects attributed to a command of this workspace.
    pub async fn objects(
        &self,
        workspace: &Workspace,
        command_id: i64,
    ) -> Result<Vec<CommandObject>, CoreError> {
        let command = self.get(workspace, command_id).await?;
        Ok(self.commands.objects_for_command(command.id).await?)
    }
}
