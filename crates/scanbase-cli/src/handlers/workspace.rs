//! `workspace` - list and create workspaces from the command line.

use anyhow::Result;

use scanbase_core::NewWorkspace;

use crate::bootstrap::CliContext;

/// Print all workspaces, one per line.
pub async fn list(ctx: &CliContext) -> Result<()> {
    let workspaces = ctx.app().workspaces().list().await?;
    if workspaces.is_empty() {
        println!("No workspaces yet. Create one with: scanbase workspace create <name>");
        return Ok(());
    }
    for workspace in workspaces {
        if workspace.description.is_empty() {
            println!("{}", workspace.name);
        } else {
            println!("{}  {}", workspace.name, workspace.description);
        }
    }
    Ok(())
}

/// Create a workspace and print its id.
pub async fn create(ctx: &CliContext, name: String, description: String) -> Result<()> {
    let workspace = ctx
        .app()
        .workspaces()
        .create(NewWorkspace { name, description })
        .await?;
    println!("Created workspace '{}' (id {})", workspace.name, workspace.id);
    Ok(())
}
