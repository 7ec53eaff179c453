//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `AppCore` (or, for
//! `serve`, to the Axum adapter). All infrastructure is wired in bootstrap.

use clap::Parser;

use scanbase_cli::{Cli, Commands, WorkspaceCommand, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => handlers::serve::run(port, cli.database).await,
        Commands::Workspace { command } => {
            let ctx = bootstrap(cli.database).await?;
            match command {
                WorkspaceCommand::List => handlers::workspace::list(&ctx).await,
                WorkspaceCommand::Create { name, description } => {
                    handlers::workspace::create(&ctx, name, description).await
                }
            }
        }
    }
}
