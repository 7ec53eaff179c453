//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Workspace server for network scan findings.
#[derive(Debug, Parser)]
#[command(name = "scanbase", version, about)]
pub struct Cli {
    /// Database file to use (defaults to the platform data directory).
    #[arg(long, global = true, env = "SCANBASE_DB")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value_t = 5985)]
        port: u16,
    },
    /// Manage workspaces.
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum WorkspaceCommand {
    /// List workspaces.
    List,
    /// Create a workspace.
    Create {
        /// Workspace name (used in API URLs).
        name: String,
        /// Free-form description.
        #[arg(long, default_value = "")]
        description: String,
    },
}
