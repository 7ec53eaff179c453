//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. Command handlers receive the fully-composed
//! `AppCore` and delegate work to it.

use std::path::PathBuf;

use anyhow::Result;

use scanbase_core::paths::database_path;
use scanbase_core::services::AppCore;
use scanbase_db::{CoreFactory, setup_database};

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Bootstrap the CLI against the given database (or the default location).
pub async fn bootstrap(database: Option<PathBuf>) -> Result<CliContext> {
    let db_path = match database {
        Some(path) => path,
        None => database_path()?,
    };

    tracing::debug!(
        target: "scanbase.paths",
        database_path = %db_path.display(),
        "CLI bootstrap resolved paths"
    );

    let pool = setup_database(&db_path).await?;
    Ok(CliContext {
        app: CoreFactory::build_app_core(pool),
    })
}
