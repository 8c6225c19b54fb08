pub mod apply;
pub mod statement;

// Re-export all command functions
pub use apply::cmd_apply;
pub use statement::cmd_statement;

use crate::config::Config;
use crate::db::{PgExecutor, connect_to_database};
use crate::migration::MigrationRunner;
use anyhow::{Result, anyhow};

fn require_database_url(config: &Config) -> Result<&str> {
    config.database.url.as_deref().ok_or_else(|| {
        anyhow!(
            "No database specified.\n\n\
             Executing statements requires a database URL:\n\n\
             • pgddl <command> --database-url postgres://host/db\n\
             • export DATABASE_URL=postgres://host/db\n\
             • Add 'database: {{ url: ... }}' to pgddl.yaml"
        )
    })
}

async fn connect_runner(config: &Config, url: &str) -> Result<MigrationRunner<PgExecutor>> {
    let pool = connect_to_database(url, "database").await?;
    Ok(MigrationRunner::new(
        config.statements.builder(),
        PgExecutor::new(pool),
        config.statements.default_kind,
    ))
}
