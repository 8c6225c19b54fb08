use crate::commands::{connect_runner, require_database_url};
use crate::config::Config;
use crate::migration::MigrationStep;
use anyhow::Result;
use tracing::info;

/// Render a single statement, or execute it when `execute` is set
pub async fn cmd_statement(config: &Config, step: MigrationStep, execute: bool) -> Result<()> {
    let builder = config.statements.builder();

    if !execute {
        let rendered = builder.build(&step)?;
        println!("{};", rendered.sql);
        return Ok(());
    }

    let url = require_database_url(config)?;
    info!("Executing {}", step.describe(config.statements.default_kind));
    let runner = connect_runner(config, url).await?;
    runner.run_step(&step).await?;

    Ok(())
}
