use crate::commands::{connect_runner, require_database_url};
use crate::config::Config;
use crate::migration::{MigrationPlan, load_plan};
use crate::render::{RenderedSql, Safety};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use tracing::info;

pub async fn cmd_apply(config: &Config, plan_path: &Path, dry_run: bool) -> Result<()> {
    let plan = load_plan(plan_path)?;
    info!(
        "Loaded {} steps from {}",
        plan.steps.len(),
        plan_path.display()
    );

    if plan.steps.is_empty() {
        println!("No steps in {} - nothing to apply", plan_path.display());
        return Ok(());
    }

    if dry_run {
        return print_plan(config, &plan);
    }

    let url = require_database_url(config)?;
    println!("Applying {}", plan_path.display());
    let runner = connect_runner(config, url).await?;
    let reports = runner.run_plan(&plan).await?;

    let destructive = reports
        .iter()
        .filter(|report| report.safety == Safety::Destructive)
        .count();
    if destructive > 0 {
        info!("{} destructive statements executed", destructive);
    }

    Ok(())
}

/// Render the whole plan without touching the database
fn print_plan(config: &Config, plan: &MigrationPlan) -> Result<()> {
    let builder = config.statements.builder();
    let default_kind = config.statements.default_kind;

    let mut rendered = Vec::with_capacity(plan.steps.len());
    for (index, step) in plan.steps.iter().enumerate() {
        let statement = builder.build(step).with_context(|| {
            format!(
                "Step {} of {} is invalid ({})",
                index + 1,
                plan.steps.len(),
                step.describe(default_kind)
            )
        })?;
        rendered.push((step.describe(default_kind), statement));
    }

    for (description, statement) in &rendered {
        println!("{}", plan_comment(description, statement));
        println!("{};", statement.sql);
    }

    let destructive = rendered
        .iter()
        .filter(|(_, statement)| statement.safety == Safety::Destructive)
        .count();
    eprintln!(
        "{} Dry run: {} statements rendered ({} destructive), nothing executed",
        style("ℹ").cyan(),
        rendered.len(),
        destructive
    );

    Ok(())
}

fn plan_comment(description: &str, statement: &RenderedSql) -> String {
    match statement.safety {
        Safety::Safe => format!("-- {}", description),
        Safety::Destructive => format!("-- {} (destructive)", description),
    }
}
