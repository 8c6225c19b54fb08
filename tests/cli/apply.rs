//! `pgddl apply --dry-run` renders a plan without a database

use crate::helpers::cli::CliTestHelper;
use anyhow::Result;
use predicates::prelude::*;

const PLAN: &str = r#"steps:
  - action: create_schema
    name: app
  - action: grant
    target: app
    role: readers
    kind: schema
    privileges: USAGE
  - action: revoke
    target: app.users
    role: interns
"#;

#[test]
fn test_apply_dry_run_prints_every_statement() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("plan.yaml", PLAN)?;

    helper
        .command()
        .args(["apply", "plan.yaml", "--dry-run"])
        .assert()
        .success()
        .stdout(
            "-- create schema app\n\
             CREATE SCHEMA IF NOT EXISTS \"app\";\n\
             -- grant on schema app to readers\n\
             GRANT USAGE ON SCHEMA \"app\" TO GROUP readers;\n\
             -- revoke on table app.users from interns (destructive)\n\
             REVOKE ALL PRIVILEGES ON TABLE \"app\".\"users\" FROM GROUP interns;\n",
        )
        .stderr(predicate::str::contains("3 statements rendered (1 destructive)"));
    Ok(())
}

#[test]
fn test_apply_dry_run_reports_invalid_step() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file(
        "plan.yaml",
        "steps:\n  - action: grant\n    target: t1\n    role: r1\n    privileges: EXECUTE\n",
    )?;

    helper
        .command()
        .args(["apply", "plan.yaml", "--dry-run"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("Step 1 of 1 is invalid")
                .and(predicate::str::contains("Privilege 'EXECUTE' not supported for table")),
        );
    Ok(())
}

#[test]
fn test_apply_empty_plan() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("plan.yaml", "steps: []\n")?;

    helper
        .command()
        .args(["apply", "plan.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to apply"));
    Ok(())
}
