//! CLI error handling tests
//!
//! Tests that verify pgddl provides helpful error messages for common error scenarios.

use crate::helpers::cli::CliTestHelper;
use anyhow::Result;
use predicates::prelude::*;

#[test]
fn test_unknown_kind_error() {
    let helper = CliTestHelper::new();
    helper
        .command()
        .args(["grant", "t1", "role1", "--kind", "badkind"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unsupported target kind 'badkind'"));
}

#[test]
fn test_unsupported_privilege_error() {
    let helper = CliTestHelper::new();
    helper
        .command()
        .args(["grant", "t1", "role1", "--privileges", "EXECUTE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Privilege 'EXECUTE' not supported for table",
        ));
}

#[test]
fn test_execute_without_database_url() {
    let helper = CliTestHelper::new();
    helper
        .command()
        .args(["create-schema", "app", "--execute"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No database specified"));
}

#[test]
fn test_invalid_config_yaml_error() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("pgddl.yaml", "invalid: yaml: content: [unbalanced")?;

    helper
        .command()
        .args(["create-schema", "app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
    Ok(())
}

#[test]
fn test_missing_plan_file() {
    let helper = CliTestHelper::new();
    helper
        .command()
        .args(["apply", "missing.yaml", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read migration plan"));
}
