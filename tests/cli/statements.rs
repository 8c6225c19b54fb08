//! Single-statement commands print rendered SQL without touching a database

use crate::helpers::cli::CliTestHelper;
use predicates::prelude::*;

#[test]
fn test_create_schema_prints_sql() {
    let helper = CliTestHelper::new();
    helper
        .command()
        .args(["create-schema", "app", "--owner", "admin"])
        .assert()
        .success()
        .stdout("CREATE SCHEMA IF NOT EXISTS \"app\" AUTHORIZATION admin;\n");
}

#[test]
fn test_drop_schema_cascade_prints_sql() {
    let helper = CliTestHelper::new();
    helper
        .command()
        .args(["drop-schema", "app", "--cascade"])
        .assert()
        .success()
        .stdout("DROP SCHEMA IF EXISTS \"app\" CASCADE;\n");
}

#[test]
fn test_grant_defaults_to_all_on_table() {
    let helper = CliTestHelper::new();
    helper
        .command()
        .args(["grant", "t1", "role1"])
        .assert()
        .success()
        .stdout("GRANT ALL PRIVILEGES ON TABLE \"t1\" TO GROUP role1;\n");
}

#[test]
fn test_revoke_with_kind_and_privileges() {
    let helper = CliTestHelper::new();
    helper
        .command()
        .args([
            "revoke",
            "users_id_seq",
            "role1",
            "--kind",
            "sequence",
            "--privileges",
            "usage,select",
        ])
        .assert()
        .success()
        .stdout("REVOKE USAGE,SELECT ON SEQUENCE \"users_id_seq\" FROM GROUP role1;\n");
}

#[test]
fn test_default_kind_from_config_file() -> anyhow::Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file(
        "pgddl.yaml",
        "statements:\n  default_kind: schema\n",
    )?;

    helper
        .command()
        .args(["grant", "app", "readers", "--privileges", "USAGE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ON SCHEMA \"app\""));
    Ok(())
}

#[test]
fn test_no_strict_identifiers_flag() {
    let helper = CliTestHelper::new();
    helper
        .command()
        .args(["grant", "t1", "Data-Team"])
        .assert()
        .failure();

    helper
        .command()
        .args(["grant", "t1", "Data-Team", "--no-strict-identifiers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TO GROUP Data-Team"));
}
