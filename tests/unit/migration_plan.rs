//! Plan file loading and step rendering

use anyhow::Result;
use pgddl::StatementBuilder;
use pgddl::catalog::TargetKind;
use pgddl::migration::load_plan;
use pgddl::render::Safety;
use std::fs;
use tempfile::TempDir;

const PLAN: &str = r#"
steps:
  - action: create_schema
    name: reporting
    owner: report_admin
  - action: grant
    target: reporting
    role: analysts
    kind: schema
    privileges: usage
  - action: grant
    target: reporting.daily_totals
    role: analysts
    privileges: select
  - action: revoke
    target: reporting.daily_totals
    role: interns
  - action: drop_schema
    name: reporting_old
    cascade: true
"#;

#[test]
fn test_load_plan_and_render() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("plan.yaml");
    fs::write(&path, PLAN)?;

    let plan = load_plan(&path)?;
    assert_eq!(plan.steps.len(), 5);

    let builder = StatementBuilder::new();
    let rendered = plan
        .steps
        .iter()
        .map(|step| builder.build(step))
        .collect::<Result<Vec<_>, _>>()?;

    let sql: Vec<&str> = rendered.iter().map(|r| r.sql.as_str()).collect();
    assert_eq!(
        sql,
        vec![
            r#"CREATE SCHEMA IF NOT EXISTS "reporting" AUTHORIZATION report_admin"#,
            r#"GRANT USAGE ON SCHEMA "reporting" TO GROUP analysts"#,
            r#"GRANT SELECT ON TABLE "reporting"."daily_totals" TO GROUP analysts"#,
            r#"REVOKE ALL PRIVILEGES ON TABLE "reporting"."daily_totals" FROM GROUP interns"#,
            r#"DROP SCHEMA IF EXISTS "reporting_old" CASCADE"#,
        ]
    );

    let destructive = rendered
        .iter()
        .filter(|r| r.safety == Safety::Destructive)
        .count();
    assert_eq!(destructive, 2);
    Ok(())
}

#[test]
fn test_load_plan_missing_file() {
    let err = load_plan(std::path::Path::new("/nonexistent/plan.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read migration plan"));
}

#[test]
fn test_step_descriptions() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("plan.yaml");
    fs::write(&path, PLAN)?;

    let plan = load_plan(&path)?;
    let descriptions: Vec<String> = plan
        .steps
        .iter()
        .map(|s| s.describe(TargetKind::Table))
        .collect();

    assert_eq!(
        descriptions,
        vec![
            "create schema reporting with owner report_admin",
            "grant on schema reporting to analysts",
            "grant on table reporting.daily_totals to analysts",
            "revoke on table reporting.daily_totals from interns",
            "drop schema reporting_old cascade",
        ]
    );
    Ok(())
}
