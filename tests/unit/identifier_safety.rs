// Tests for SQL injection protection on unquoted role and owner tokens

use pgddl::{StatementBuilder, StatementError};
use rstest::rstest;

#[rstest]
#[case::statement_terminator("app_user; DROP TABLE users")]
#[case::comment("app_user --")]
#[case::whitespace("app user")]
#[case::leading_digit("1app")]
#[case::quote("app'user")]
fn test_strict_mode_rejects_unsafe_roles(#[case] role: &str) {
    let builder = StatementBuilder::new();
    let result = builder.build_grant("users", role, "table", "SELECT");
    assert!(
        matches!(
            result,
            Err(StatementError::InvalidIdentifier { context: "role", .. })
        ),
        "role {:?} should be rejected, got {:?}",
        role,
        result
    );
}

#[test]
fn test_strict_mode_rejects_unsafe_owner() {
    let builder = StatementBuilder::new();
    let err = builder
        .build_create_schema("app", Some("admin CASCADE"))
        .unwrap_err();
    assert!(err.to_string().contains("Invalid owner name 'admin CASCADE'"));
}

#[test]
fn test_empty_names_rejected_in_every_mode() {
    for strict in [true, false] {
        let builder = StatementBuilder::new().strict_identifiers(strict);
        assert!(builder.build_create_schema("", None).is_err());
        assert!(builder.build_drop_schema("", true).is_err());
        assert!(builder.build_grant("", "role1", "table", "ALL").is_err());
        assert!(builder.build_grant("t1", "", "table", "ALL").is_err());
    }
}

#[test]
fn test_quoted_targets_neutralize_injection() {
    let builder = StatementBuilder::new();
    let sql = builder
        .build_grant(r#"users"; DROP TABLE x; --"#, "role1", "schema", "USAGE")
        .unwrap();
    assert_eq!(
        sql,
        r#"GRANT USAGE ON SCHEMA "users""; DROP TABLE x; --" TO GROUP role1"#
    );
}

#[rstest]
#[case::trailing_statement("calc(integer); DROP TABLE users")]
#[case::statement_inside_arguments("calc(integer; DROP TABLE users)")]
#[case::string_literal("calc('x')")]
#[case::line_comment("calc(integer --)")]
#[case::unclosed("calc(integer")]
#[case::trailing_text("calc(integer) TO GROUP admin")]
fn test_function_arguments_reject_injection(#[case] target: &str) {
    let builder = StatementBuilder::new();
    let result = builder.build_grant(target, "role1", "function", "EXECUTE");
    assert!(
        matches!(
            result,
            Err(StatementError::InvalidIdentifier { context: "target", .. })
        ),
        "target {:?} should be rejected, got {:?}",
        target,
        result
    );
}

#[test]
fn test_validation_error_never_yields_sql() {
    let builder = StatementBuilder::new();
    let result = builder.build_revoke("t1", "bad role", "table", "SELECT");
    assert!(result.is_err());
}
