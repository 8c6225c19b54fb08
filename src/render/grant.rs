//! SQL rendering for GRANT and REVOKE statements
//!
//! Grantees are written with the legacy `GROUP` keyword and are not quoted;
//! callers are expected to have validated the role token beforehand.

use crate::catalog::{GrantRequest, TargetKind};
use crate::render::{IdentifierQuoter, split_function_signature};

pub fn render_grant_statement(request: &GrantRequest, quoter: &impl IdentifierQuoter) -> String {
    format!(
        "GRANT {} ON {} TO GROUP {}",
        request.privileges.clause(),
        render_grant_object_clause(request, quoter),
        request.role
    )
}

pub fn render_revoke_statement(request: &GrantRequest, quoter: &impl IdentifierQuoter) -> String {
    format!(
        "REVOKE {} ON {} FROM GROUP {}",
        request.privileges.clause(),
        render_grant_object_clause(request, quoter),
        request.role
    )
}

/// Render the `<KIND> <name>` part shared by GRANT and REVOKE.
///
/// Unlike pg_dump output, the kind keyword is always present, including for
/// tables. A function's argument list is appended unquoted after its name.
pub fn render_grant_object_clause(request: &GrantRequest, quoter: &impl IdentifierQuoter) -> String {
    let name = match request.kind {
        TargetKind::Function => {
            let (name, arguments) = split_function_signature(&request.target);
            format!("{}{}", quoter.quote_qualified(name), arguments.unwrap_or(""))
        }
        kind if kind.is_schema_qualified() => quoter.quote_qualified(&request.target),
        _ => quoter.quote_ident(&request.target),
    };
    format!("{} {}", request.kind.keyword(), name)
}
