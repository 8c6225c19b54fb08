//! SQL rendering for schema creation and removal

use crate::catalog::{DropSchemaRequest, SchemaRequest};
use crate::render::IdentifierQuoter;

pub fn render_create_schema(request: &SchemaRequest, quoter: &impl IdentifierQuoter) -> String {
    let mut sql = format!(
        "CREATE SCHEMA IF NOT EXISTS {}",
        quoter.quote_ident(&request.name)
    );
    if let Some(owner) = &request.owner {
        sql.push_str(" AUTHORIZATION ");
        sql.push_str(owner);
    }
    sql
}

pub fn render_drop_schema(request: &DropSchemaRequest, quoter: &impl IdentifierQuoter) -> String {
    let mut sql = format!("DROP SCHEMA IF EXISTS {}", quoter.quote_ident(&request.name));
    if request.cascade {
        sql.push_str(" CASCADE");
    }
    sql
}
