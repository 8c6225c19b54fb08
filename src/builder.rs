//! Statement builder for schema and privilege DDL
//!
//! Every method is a pure function of its arguments and the builder's
//! settings: nothing is logged, cached, or executed here.

use crate::catalog::{DropSchemaRequest, GrantRequest, SchemaRequest, TargetKind};
use crate::error::StatementError;
use crate::migration::MigrationStep;
use crate::render::grant::{render_grant_statement, render_revoke_statement};
use crate::render::schema::{render_create_schema, render_drop_schema};
use crate::render::{
    IdentifierQuoter, PgQuoter, RenderedSql, split_function_signature, split_qualified_name,
};
use crate::validation::{validate_argument_list, validate_bare_name, validate_quoted_name};

#[derive(Debug, Clone)]
pub struct StatementBuilder<Q: IdentifierQuoter = PgQuoter> {
    quoter: Q,
    strict_identifiers: bool,
    default_kind: TargetKind,
}

impl StatementBuilder<PgQuoter> {
    pub fn new() -> Self {
        Self::with_quoter(PgQuoter)
    }
}

impl Default for StatementBuilder<PgQuoter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: IdentifierQuoter> StatementBuilder<Q> {
    pub fn with_quoter(quoter: Q) -> Self {
        Self {
            quoter,
            strict_identifiers: true,
            default_kind: TargetKind::Table,
        }
    }

    /// Toggle the allow-list check on role and owner tokens, which are
    /// interpolated without quoting. Empty names are rejected either way.
    pub fn strict_identifiers(mut self, strict: bool) -> Self {
        self.strict_identifiers = strict;
        self
    }

    /// Kind used by [`StatementBuilder::build`] when a step leaves it out
    pub fn default_kind(mut self, kind: TargetKind) -> Self {
        self.default_kind = kind;
        self
    }

    pub fn build_create_schema(
        &self,
        name: &str,
        owner: Option<&str>,
    ) -> Result<String, StatementError> {
        let request = SchemaRequest::new(name, owner);
        validate_quoted_name("schema", &request.name)?;
        if let Some(owner) = &request.owner {
            validate_bare_name("owner", owner, self.strict_identifiers)?;
        }

        Ok(render_create_schema(&request, &self.quoter))
    }

    pub fn build_drop_schema(&self, name: &str, cascade: bool) -> Result<String, StatementError> {
        let request = DropSchemaRequest::new(name, cascade);
        validate_quoted_name("schema", &request.name)?;

        Ok(render_drop_schema(&request, &self.quoter))
    }

    /// Render `GRANT <privileges> ON <KIND> "<target>" TO GROUP <role>`.
    ///
    /// `privileges` is `ALL` or a comma separated list; both it and `kind` are
    /// case-insensitive.
    pub fn build_grant(
        &self,
        target: &str,
        role: &str,
        kind: &str,
        privileges: &str,
    ) -> Result<String, StatementError> {
        let request = self.grant_request(target, role, kind, privileges)?;
        Ok(render_grant_statement(&request, &self.quoter))
    }

    /// Same contract as [`StatementBuilder::build_grant`], rendering
    /// `REVOKE ... FROM GROUP <role>`.
    pub fn build_revoke(
        &self,
        target: &str,
        role: &str,
        kind: &str,
        privileges: &str,
    ) -> Result<String, StatementError> {
        let request = self.grant_request(target, role, kind, privileges)?;
        Ok(render_revoke_statement(&request, &self.quoter))
    }

    /// Render a plan step, tagging statements that remove schemas or
    /// privileges as destructive.
    pub fn build(&self, step: &MigrationStep) -> Result<RenderedSql, StatementError> {
        match step {
            MigrationStep::CreateSchema { name, owner } => self
                .build_create_schema(name, owner.as_deref())
                .map(RenderedSql::new),
            MigrationStep::DropSchema { name, cascade } => self
                .build_drop_schema(name, *cascade)
                .map(RenderedSql::destructive),
            MigrationStep::Grant {
                target,
                role,
                kind,
                privileges,
            } => self
                .build_grant(target, role, &self.step_kind(kind.as_deref()), privileges)
                .map(RenderedSql::new),
            MigrationStep::Revoke {
                target,
                role,
                kind,
                privileges,
            } => self
                .build_revoke(target, role, &self.step_kind(kind.as_deref()), privileges)
                .map(RenderedSql::destructive),
        }
    }

    fn step_kind(&self, kind: Option<&str>) -> String {
        kind.map(str::to_string)
            .unwrap_or_else(|| self.default_kind.keyword().to_string())
    }

    fn grant_request(
        &self,
        target: &str,
        role: &str,
        kind: &str,
        privileges: &str,
    ) -> Result<GrantRequest, StatementError> {
        let request = GrantRequest::parse(target, role, kind, privileges)?;

        validate_quoted_name("target", &request.target)?;
        if request.kind.is_schema_qualified() {
            let name = if request.kind == TargetKind::Function {
                let (name, arguments) = split_function_signature(&request.target);
                if let Some(arguments) = arguments {
                    validate_argument_list(&request.target, arguments)?;
                }
                name
            } else {
                request.target.as_str()
            };

            let parts = split_qualified_name(name).ok_or_else(|| {
                StatementError::invalid_identifier(
                    "target",
                    &request.target,
                    "has an unterminated quoted identifier",
                )
            })?;
            for part in &parts {
                validate_quoted_name("target", part)?;
            }
        }
        validate_bare_name("role", &request.role, self.strict_identifiers)?;

        Ok(request)
    }
}
