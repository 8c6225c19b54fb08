use crate::builder::StatementBuilder;
use crate::config::{merge::Merge, types::*};
use anyhow::Result;

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            database: self.resolve_database(&defaults.database),
            statements: self.resolve_statements(&defaults.statements),
        })
    }

    fn resolve_database(&self, defaults: &Database) -> Database {
        let db_input = self.config_input.database.as_ref();

        let url = db_input
            .and_then(|d| d.url.as_ref())
            .cloned()
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .or_else(|| defaults.url.clone());

        Database { url }
    }

    fn resolve_statements(&self, defaults: &Statements) -> Statements {
        let input = self.config_input.statements.as_ref();

        Statements {
            default_kind: input
                .and_then(|s| s.default_kind)
                .unwrap_or(defaults.default_kind),
            strict_identifiers: input
                .and_then(|s| s.strict_identifiers)
                .unwrap_or(defaults.strict_identifiers),
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Statements {
    /// Statement builder configured from these settings
    pub fn builder(&self) -> StatementBuilder {
        StatementBuilder::new()
            .strict_identifiers(self.strict_identifiers)
            .default_kind(self.default_kind)
    }
}
